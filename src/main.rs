// Enterprise Dataset Generator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/enterprise-dataset-generator
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/enterprise-dataset-generator --asset-count 1000 --seed 42 --verbose
// ```

use anyhow::Context;
use clap::Parser;
use enterprise_dataset_generator::pipeline::{
    plan_batches, DatasetPipeline, DatasetWriter, EnterpriseDataset, LoggingConfig,
};
use enterprise_dataset_generator::types::{CliArgs, GeneratorConfig};
use std::process;
use tracing::{info, Level};

fn main() {
    let args = CliArgs::parse();

    // Handle flags that don't require full initialization
    if args.print_config {
        match GeneratorConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: minimal logging for normal users
        LoggingConfig::new().with_level(Level::WARN).init()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: CliArgs) -> anyhow::Result<()> {
    let dry_run = args.dry_run;

    let config = GeneratorConfig::from_cli_args(args)
        .context("failed to load configuration")?;

    config.validate().context("configuration validation failed")?;
    info!("Configuration loaded and validated");

    if dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - no data will be generated.");
        print_configuration_summary(&config);
        return Ok(());
    }

    print_startup_banner(&config);

    eprintln!("Generating dataset...");
    let batch_size = config.batch_size;
    let output_dir = config.output_dir.clone();

    let dataset = DatasetPipeline::new(config)
        .context("failed to initialize pipeline")?
        .run()
        .context("dataset generation failed")?;

    eprintln!("Writing artifacts...");
    let writer = DatasetWriter::new(&output_dir);
    let paths = writer.write_all(&dataset).context("failed to write artifacts")?;
    for path in &paths {
        eprintln!("  wrote {}", path.display());
    }

    report_batch_plan(&dataset, batch_size)?;

    eprintln!();
    eprintln!("{}", dataset.summary);
    Ok(())
}

/// Plan transport batches for every table and report the totals. Actual
/// transport belongs to an external collaborator; the binary only verifies
/// the sequences chunk cleanly.
fn report_batch_plan(dataset: &EnterpriseDataset, batch_size: usize) -> anyhow::Result<()> {
    let planned = [
        ("departments", plan_batches("departments", &dataset.units, batch_size)?.len()),
        ("employees", plan_batches("employees", &dataset.people, batch_size)?.len()),
        ("documents", plan_batches("documents", &dataset.assets, batch_size)?.len()),
        (
            "document_permissions",
            plan_batches("document_permissions", &dataset.permissions, batch_size)?.len(),
        ),
        ("access_logs", plan_batches("access_logs", &dataset.access_events, batch_size)?.len()),
        (
            "security_events",
            plan_batches("security_events", &dataset.incidents, batch_size)?.len(),
        ),
    ];

    eprintln!();
    eprintln!("Transport batch plan ({} records per batch):", batch_size);
    for (table, count) in planned {
        eprintln!("  {}: {} batches", table, count);
    }

    Ok(())
}

fn print_startup_banner(config: &GeneratorConfig) {
    eprintln!("Enterprise Dataset Generator");
    eprintln!("============================");
    eprintln!("Generates a consistent synthetic enterprise security dataset");
    eprintln!();

    print_configuration_summary(config);
}

fn print_configuration_summary(config: &GeneratorConfig) {
    eprintln!("Configuration:");
    eprintln!("  Units: {}", config.unit_count);
    eprintln!("  People: {}", config.person_count);
    eprintln!("  Documents: {}", config.asset_count);
    eprintln!("  Access Events: {}", config.access_event_count);
    eprintln!("  Incidents: {}", config.incident_count);
    eprintln!("  Batch Size: {}", config.batch_size);
    eprintln!("  Output Directory: {}", config.output_dir);
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    eprintln!();
}
