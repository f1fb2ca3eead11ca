//! Configuration for the dataset generator
//!
//! Configuration is layered: built-in defaults, an optional JSON file, and
//! command-line overrides, with the CLI taking precedence. Counts are the
//! contract of the pipeline — every stage must produce exactly its
//! configured number of records.

use crate::types::catalog;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Command line arguments
#[derive(Debug, Clone, Parser)]
#[command(
    name = "enterprise-dataset-generator",
    version = "0.1.0",
    about = "Generates a consistent synthetic enterprise security dataset",
    long_about = "Generates organizational units, employees, classified documents, \
access permissions, access events, and security incidents that satisfy \
security-clearance ordering and referential-integrity invariants.

EXAMPLES:
    # Run with default settings
    enterprise-dataset-generator

    # Use a configuration file
    enterprise-dataset-generator --config config.json

    # Override specific counts with a fixed seed
    enterprise-dataset-generator --asset-count 1000 --seed 42

    # Generate a configuration template
    enterprise-dataset-generator --print-config > my-config.json

    # Validate configuration without generating
    enterprise-dataset-generator --config my-config.json --dry-run"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(short, long, help = "Configuration file path (JSON format)")]
    pub config: Option<String>,

    /// Number of organizational units to generate
    #[arg(long, help = "Number of organizational units (max: name catalog size)")]
    pub unit_count: Option<usize>,

    /// Number of people to generate
    #[arg(long, help = "Number of people")]
    pub person_count: Option<usize>,

    /// Number of classified documents to generate
    #[arg(long, help = "Number of classified documents")]
    pub asset_count: Option<usize>,

    /// Number of access events to generate
    #[arg(long, help = "Number of access events")]
    pub access_event_count: Option<usize>,

    /// Number of security incidents to generate
    #[arg(long, help = "Number of security incidents")]
    pub incident_count: Option<usize>,

    /// Batch size for the transport hand-off
    #[arg(long, help = "Records per batch handed to the transport collaborator")]
    pub batch_size: Option<usize>,

    /// Random seed for reproducible datasets
    #[arg(long, help = "Random seed for reproducible datasets")]
    pub seed: Option<u64>,

    /// Directory for the generated JSON artifacts
    #[arg(long, help = "Directory for generated JSON artifacts")]
    pub output_dir: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Validate configuration without generating
    #[arg(long, help = "Validate configuration without generating data")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Number of organizational units to generate
    pub unit_count: Option<usize>,
    /// Number of people to generate
    pub person_count: Option<usize>,
    /// Number of classified documents to generate
    pub asset_count: Option<usize>,
    /// Number of access events to generate
    pub access_event_count: Option<usize>,
    /// Number of security incidents to generate
    pub incident_count: Option<usize>,
    /// Batch size for the transport hand-off
    pub batch_size: Option<usize>,
    /// Random seed for reproducible datasets
    pub seed: Option<u64>,
    /// Directory for the generated JSON artifacts
    pub output_dir: Option<String>,
}

/// Configuration for a generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of organizational units to generate
    pub unit_count: usize,
    /// Number of people to generate
    pub person_count: usize,
    /// Number of classified documents to generate
    pub asset_count: usize,
    /// Number of access events to generate
    pub access_event_count: usize,
    /// Number of security incidents to generate
    pub incident_count: usize,
    /// Records per batch handed to the transport collaborator
    pub batch_size: usize,
    /// Random seed; `None` draws entropy and the run is not reproducible
    pub seed: Option<u64>,
    /// Directory for the generated JSON artifacts
    pub output_dir: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            unit_count: 25,
            person_count: 800,
            asset_count: 150_000,
            access_event_count: 200_000,
            incident_count: 15_000,
            batch_size: 1_000,
            seed: None,
            output_dir: "generated".to_string(),
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for generator configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// A record count is zero
    #[error("{field} must be greater than 0")]
    InvalidCount {
        /// Name of the zero-valued count field
        field: &'static str,
    },

    /// More units requested than the name catalog provides
    #[error("unit_count {requested} exceeds the unit name catalog size {available}")]
    UnitCatalogExceeded {
        /// Requested unit count
        requested: usize,
        /// Available catalog entries
        available: usize,
    },

    /// Batch size is zero
    #[error("batch_size must be greater than 0")]
    InvalidBatchSize,
}

impl GeneratorConfig {
    /// Create configuration from parsed CLI arguments and an optional
    /// configuration file, with CLI values taking precedence.
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = if let Some(config_path) = &args.config {
            Self::from_file(config_path)?
        } else {
            Self::default()
        };

        Self::apply_cli_overrides(&mut config, args);
        Ok(config)
    }

    /// Load configuration from a JSON file, merging with defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            unit_count: config_file.unit_count.unwrap_or(defaults.unit_count),
            person_count: config_file.person_count.unwrap_or(defaults.person_count),
            asset_count: config_file.asset_count.unwrap_or(defaults.asset_count),
            access_event_count: config_file
                .access_event_count
                .unwrap_or(defaults.access_event_count),
            incident_count: config_file.incident_count.unwrap_or(defaults.incident_count),
            batch_size: config_file.batch_size.unwrap_or(defaults.batch_size),
            seed: config_file.seed.or(defaults.seed),
            output_dir: config_file.output_dir.unwrap_or(defaults.output_dir),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.unit_count {
            config.unit_count = value;
        }
        if let Some(value) = args.person_count {
            config.person_count = value;
        }
        if let Some(value) = args.asset_count {
            config.asset_count = value;
        }
        if let Some(value) = args.access_event_count {
            config.access_event_count = value;
        }
        if let Some(value) = args.incident_count {
            config.incident_count = value;
        }
        if let Some(value) = args.batch_size {
            config.batch_size = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
        if let Some(value) = args.output_dir {
            config.output_dir = value;
        }
    }

    /// Print configuration as pretty JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.unit_count == 0 {
            return Err(ConfigValidationError::InvalidCount { field: "unit_count" });
        }
        if self.person_count == 0 {
            return Err(ConfigValidationError::InvalidCount { field: "person_count" });
        }
        if self.asset_count == 0 {
            return Err(ConfigValidationError::InvalidCount { field: "asset_count" });
        }
        if self.access_event_count == 0 {
            return Err(ConfigValidationError::InvalidCount { field: "access_event_count" });
        }
        if self.incident_count == 0 {
            return Err(ConfigValidationError::InvalidCount { field: "incident_count" });
        }
        if self.batch_size == 0 {
            return Err(ConfigValidationError::InvalidBatchSize);
        }

        if self.unit_count > catalog::UNIT_NAMES.len() {
            return Err(ConfigValidationError::UnitCatalogExceeded {
                requested: self.unit_count,
                available: catalog::UNIT_NAMES.len(),
            });
        }

        Ok(())
    }
}
