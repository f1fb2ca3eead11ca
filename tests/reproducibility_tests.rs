//! Seeded reproducibility
//!
//! Given the same seed and reference time, two runs must produce
//! byte-identical serialized sequences; different seeds must diverge.

use chrono::{TimeZone, Utc};
use enterprise_dataset_generator::pipeline::{DatasetPipeline, EnterpriseDataset};
use enterprise_dataset_generator::types::GeneratorConfig;

fn config(seed: u64) -> GeneratorConfig {
    GeneratorConfig {
        unit_count: 25,
        person_count: 100,
        asset_count: 150,
        access_event_count: 300,
        incident_count: 40,
        batch_size: 100,
        seed: Some(seed),
        output_dir: "generated".to_string(),
    }
}

fn generate_pinned(seed: u64) -> EnterpriseDataset {
    let reference = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).single().unwrap();
    DatasetPipeline::with_reference_time(config(seed), reference)
        .unwrap()
        .run()
        .unwrap()
}

fn serialize_all(dataset: &EnterpriseDataset) -> Vec<String> {
    vec![
        serde_json::to_string(&dataset.units).unwrap(),
        serde_json::to_string(&dataset.people).unwrap(),
        serde_json::to_string(&dataset.assets).unwrap(),
        serde_json::to_string(&dataset.permissions).unwrap(),
        serde_json::to_string(&dataset.access_events).unwrap(),
        serde_json::to_string(&dataset.incidents).unwrap(),
    ]
}

#[test]
fn same_seed_produces_byte_identical_output() {
    let first = serialize_all(&generate_pinned(1234));
    let second = serialize_all(&generate_pinned(1234));

    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a, b, "seeded runs must be byte-identical");
    }
}

#[test]
fn different_seeds_diverge() {
    let first = serialize_all(&generate_pinned(1));
    let second = serialize_all(&generate_pinned(2));

    // Unit names and pinned classifications are deterministic, but the
    // random attributes make at least the people and events differ
    assert_ne!(first[1], second[1], "people must differ across seeds");
    assert_ne!(first[4], second[4], "events must differ across seeds");
}

#[test]
fn deterministic_classification_survives_reseeding() {
    let first = generate_pinned(10);
    let second = generate_pinned(99);

    for (a, b) in first.units.iter().zip(&second.units) {
        assert_eq!(a.name, b.name, "catalog order is fixed");
        if matches!(
            a.name.as_str(),
            "Executive_Board"
                | "Security"
                | "Cybersecurity"
                | "Legal_Compliance"
                | "Finance_Controlling"
                | "Human_Resources"
                | "Internal_Audit"
                | "IT_Digitalization"
                | "Research_Development"
                | "Risk_Management"
        ) {
            assert_eq!(
                a.classification, b.classification,
                "pinned classification for {} must not depend on the seed",
                a.name
            );
        }
    }
}
