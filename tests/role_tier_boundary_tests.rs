//! Role tier boundaries at reference scale
//!
//! With 25 units and 800 people, the tier boundaries sit at generation
//! indices 25 (leads end) and 75 (seniors end): person #26 is the first
//! senior and person #76 the first staff member.

use enterprise_dataset_generator::pipeline::DatasetPipeline;
use enterprise_dataset_generator::types::{GeneratorConfig, RoleTier};

#[test]
fn reference_scale_tier_boundaries() {
    let config = GeneratorConfig {
        unit_count: 25,
        person_count: 800,
        asset_count: 50,
        access_event_count: 50,
        incident_count: 10,
        batch_size: 100,
        seed: Some(42),
        output_dir: "generated".to_string(),
    };

    let dataset = DatasetPipeline::new(config).unwrap().run().unwrap();
    let people = &dataset.people;
    assert_eq!(people.len(), 800);

    // Indices are zero-based; "person #26" is people[25]
    assert_eq!(people[24].role_tier, RoleTier::Lead, "person #25 must be the last lead");
    assert_eq!(people[25].role_tier, RoleTier::Senior, "person #26 must be the first senior");
    assert_eq!(people[74].role_tier, RoleTier::Senior, "person #75 must be the last senior");
    assert_eq!(people[75].role_tier, RoleTier::Staff, "person #76 must be the first staff");

    let leads = people.iter().filter(|p| p.role_tier == RoleTier::Lead).count();
    let seniors = people.iter().filter(|p| p.role_tier == RoleTier::Senior).count();
    let staff = people.iter().filter(|p| p.role_tier == RoleTier::Staff).count();

    assert_eq!(leads, 25);
    assert_eq!(seniors, 50);
    assert_eq!(staff, 725);
}

#[test]
fn leads_and_seniors_inherit_unit_clearance() {
    let config = GeneratorConfig {
        unit_count: 25,
        person_count: 200,
        asset_count: 50,
        access_event_count: 50,
        incident_count: 10,
        batch_size: 100,
        seed: Some(7),
        output_dir: "generated".to_string(),
    };

    let dataset = DatasetPipeline::new(config).unwrap().run().unwrap();

    for person in dataset.people.iter().filter(|p| p.role_tier.is_elevated()) {
        let unit = dataset.units.iter().find(|u| u.id == person.unit_id).unwrap();
        assert_eq!(
            person.security_clearance, unit.classification,
            "{} ({}) must inherit the full unit clearance",
            person.id, person.role_tier
        );
    }
}
