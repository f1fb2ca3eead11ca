//! Organizational unit generation

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;

use crate::org::OrgUnit;
use crate::pipeline::{GeneratorError, GeneratorResult};
use crate::types::catalog;
use crate::types::sampling::{datetime_within_days_before, pick};
use crate::types::UnitId;

/// How far back unit creation timestamps reach, in days.
const CREATION_WINDOW_DAYS: i64 = 730;

/// Probability that a unit after the first reports into the first unit.
const PARENT_UNIT_PROBABILITY: f64 = 0.3;

/// Generator for organizational units.
///
/// Classification assignment is deterministic for governance, security, and
/// legal names and drawn from a restricted two-level pool otherwise; see
/// [`catalog::pinned_unit_classification`].
#[derive(Debug)]
pub struct OrgUnitGenerator {
    reference_time: DateTime<Utc>,
}

impl OrgUnitGenerator {
    /// Create a generator anchored at the given reference time.
    pub fn new(reference_time: DateTime<Utc>) -> Self {
        Self { reference_time }
    }

    /// Generate exactly `count` units, one catalog name each, no repeats.
    ///
    /// Fails with a configuration error if the name catalog is smaller than
    /// the requested count.
    pub fn generate(&self, count: usize, rng: &mut StdRng) -> GeneratorResult<Vec<OrgUnit>> {
        if count > catalog::UNIT_NAMES.len() {
            return Err(GeneratorError::configuration(format!(
                "requested {} units but the name catalog has only {}",
                count,
                catalog::UNIT_NAMES.len()
            )));
        }

        let mut units = Vec::with_capacity(count);

        for (index, name) in catalog::UNIT_NAMES.iter().take(count).enumerate() {
            let id = UnitId::new(index as u32 + 1);

            let classification = match catalog::pinned_unit_classification(name) {
                Some(level) => level,
                None => *pick(rng, &catalog::UNIT_RANDOM_LEVELS),
            };

            // Units after the first occasionally report into the first unit
            let parent_unit = if index > 0 && rng.gen::<f64>() < PARENT_UNIT_PROBABILITY {
                Some(UnitId::new(1))
            } else {
                None
            };

            let unit = OrgUnit {
                id,
                name: name.to_string(),
                description: format!("Responsible for {}", name.replace('_', " ")),
                classification,
                budget: rng.gen_range(100_000..=5_000_000),
                headcount_target: rng.gen_range(15..=50),
                location: pick(rng, &catalog::CITY_LOCATIONS).to_string(),
                manager_id: None, // backfilled by the driver after person generation
                parent_unit,
                cost_center: format!("CC_{:04}", index + 1),
                created_at: datetime_within_days_before(
                    rng,
                    self.reference_time,
                    CREATION_WINDOW_DAYS,
                ),
            };

            debug!(unit = %unit.id, name = %unit.name, classification = %unit.classification, "generated unit");
            units.push(unit);
        }

        Ok(units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ClearanceLevel;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn generate_units(count: usize, seed: u64) -> GeneratorResult<Vec<OrgUnit>> {
        let mut rng = StdRng::seed_from_u64(seed);
        OrgUnitGenerator::new(Utc::now()).generate(count, &mut rng)
    }

    #[test]
    fn test_generates_exact_count() {
        let units = generate_units(25, 1).unwrap();
        assert_eq!(units.len(), 25);
    }

    #[test]
    fn test_names_are_unique() {
        let units = generate_units(25, 2).unwrap();
        let names: HashSet<_> = units.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names.len(), units.len());
    }

    #[test]
    fn test_count_exceeding_catalog_fails() {
        let result = generate_units(catalog::UNIT_NAMES.len() + 1, 3);
        assert!(matches!(result, Err(GeneratorError::Configuration(_))));
    }

    #[test]
    fn test_pinned_classifications_are_stable_across_runs() {
        let a = generate_units(25, 4).unwrap();
        let b = generate_units(25, 999).unwrap();

        for (ua, ub) in a.iter().zip(&b) {
            if catalog::pinned_unit_classification(&ua.name).is_some() {
                assert_eq!(
                    ua.classification, ub.classification,
                    "pinned classification drifted for {}",
                    ua.name
                );
            }
        }

        let security = a.iter().find(|u| u.name == "Security").unwrap();
        assert_eq!(security.classification, ClearanceLevel::TopSecret);
    }

    #[test]
    fn test_unpinned_classifications_stay_in_restricted_pool() {
        let units = generate_units(25, 5).unwrap();

        for unit in &units {
            if catalog::pinned_unit_classification(&unit.name).is_none() {
                assert!(
                    catalog::UNIT_RANDOM_LEVELS.contains(&unit.classification),
                    "{} classified outside the restricted pool: {}",
                    unit.name,
                    unit.classification
                );
            }
        }
    }

    #[test]
    fn test_manager_is_unset_before_backfill() {
        let units = generate_units(10, 6).unwrap();
        assert!(units.iter().all(|u| u.manager_id.is_none()));
    }

    #[test]
    fn test_first_unit_has_no_parent() {
        let units = generate_units(25, 7).unwrap();
        assert!(units[0].parent_unit.is_none());

        for unit in &units[1..] {
            if let Some(parent) = unit.parent_unit {
                assert_eq!(parent, units[0].id);
            }
        }
    }

    #[test]
    fn test_budget_and_headcount_ranges() {
        let units = generate_units(25, 8).unwrap();
        for unit in &units {
            assert!((100_000..=5_000_000).contains(&unit.budget));
            assert!((15..=50).contains(&unit.headcount_target));
        }
    }
}
