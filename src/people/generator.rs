//! Person generation and the manager backfill mapping

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::Rng;
use std::collections::BTreeMap;
use tracing::debug;

use crate::org::OrgUnit;
use crate::people::Person;
use crate::pipeline::{GeneratorError, GeneratorResult};
use crate::types::catalog;
use crate::types::sampling::{date_within_days_before, datetime_within_days_before, pick};
use crate::types::{ClearanceLevel, PersonId, RoleTier, UnitId};

/// Probability that a staff-tier person keeps the full unit clearance
/// (otherwise they sit one ordinal step below, floored at `PUBLIC`).
const FULL_CLEARANCE_PROBABILITY: f64 = 0.7;

/// Probability that a generated account is active.
const ACTIVE_PROBABILITY: f64 = 0.95;

/// How far back hire dates reach, in days.
const HIRE_WINDOW_DAYS: i64 = 3_650;

/// How far back record creation timestamps reach, in days.
const CREATION_WINDOW_DAYS: i64 = 730;

/// How far back last-login timestamps reach, in days.
const LOGIN_WINDOW_DAYS: i64 = 30;

/// The `unit -> lead` mapping produced alongside the person sequence.
///
/// Person generation never touches the unit records; the pipeline driver
/// applies this mapping to produce the final unit sequence. This keeps the
/// stages free of shared mutable state.
#[derive(Debug, Clone, Default)]
pub struct ManagerAssignments {
    leads: BTreeMap<UnitId, PersonId>,
}

impl ManagerAssignments {
    /// The lead assigned to manage `unit`, if any.
    pub fn manager_of(&self, unit: UnitId) -> Option<PersonId> {
        self.leads.get(&unit).copied()
    }

    /// Number of units with an assigned lead.
    pub fn len(&self) -> usize {
        self.leads.len()
    }

    /// Whether no leads were assigned.
    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    /// Set every unit's `manager_id` from this mapping.
    ///
    /// Fails with a consistency violation if any unit is missing a lead;
    /// person generation guarantees one lead per unit, so a miss here means
    /// the unit sequence does not match the one people were generated from.
    pub fn apply_to(&self, units: &mut [OrgUnit]) -> GeneratorResult<()> {
        for unit in units.iter_mut() {
            let lead = self.manager_of(unit.id).ok_or_else(|| {
                GeneratorError::consistency(format!("no lead assigned for unit {}", unit.id))
            })?;
            unit.manager_id = Some(lead);
        }
        Ok(())
    }
}

/// Generator for people.
///
/// Role tiers follow generation order: with K units, the first K people are
/// leads (one per unit, in unit order), the next 2K are seniors, and the
/// remainder are staff. Seniors and staff draw their unit uniformly at
/// random — deliberately not weighted by the unit's descriptive headcount
/// target.
#[derive(Debug)]
pub struct PersonGenerator {
    reference_time: DateTime<Utc>,
}

impl PersonGenerator {
    /// Create a generator anchored at the given reference time.
    pub fn new(reference_time: DateTime<Utc>) -> Self {
        Self { reference_time }
    }

    /// Generate exactly `count` people plus the manager mapping for `units`.
    pub fn generate(
        &self,
        count: usize,
        units: &[OrgUnit],
        rng: &mut StdRng,
    ) -> GeneratorResult<(Vec<Person>, ManagerAssignments)> {
        if units.is_empty() {
            return Err(GeneratorError::configuration(
                "cannot generate people without any units",
            ));
        }
        if count < units.len() {
            return Err(GeneratorError::consistency(format!(
                "every unit requires a lead: {} people cannot cover {} units",
                count,
                units.len()
            )));
        }

        let lead_cutoff = units.len();
        let senior_cutoff = units.len() * 3;

        let mut people = Vec::with_capacity(count);
        let mut assignments = ManagerAssignments::default();

        for index in 0..count {
            let id = PersonId::new(index as u32 + 1);

            let (tier, unit) = if index < lead_cutoff {
                // Lead i belongs to unit i so that every manager is a member
                // of the unit they manage.
                (RoleTier::Lead, &units[index])
            } else if index < senior_cutoff {
                (RoleTier::Senior, pick(rng, units))
            } else {
                (RoleTier::Staff, pick(rng, units))
            };

            let role = match tier {
                RoleTier::Lead => catalog::LEAD_TITLE,
                RoleTier::Senior => pick(rng, &catalog::SENIOR_TITLES),
                RoleTier::Staff => pick(rng, &catalog::STAFF_TITLES),
            };

            let security_clearance = self.derive_clearance(tier, unit.classification, rng);

            let manager_id = if tier == RoleTier::Lead {
                assignments.leads.insert(unit.id, id);
                None // a person is never their own manager
            } else {
                assignments.manager_of(unit.id)
            };

            let person = Person {
                id,
                employee_number: format!("EN{:06}", index + 1),
                first_name: pick(rng, &catalog::FIRST_NAMES).to_string(),
                last_name: pick(rng, &catalog::LAST_NAMES).to_string(),
                email: format!("{}@corp.example", id.to_string().to_lowercase()),
                unit_id: unit.id,
                role: role.to_string(),
                role_tier: tier,
                security_clearance,
                hire_date: date_within_days_before(rng, self.reference_time, HIRE_WINDOW_DAYS),
                salary: rng.gen_range(35_000..=150_000),
                phone: format!(
                    "+49-{}-{}",
                    rng.gen_range(20..100),
                    rng.gen_range(1_000_000..10_000_000)
                ),
                office_location: unit.location.clone(),
                office_room: format!(
                    "{}{}",
                    pick(rng, &['A', 'B', 'C']),
                    rng.gen_range(100..1000)
                ),
                manager_id,
                active: rng.gen::<f64>() < ACTIVE_PROBABILITY,
                last_login: datetime_within_days_before(
                    rng,
                    self.reference_time,
                    LOGIN_WINDOW_DAYS,
                ),
                created_at: datetime_within_days_before(
                    rng,
                    self.reference_time,
                    CREATION_WINDOW_DAYS,
                ),
            };

            debug!(person = %person.id, unit = %person.unit_id, tier = %person.role_tier, "generated person");
            people.push(person);
        }

        Ok((people, assignments))
    }

    /// Leads and seniors inherit the unit classification; staff inherit it
    /// with probability 0.7, otherwise they sit one step below.
    fn derive_clearance(
        &self,
        tier: RoleTier,
        unit_classification: ClearanceLevel,
        rng: &mut StdRng,
    ) -> ClearanceLevel {
        match tier {
            RoleTier::Lead | RoleTier::Senior => unit_classification,
            RoleTier::Staff => {
                if rng.gen::<f64>() < FULL_CLEARANCE_PROBABILITY {
                    unit_classification
                } else {
                    unit_classification.one_below()
                }
            }
        }
    }
}
