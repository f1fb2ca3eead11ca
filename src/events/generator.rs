//! Access event generation

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;
use uuid::Uuid;

use crate::assets::Asset;
use crate::events::{AccessAction, AccessEvent, AccessLocation, AccessResult, DenialReason};
use crate::people::Person;
use crate::pipeline::{GeneratorError, GeneratorResult};
use crate::types::catalog;
use crate::types::sampling::{datetime_within_days_before, pick, random_ipv4};
use crate::types::EventId;

/// Probability that a clearance-eligible attempt succeeds.
const SUCCESS_PROBABILITY: f64 = 0.9;

/// How far back event timestamps reach, in days.
const EVENT_WINDOW_DAYS: i64 = 180;

/// Generator for access events.
///
/// Documents and people are sampled independently with replacement; the
/// permission table is deliberately not consulted. Eligibility is recomputed
/// from clearance ordinals, so the stream includes attempts by people who
/// hold no grant on the target — that asymmetry models unauthorized-attempt
/// noise and must not be reconciled away.
#[derive(Debug)]
pub struct AccessEventGenerator {
    reference_time: DateTime<Utc>,
}

impl AccessEventGenerator {
    /// Create a generator anchored at the given reference time.
    pub fn new(reference_time: DateTime<Utc>) -> Self {
        Self { reference_time }
    }

    /// Generate exactly `count` events referencing the given documents and
    /// people.
    pub fn generate(
        &self,
        count: usize,
        assets: &[Asset],
        people: &[Person],
        rng: &mut StdRng,
    ) -> GeneratorResult<Vec<AccessEvent>> {
        if assets.is_empty() {
            return Err(GeneratorError::configuration(
                "cannot generate access events without any documents",
            ));
        }
        if people.is_empty() {
            return Err(GeneratorError::configuration(
                "cannot generate access events without any people",
            ));
        }

        let mut events = Vec::with_capacity(count);

        for index in 0..count {
            let asset = pick(rng, assets);
            let person = pick(rng, people);

            let eligible = person.security_clearance.clears(asset.classification);
            let granted = eligible && rng.gen::<f64>() < SUCCESS_PROBABILITY;

            let (mut result, mut reason) = if granted {
                (AccessResult::Success, None)
            } else {
                (
                    AccessResult::AccessDenied,
                    Some(*pick(rng, &DenialReason::ROLL_FAILURE_REASONS)),
                )
            };

            let action = *pick(rng, &AccessAction::ALL);

            // Mutate actions require ownership or an elevated tier even when
            // the clearance roll passed
            if action.is_mutation()
                && granted
                && !person.role_tier.is_elevated()
                && person.id != asset.creator_id
            {
                result = AccessResult::AccessDenied;
                reason = Some(DenialReason::InsufficientPermissions);
            }

            let duration_seconds = if result == AccessResult::Success {
                rng.gen_range(1..=3_600)
            } else {
                0
            };

            let bytes_transferred =
                if action == AccessAction::Download && result == AccessResult::Success {
                    rng.gen_range(1_024..=asset.file_size_bytes.max(1_024))
                } else {
                    0
                };

            // Session ids are RNG-derived v4 UUIDs so seeded runs reproduce
            let session_bytes: [u8; 16] = rng.gen();
            let session_id: Uuid = uuid::Builder::from_random_bytes(session_bytes).into_uuid();

            events.push(AccessEvent {
                id: EventId::new(index as u32 + 1),
                asset_id: asset.id,
                person_id: person.id,
                action,
                result,
                reason,
                ip_address: random_ipv4(rng),
                user_agent: pick(rng, &catalog::USER_AGENTS).to_string(),
                session_id,
                duration_seconds,
                bytes_transferred,
                location: *pick(rng, &AccessLocation::ALL),
                timestamp: datetime_within_days_before(
                    rng,
                    self.reference_time,
                    EVENT_WINDOW_DAYS,
                ),
            });
        }

        debug!(events = events.len(), "generated access events");
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetGenerator;
    use crate::org::OrgUnitGenerator;
    use crate::people::PersonGenerator;
    use crate::types::RoleTier;
    use rand::SeedableRng;

    fn setup(event_count: usize, seed: u64) -> (Vec<Person>, Vec<Asset>, Vec<AccessEvent>) {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(seed);
        let units = OrgUnitGenerator::new(now).generate(25, &mut rng).unwrap();
        let (people, _) = PersonGenerator::new(now).generate(200, &units, &mut rng).unwrap();
        let assets = AssetGenerator::new(now).generate(300, &units, &people, &mut rng).unwrap();
        let events = AccessEventGenerator::new(now)
            .generate(event_count, &assets, &people, &mut rng)
            .unwrap();
        (people, assets, events)
    }

    #[test]
    fn test_generates_exact_count() {
        let (_, _, events) = setup(1_000, 1);
        assert_eq!(events.len(), 1_000);
    }

    #[test]
    fn test_success_requires_clearance() {
        let (people, assets, events) = setup(2_000, 2);

        for event in events.iter().filter(|e| e.result == AccessResult::Success) {
            let person = people.iter().find(|p| p.id == event.person_id).unwrap();
            let asset = assets.iter().find(|a| a.id == event.asset_id).unwrap();
            assert!(
                person.security_clearance.clears(asset.classification),
                "successful event {} by under-cleared {}",
                event.id,
                person.id
            );
        }
    }

    #[test]
    fn test_successful_mutations_require_elevation_or_ownership() {
        let (people, assets, events) = setup(3_000, 3);

        for event in events
            .iter()
            .filter(|e| e.action.is_mutation() && e.result == AccessResult::Success)
        {
            let person = people.iter().find(|p| p.id == event.person_id).unwrap();
            let asset = assets.iter().find(|a| a.id == event.asset_id).unwrap();
            assert!(
                person.role_tier.is_elevated() || person.id == asset.creator_id,
                "staff {} mutated {} they did not create",
                person.id,
                asset.id
            );
        }
    }

    #[test]
    fn test_mutate_gate_reason() {
        let (people, assets, events) = setup(3_000, 4);

        // Denied mutate attempts by eligible staff carry the explicit gate
        // reason rather than a random roll reason
        for event in events.iter().filter(|e| {
            e.action.is_mutation() && e.reason == Some(DenialReason::InsufficientPermissions)
        }) {
            let person = people.iter().find(|p| p.id == event.person_id).unwrap();
            let asset = assets.iter().find(|a| a.id == event.asset_id).unwrap();
            assert_eq!(person.role_tier, RoleTier::Staff);
            assert_ne!(person.id, asset.creator_id);
            assert!(person.security_clearance.clears(asset.classification));
        }
    }

    #[test]
    fn test_denied_events_have_reason_and_zero_duration() {
        let (_, _, events) = setup(1_000, 5);

        for event in &events {
            match event.result {
                AccessResult::Success => {
                    assert!(event.reason.is_none());
                    assert!(event.duration_seconds >= 1);
                }
                AccessResult::AccessDenied => {
                    assert!(event.reason.is_some());
                    assert_eq!(event.duration_seconds, 0);
                }
            }
        }
    }

    #[test]
    fn test_bytes_only_on_successful_downloads() {
        let (_, assets, events) = setup(2_000, 6);

        for event in &events {
            if event.action == AccessAction::Download && event.result == AccessResult::Success {
                let asset = assets.iter().find(|a| a.id == event.asset_id).unwrap();
                assert!(event.bytes_transferred >= 1_024);
                assert!(event.bytes_transferred <= asset.file_size_bytes.max(1_024));
            } else {
                assert_eq!(event.bytes_transferred, 0);
            }
        }
    }

    #[test]
    fn test_stream_is_not_bounded_by_permission_table() {
        // The event stream samples people independently of grants: given
        // enough events, some successful ones reference person/document pairs
        // with no grant row. This asymmetry is intentional; assert the
        // clearance invariant is the only gate by checking events reference
        // arbitrary pairs rather than a granted subset.
        let (people, assets, events) = setup(5_000, 7);

        let distinct_pairs: std::collections::HashSet<_> =
            events.iter().map(|e| (e.person_id, e.asset_id)).collect();

        // With 200 people and 300 documents, 5000 independent samples cover
        // far more pairs than any plausible grant table subset
        assert!(distinct_pairs.len() > 3_000);
        assert!(!people.is_empty() && !assets.is_empty());
    }

    #[test]
    fn test_empty_dependencies_fail() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(8);
        let generator = AccessEventGenerator::new(now);

        assert!(matches!(
            generator.generate(10, &[], &[], &mut rng),
            Err(GeneratorError::Configuration(_))
        ));
    }
}
