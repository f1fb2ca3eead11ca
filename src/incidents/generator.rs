//! Security incident generation

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;

use crate::assets::Asset;
use crate::incidents::{
    DetectionMethod, IncidentPayload, IncidentStatus, IncidentType, SecurityIncident,
};
use crate::org::OrgUnit;
use crate::people::Person;
use crate::pipeline::{GeneratorError, GeneratorResult};
use crate::types::catalog;
use crate::types::sampling::{datetime_within_days_before, pick, random_ipv4};
use crate::types::IncidentId;

/// Probability that an incident names a target document.
const TARGET_ASSET_PROBABILITY: f64 = 0.6;

/// How far back incident creation timestamps reach, in days.
const CREATION_WINDOW_DAYS: i64 = 90;

/// How far back incident update timestamps reach, in days.
const UPDATE_WINDOW_DAYS: i64 = 30;

/// Generator for security incidents.
///
/// Assignees are restricted to the members of the designated security unit;
/// generation fails if that unit is absent or has no members.
#[derive(Debug)]
pub struct IncidentGenerator {
    reference_time: DateTime<Utc>,
}

impl IncidentGenerator {
    /// Create a generator anchored at the given reference time.
    pub fn new(reference_time: DateTime<Utc>) -> Self {
        Self { reference_time }
    }

    /// Generate exactly `count` incidents referencing the given units,
    /// people, and documents.
    pub fn generate(
        &self,
        count: usize,
        units: &[OrgUnit],
        people: &[Person],
        assets: &[Asset],
        rng: &mut StdRng,
    ) -> GeneratorResult<Vec<SecurityIncident>> {
        if assets.is_empty() {
            return Err(GeneratorError::configuration(
                "cannot generate incidents without any documents",
            ));
        }

        let security_unit = units
            .iter()
            .find(|u| u.name == catalog::SECURITY_UNIT_NAME)
            .ok_or_else(|| {
                GeneratorError::configuration(format!(
                    "no '{}' unit generated; incident assignment requires one",
                    catalog::SECURITY_UNIT_NAME
                ))
            })?;

        let responders: Vec<&Person> =
            people.iter().filter(|p| p.unit_id == security_unit.id).collect();
        if responders.is_empty() {
            return Err(GeneratorError::configuration(format!(
                "the '{}' unit has no members to assign incidents to",
                catalog::SECURITY_UNIT_NAME
            )));
        }

        let mut incidents = Vec::with_capacity(count);

        for index in 0..count {
            let incident_type = *pick(rng, &IncidentType::ALL);
            let severity = *pick(rng, incident_type.severity_pool());
            let person = pick(rng, people);

            let target_asset_id = if rng.gen::<f64>() < TARGET_ASSET_PROBABILITY {
                Some(pick(rng, assets).id)
            } else {
                None
            };

            let incident = SecurityIncident {
                id: IncidentId::new(index as u32 + 1),
                event_type: incident_type,
                severity,
                person_id: person.id,
                unit_id: person.unit_id,
                description: format!(
                    "{} detected for user {}",
                    incident_type.display_phrase(),
                    person.email
                ),
                source_ip: random_ipv4(rng),
                target_asset_id,
                status: *pick(rng, &IncidentStatus::ALL),
                assigned_to: pick(rng, &responders).id,
                detection_method: *pick(rng, &DetectionMethod::ALL),
                risk_score: rng.gen_range(1..=100),
                additional_data: self.payload_for(incident_type, rng),
                created_at: datetime_within_days_before(
                    rng,
                    self.reference_time,
                    CREATION_WINDOW_DAYS,
                ),
                updated_at: datetime_within_days_before(
                    rng,
                    self.reference_time,
                    UPDATE_WINDOW_DAYS,
                ),
            };

            incidents.push(incident);
        }

        debug!(incidents = incidents.len(), responders = responders.len(), "generated incidents");
        Ok(incidents)
    }

    /// Event-specific context; most types carry none.
    fn payload_for(&self, incident_type: IncidentType, rng: &mut StdRng) -> IncidentPayload {
        match incident_type {
            IncidentType::BulkDownload => IncidentPayload::BulkDownload {
                files_downloaded: rng.gen_range(10..=100),
                total_size_mb: rng.gen_range(100..=10_000),
            },
            IncidentType::MultipleLoginFailures => IncidentPayload::LoginFailures {
                failure_count: rng.gen_range(3..=15),
                time_window_minutes: rng.gen_range(5..=60),
            },
            IncidentType::UnusualAccessPattern => IncidentPayload::AccessPattern {
                access_count: rng.gen_range(50..=500),
                unusual_hours: rng.gen::<f64>() < 0.5,
            },
            _ => IncidentPayload::Empty {},
        }
    }
}
