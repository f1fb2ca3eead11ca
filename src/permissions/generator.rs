//! Permission derivation
//!
//! A pure function of the document and person sequences: no randomness
//! beyond the grant rolls and escalation choices described on the record
//! type.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use tracing::debug;

use crate::assets::Asset;
use crate::people::Person;
use crate::permissions::{Granter, GrantType, Permission};
use crate::pipeline::{GeneratorError, GeneratorResult};
use crate::types::PersonId;

/// Probability that an eligible unit member receives a grant.
const UNIT_GRANT_PROBABILITY: f64 = 0.8;

/// Probability that a unit-member grant is open-ended (no expiry).
const OPEN_ENDED_PROBABILITY: f64 = 0.7;

/// Share of documents that receive cross-unit grants.
const CROSS_UNIT_ASSET_RATIO: f64 = 0.3;

/// Upper bound on cross-unit grants per document (further capped by the
/// eligible pool size).
const MAX_CROSS_UNIT_GRANTS: usize = 5;

/// Generator deriving access grants from documents and people.
#[derive(Debug)]
pub struct PermissionGenerator {
    reference_time: DateTime<Utc>,
}

impl PermissionGenerator {
    /// Create a generator anchored at the given reference time.
    pub fn new(reference_time: DateTime<Utc>) -> Self {
        Self { reference_time }
    }

    /// Derive the full grant set for `assets` against `people`.
    ///
    /// Per document: one automatic creator grant, rolled grants for
    /// clearance-eligible unit members, and for a sampled subset of
    /// documents a bounded number of time-limited cross-unit grants. The
    /// escalation rule (creator and elevated tiers receive stronger grant
    /// types) applies in every branch.
    pub fn generate(
        &self,
        assets: &[Asset],
        people: &[Person],
        rng: &mut StdRng,
    ) -> GeneratorResult<Vec<Permission>> {
        let by_id: HashMap<PersonId, &Person> = people.iter().map(|p| (p.id, p)).collect();

        let mut permissions = Vec::new();

        for asset in assets {
            let creator = by_id.get(&asset.creator_id).ok_or_else(|| {
                GeneratorError::consistency(format!(
                    "document {} references unknown creator {}",
                    asset.id, asset.creator_id
                ))
            })?;

            // Automatic creator grant, issued by the system at creation time
            permissions.push(Permission {
                asset_id: asset.id,
                person_id: creator.id,
                grant_type: GrantType::FullAccess,
                granted_by: Granter::System,
                granted_at: asset.created_at,
                expires_at: None,
            });

            // Unit members with sufficient clearance pass an 80% roll
            for member in people
                .iter()
                .filter(|p| p.unit_id == asset.owner_unit_id)
                .filter(|p| p.security_clearance.clears(asset.classification))
            {
                if rng.gen::<f64>() < UNIT_GRANT_PROBABILITY {
                    let expires_at = if rng.gen::<f64>() < OPEN_ENDED_PROBABILITY {
                        None
                    } else {
                        Some(self.reference_time + Duration::days(rng.gen_range(30..=365)))
                    };

                    permissions.push(Permission {
                        asset_id: asset.id,
                        person_id: member.id,
                        grant_type: self.grant_type_for(member, asset.creator_id, rng),
                        granted_by: Granter::Person(asset.creator_id),
                        granted_at: asset.created_at + Duration::days(rng.gen_range(0..=30)),
                        expires_at,
                    });
                }
            }

            // A sampled subset of documents also grants a few eligible
            // people outside the owning unit, always time-bounded
            if rng.gen::<f64>() < CROSS_UNIT_ASSET_RATIO {
                let eligible: Vec<&Person> = people
                    .iter()
                    .filter(|p| p.unit_id != asset.owner_unit_id)
                    .filter(|p| p.security_clearance.clears(asset.classification))
                    .collect();

                if !eligible.is_empty() {
                    let grant_count =
                        rng.gen_range(1..=MAX_CROSS_UNIT_GRANTS.min(eligible.len()));

                    for member in eligible.choose_multiple(rng, grant_count) {
                        permissions.push(Permission {
                            asset_id: asset.id,
                            person_id: member.id,
                            grant_type: self.grant_type_for(member, asset.creator_id, rng),
                            granted_by: Granter::Person(asset.creator_id),
                            granted_at: asset.created_at
                                + Duration::days(rng.gen_range(0..=60)),
                            expires_at: Some(
                                self.reference_time + Duration::days(rng.gen_range(30..=180)),
                            ),
                        });
                    }
                }
            }
        }

        debug!(grants = permissions.len(), documents = assets.len(), "derived permissions");
        Ok(permissions)
    }

    /// Grant strength for one grantee: creators always get full access,
    /// elevated tiers escalate to read-write or full access, everyone else
    /// gets read-only. Applied identically in every branch.
    fn grant_type_for(&self, person: &Person, creator_id: PersonId, rng: &mut StdRng) -> GrantType {
        if person.id == creator_id {
            GrantType::FullAccess
        } else if person.role_tier.is_elevated() {
            if rng.gen::<f64>() < 0.5 {
                GrantType::ReadWrite
            } else {
                GrantType::FullAccess
            }
        } else {
            GrantType::ReadOnly
        }
    }
}
