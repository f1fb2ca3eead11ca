//! Organizational unit record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ClearanceLevel, PersonId, UnitId};

/// An organizational unit of the simulated enterprise.
///
/// Serialized field names are the wire contract for downstream loaders; the
/// Rust-side names differ where the contract predates this implementation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgUnit {
    /// Unit identifier
    pub id: UnitId,
    /// Unit name, unique within a run, drawn from the fixed catalog
    pub name: String,
    /// Human-readable description derived from the name
    pub description: String,
    /// Security classification bounding member clearances
    #[serde(rename = "security_level")]
    pub classification: ClearanceLevel,
    /// Annual budget in whole currency units
    pub budget: u64,
    /// Descriptive headcount target. Not enforced: person generation assigns
    /// units uniformly at random and may diverge from this value.
    #[serde(rename = "employee_count")]
    pub headcount_target: u32,
    /// Office city
    pub location: String,
    /// The unit's lead, backfilled by the pipeline driver after person
    /// generation
    pub manager_id: Option<PersonId>,
    /// Optional parent in the unit hierarchy
    #[serde(rename = "parent_department")]
    pub parent_unit: Option<UnitId>,
    /// Accounting cost center code
    pub cost_center: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}
