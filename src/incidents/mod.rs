//! Security incidents
//!
//! Incidents carry type-conditioned severities and typed, event-specific
//! payloads; assignees are drawn exclusively from the designated security
//! unit.

pub mod generator;
pub mod incident;

pub use generator::IncidentGenerator;
pub use incident::{
    DetectionMethod, IncidentPayload, IncidentSeverity, IncidentStatus, IncidentType,
    SecurityIncident,
};
