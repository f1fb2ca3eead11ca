//! Security incident record and its enums

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{AssetId, IncidentId, PersonId, UnitId};

/// Kind of security incident. Severity is always drawn from the
/// type-conditioned subset, never uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncidentType {
    /// Attempt to access material without authorization
    UnauthorizedAccessAttempt,
    /// Repeated login failures
    MultipleLoginFailures,
    /// Privilege escalation
    PrivilegeEscalation,
    /// Attempted data exfiltration
    DataExfiltrationAttempt,
    /// Malware detection
    MalwareDetected,
    /// Phishing attempt
    PhishingAttempt,
    /// Unusual access pattern
    UnusualAccessPattern,
    /// Access outside business hours
    AfterHoursAccess,
    /// Bulk download
    BulkDownload,
    /// Unauthorized file share
    UnauthorizedFileShare,
    /// Weak password detected
    WeakPasswordDetected,
    /// Account compromise
    AccountCompromise,
}

impl IncidentType {
    /// All incident types.
    pub const ALL: [IncidentType; 12] = [
        IncidentType::UnauthorizedAccessAttempt,
        IncidentType::MultipleLoginFailures,
        IncidentType::PrivilegeEscalation,
        IncidentType::DataExfiltrationAttempt,
        IncidentType::MalwareDetected,
        IncidentType::PhishingAttempt,
        IncidentType::UnusualAccessPattern,
        IncidentType::AfterHoursAccess,
        IncidentType::BulkDownload,
        IncidentType::UnauthorizedFileShare,
        IncidentType::WeakPasswordDetected,
        IncidentType::AccountCompromise,
    ];

    /// The severity subset permitted for this incident type.
    pub fn severity_pool(self) -> &'static [IncidentSeverity] {
        match self {
            IncidentType::DataExfiltrationAttempt
            | IncidentType::AccountCompromise
            | IncidentType::PrivilegeEscalation => {
                &[IncidentSeverity::High, IncidentSeverity::Critical]
            }
            IncidentType::UnauthorizedAccessAttempt
            | IncidentType::MalwareDetected
            | IncidentType::PhishingAttempt => {
                &[IncidentSeverity::Medium, IncidentSeverity::High]
            }
            _ => &[IncidentSeverity::Low, IncidentSeverity::Medium],
        }
    }

    /// Human-readable phrase used in incident descriptions.
    pub fn display_phrase(self) -> &'static str {
        match self {
            IncidentType::UnauthorizedAccessAttempt => "Unauthorized Access Attempt",
            IncidentType::MultipleLoginFailures => "Multiple Login Failures",
            IncidentType::PrivilegeEscalation => "Privilege Escalation",
            IncidentType::DataExfiltrationAttempt => "Data Exfiltration Attempt",
            IncidentType::MalwareDetected => "Malware Detected",
            IncidentType::PhishingAttempt => "Phishing Attempt",
            IncidentType::UnusualAccessPattern => "Unusual Access Pattern",
            IncidentType::AfterHoursAccess => "After Hours Access",
            IncidentType::BulkDownload => "Bulk Download",
            IncidentType::UnauthorizedFileShare => "Unauthorized File Share",
            IncidentType::WeakPasswordDetected => "Weak Password Detected",
            IncidentType::AccountCompromise => "Account Compromise",
        }
    }
}

impl fmt::Display for IncidentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_phrase())
    }
}

/// Severity of an incident.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncidentSeverity {
    /// Informational
    Low,
    /// Needs attention
    Medium,
    /// Serious
    High,
    /// Requires immediate response
    Critical,
}

/// Investigation status of an incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncidentStatus {
    /// Newly raised
    Open,
    /// Being investigated
    Investigating,
    /// Resolved
    Resolved,
    /// Determined to be a false positive
    FalsePositive,
}

impl IncidentStatus {
    /// All statuses.
    pub const ALL: [IncidentStatus; 4] = [
        IncidentStatus::Open,
        IncidentStatus::Investigating,
        IncidentStatus::Resolved,
        IncidentStatus::FalsePositive,
    ];
}

/// How the incident was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DetectionMethod {
    /// Automated monitoring
    Automated,
    /// Manual review
    Manual,
    /// Reported by a user
    UserReport,
    /// Raised by an external party
    ExternalAlert,
}

impl DetectionMethod {
    /// All detection methods.
    pub const ALL: [DetectionMethod; 4] = [
        DetectionMethod::Automated,
        DetectionMethod::Manual,
        DetectionMethod::UserReport,
        DetectionMethod::ExternalAlert,
    ];
}

/// Event-specific structured payload.
///
/// Serialized untagged, so each variant appears as a plain object with its
/// own fields and incident types without extra context carry an empty
/// object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IncidentPayload {
    /// Context for bulk-download incidents
    BulkDownload {
        /// Number of files downloaded
        files_downloaded: u32,
        /// Total downloaded volume in megabytes
        total_size_mb: u32,
    },
    /// Context for repeated login failures
    LoginFailures {
        /// Number of failed attempts
        failure_count: u32,
        /// Window the failures fell into, in minutes
        time_window_minutes: u32,
    },
    /// Context for unusual access patterns
    AccessPattern {
        /// Number of accesses observed
        access_count: u32,
        /// Whether the accesses fell outside usual hours
        unusual_hours: bool,
    },
    /// No additional context
    Empty {},
}

/// A security incident.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityIncident {
    /// Incident identifier
    pub id: IncidentId,
    /// Incident type
    pub event_type: IncidentType,
    /// Severity drawn from the type-conditioned subset
    pub severity: IncidentSeverity,
    /// Person the incident concerns
    #[serde(rename = "employee_id")]
    pub person_id: PersonId,
    /// That person's unit
    #[serde(rename = "department_id")]
    pub unit_id: UnitId,
    /// Human-readable description
    pub description: String,
    /// Source address of the triggering activity
    pub source_ip: String,
    /// Target document, where one was involved
    #[serde(rename = "target_resource")]
    pub target_asset_id: Option<AssetId>,
    /// Investigation status
    pub status: IncidentStatus,
    /// Assignee, always a member of the security unit
    pub assigned_to: PersonId,
    /// How the incident was detected
    pub detection_method: DetectionMethod,
    /// Risk score in 1..=100
    pub risk_score: u8,
    /// Event-specific structured payload
    pub additional_data: IncidentPayload,
    /// When the incident was raised
    pub created_at: DateTime<Utc>,
    /// Last status update
    pub updated_at: DateTime<Utc>,
}
