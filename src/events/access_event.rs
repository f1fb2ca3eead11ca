//! Access event record and its enums

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::types::{AssetId, EventId, PersonId};

/// Action attempted on a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessAction {
    /// Open the document
    View,
    /// Download a copy
    Download,
    /// Modify the document
    Edit,
    /// Delete the document
    Delete,
    /// Share with others
    Share,
    /// Print a hard copy
    Print,
    /// Copy content
    Copy,
}

impl AccessAction {
    /// All actions.
    pub const ALL: [AccessAction; 7] = [
        AccessAction::View,
        AccessAction::Download,
        AccessAction::Edit,
        AccessAction::Delete,
        AccessAction::Share,
        AccessAction::Print,
        AccessAction::Copy,
    ];

    /// Whether this action mutates the document. Mutate actions require the
    /// actor to be the creator or hold an elevated role tier.
    pub fn is_mutation(self) -> bool {
        matches!(self, AccessAction::Edit | AccessAction::Delete)
    }
}

impl fmt::Display for AccessAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessAction::View => write!(f, "VIEW"),
            AccessAction::Download => write!(f, "DOWNLOAD"),
            AccessAction::Edit => write!(f, "EDIT"),
            AccessAction::Delete => write!(f, "DELETE"),
            AccessAction::Share => write!(f, "SHARE"),
            AccessAction::Print => write!(f, "PRINT"),
            AccessAction::Copy => write!(f, "COPY"),
        }
    }
}

/// Outcome of an access attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessResult {
    /// Access was granted
    Success,
    /// Access was denied
    AccessDenied,
}

impl fmt::Display for AccessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessResult::Success => write!(f, "SUCCESS"),
            AccessResult::AccessDenied => write!(f, "ACCESS_DENIED"),
        }
    }
}

/// Reason attached to a denied attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DenialReason {
    /// Clearance below the document classification
    InsufficientClearance,
    /// Document could not be resolved
    DocumentNotFound,
    /// A previously held grant has expired
    PermissionExpired,
    /// The account is locked
    AccountLocked,
    /// Attempt outside business hours
    OutsideBusinessHours,
    /// Mutate action without elevated role or ownership
    InsufficientPermissions,
}

impl DenialReason {
    /// Reasons drawn at random when the success roll fails. The mutate-gate
    /// reason `InsufficientPermissions` is only ever assigned explicitly.
    pub const ROLL_FAILURE_REASONS: [DenialReason; 5] = [
        DenialReason::InsufficientClearance,
        DenialReason::DocumentNotFound,
        DenialReason::PermissionExpired,
        DenialReason::AccountLocked,
        DenialReason::OutsideBusinessHours,
    ];
}

/// Where the attempt originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessLocation {
    /// From the office network
    Office,
    /// From a home network
    Home,
    /// From a mobile connection
    Mobile,
    /// From an external network
    External,
}

impl AccessLocation {
    /// All locations.
    pub const ALL: [AccessLocation; 4] = [
        AccessLocation::Office,
        AccessLocation::Home,
        AccessLocation::Mobile,
        AccessLocation::External,
    ];
}

/// An access attempt against a document.
///
/// Invariant: a `SUCCESS` result implies the actor's clearance passes the
/// document classification. The converse does not hold — the stream is not
/// reconciled with the permission table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessEvent {
    /// Event identifier
    pub id: EventId,
    /// Target document
    #[serde(rename = "document_id")]
    pub asset_id: AssetId,
    /// Acting person
    #[serde(rename = "employee_id")]
    pub person_id: PersonId,
    /// Attempted action
    pub action: AccessAction,
    /// Outcome
    pub result: AccessResult,
    /// Denial reason, absent on success
    pub reason: Option<DenialReason>,
    /// Source address
    pub ip_address: String,
    /// Client identification string
    pub user_agent: String,
    /// Session identifier
    pub session_id: Uuid,
    /// Session duration; zero for denied attempts
    pub duration_seconds: u32,
    /// Bytes transferred; non-zero only for successful downloads
    pub bytes_transferred: u64,
    /// Origin of the attempt
    pub location: AccessLocation,
    /// When the attempt occurred
    pub timestamp: DateTime<Utc>,
}
