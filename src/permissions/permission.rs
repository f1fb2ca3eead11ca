//! Permission record and grant types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::types::{AssetId, PersonId};

/// Strength of an access grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GrantType {
    /// Read access only
    ReadOnly,
    /// Read and write access
    ReadWrite,
    /// Full control including sharing and deletion
    FullAccess,
}

impl fmt::Display for GrantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrantType::ReadOnly => write!(f, "READ_ONLY"),
            GrantType::ReadWrite => write!(f, "READ_WRITE"),
            GrantType::FullAccess => write!(f, "FULL_ACCESS"),
        }
    }
}

/// Who issued a grant: the system (for automatic creator grants) or a
/// person. Serialized as `"SYSTEM"` or the person's identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granter {
    /// Automatic grant issued at document creation
    System,
    /// Grant issued by a person
    Person(PersonId),
}

impl fmt::Display for Granter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granter::System => write!(f, "SYSTEM"),
            Granter::Person(id) => write!(f, "{}", id),
        }
    }
}

impl Serialize for Granter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Granter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s == "SYSTEM" {
            return Ok(Granter::System);
        }
        let digits = s.strip_prefix("EMP_").ok_or_else(|| {
            serde::de::Error::custom(format!("expected SYSTEM or a person identifier: {}", s))
        })?;
        let sequence: u32 = digits.parse().map_err(serde::de::Error::custom)?;
        Ok(Granter::Person(PersonId::new(sequence)))
    }
}

/// An access grant on a document.
///
/// Invariant: the grantee's clearance is never below the document's
/// classification; the generator only emits grants that pass the ordinal
/// comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Permission {
    /// The document being granted
    #[serde(rename = "document_id")]
    pub asset_id: AssetId,
    /// The person receiving the grant
    #[serde(rename = "employee_id")]
    pub person_id: PersonId,
    /// Grant strength
    #[serde(rename = "permission_type")]
    pub grant_type: GrantType,
    /// Issuer of the grant
    pub granted_by: Granter,
    /// When the grant was issued
    pub granted_at: DateTime<Utc>,
    /// Optional expiry; cross-unit grants always carry one
    pub expires_at: Option<DateTime<Utc>>,
}
