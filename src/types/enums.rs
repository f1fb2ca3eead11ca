//! Shared enumeration types for the dataset generator
//!
//! The security clearance scale and role tiers are referenced by every
//! pipeline stage; entity-specific enums live next to their records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Security classification scale shared by units, people, and documents.
///
/// Variants are declared in ascending order so the derived `Ord` is the
/// ordinal comparison used by every stage. Comparisons must go through the
/// ordinal, never through the serialized string forms.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClearanceLevel {
    /// Openly shareable material
    Public,
    /// Internal-only material
    Internal,
    /// Restricted to cleared staff
    Confidential,
    /// Restricted to high clearance
    Secret,
    /// Highest classification
    TopSecret,
}

impl ClearanceLevel {
    /// All levels in ascending order.
    pub const ALL: [ClearanceLevel; 5] = [
        ClearanceLevel::Public,
        ClearanceLevel::Internal,
        ClearanceLevel::Confidential,
        ClearanceLevel::Secret,
        ClearanceLevel::TopSecret,
    ];

    /// Whether a holder of this clearance may access material at
    /// `classification`. This is the single eligibility rule shared by the
    /// person, permission, and access-event stages.
    pub fn clears(self, classification: ClearanceLevel) -> bool {
        self >= classification
    }

    /// The next level down the scale, saturating at `Public`.
    pub fn one_below(self) -> ClearanceLevel {
        match self {
            ClearanceLevel::Public | ClearanceLevel::Internal => ClearanceLevel::Public,
            ClearanceLevel::Confidential => ClearanceLevel::Internal,
            ClearanceLevel::Secret => ClearanceLevel::Confidential,
            ClearanceLevel::TopSecret => ClearanceLevel::Secret,
        }
    }
}

impl fmt::Display for ClearanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClearanceLevel::Public => write!(f, "PUBLIC"),
            ClearanceLevel::Internal => write!(f, "INTERNAL"),
            ClearanceLevel::Confidential => write!(f, "CONFIDENTIAL"),
            ClearanceLevel::Secret => write!(f, "SECRET"),
            ClearanceLevel::TopSecret => write!(f, "TOP_SECRET"),
        }
    }
}

impl FromStr for ClearanceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PUBLIC" => Ok(ClearanceLevel::Public),
            "INTERNAL" => Ok(ClearanceLevel::Internal),
            "CONFIDENTIAL" => Ok(ClearanceLevel::Confidential),
            "SECRET" => Ok(ClearanceLevel::Secret),
            "TOP_SECRET" | "TOPSECRET" => Ok(ClearanceLevel::TopSecret),
            _ => Err(format!("Unknown clearance level: {}", s)),
        }
    }
}

/// A person's standing derived from generation order, distinct from their
/// clearance. Leads and seniors pass the elevated-role gate used for grant
/// escalation and mutate-action access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleTier {
    /// Unit lead; recorded as the unit's manager
    Lead,
    /// Senior staff
    Senior,
    /// Regular staff
    Staff,
}

impl RoleTier {
    /// Whether this tier passes the elevated-role gate (leads and seniors).
    pub fn is_elevated(self) -> bool {
        matches!(self, RoleTier::Lead | RoleTier::Senior)
    }
}

impl fmt::Display for RoleTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleTier::Lead => write!(f, "LEAD"),
            RoleTier::Senior => write!(f, "SENIOR"),
            RoleTier::Staff => write!(f, "STAFF"),
        }
    }
}

impl FromStr for RoleTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LEAD" => Ok(RoleTier::Lead),
            "SENIOR" => Ok(RoleTier::Senior),
            "STAFF" => Ok(RoleTier::Staff),
            _ => Err(format!("Unknown role tier: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clearance_ordering() {
        assert!(ClearanceLevel::Public < ClearanceLevel::Internal);
        assert!(ClearanceLevel::Internal < ClearanceLevel::Confidential);
        assert!(ClearanceLevel::Confidential < ClearanceLevel::Secret);
        assert!(ClearanceLevel::Secret < ClearanceLevel::TopSecret);
    }

    #[test]
    fn test_clears_is_ordinal() {
        assert!(ClearanceLevel::TopSecret.clears(ClearanceLevel::Public));
        assert!(ClearanceLevel::Secret.clears(ClearanceLevel::Secret));
        assert!(!ClearanceLevel::Internal.clears(ClearanceLevel::Confidential));
        assert!(!ClearanceLevel::Public.clears(ClearanceLevel::TopSecret));
    }

    #[test]
    fn test_one_below_floors_at_public() {
        assert_eq!(ClearanceLevel::TopSecret.one_below(), ClearanceLevel::Secret);
        assert_eq!(ClearanceLevel::Confidential.one_below(), ClearanceLevel::Internal);
        assert_eq!(ClearanceLevel::Internal.one_below(), ClearanceLevel::Public);
        assert_eq!(ClearanceLevel::Public.one_below(), ClearanceLevel::Public);
    }

    #[test]
    fn test_clearance_display_and_from_str() {
        assert_eq!(format!("{}", ClearanceLevel::TopSecret), "TOP_SECRET");
        assert_eq!("TOP_SECRET".parse::<ClearanceLevel>().unwrap(), ClearanceLevel::TopSecret);
        assert_eq!("confidential".parse::<ClearanceLevel>().unwrap(), ClearanceLevel::Confidential);
        assert!("invalid".parse::<ClearanceLevel>().is_err());
    }

    #[test]
    fn test_clearance_serialization_wire_format() {
        let json = serde_json::to_string(&ClearanceLevel::TopSecret).unwrap();
        assert_eq!(json, "\"TOP_SECRET\"");
        let back: ClearanceLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ClearanceLevel::TopSecret);

        let json = serde_json::to_string(&ClearanceLevel::Public).unwrap();
        assert_eq!(json, "\"PUBLIC\"");
    }

    #[test]
    fn test_role_tier_elevation() {
        assert!(RoleTier::Lead.is_elevated());
        assert!(RoleTier::Senior.is_elevated());
        assert!(!RoleTier::Staff.is_elevated());
    }

    #[test]
    fn test_role_tier_round_trip() {
        for tier in [RoleTier::Lead, RoleTier::Senior, RoleTier::Staff] {
            let parsed: RoleTier = format!("{}", tier).parse().unwrap();
            assert_eq!(parsed, tier);
        }
    }
}
