//! Sequential identifier types for generated entities
//!
//! Every entity carries a prefixed, zero-padded sequential identifier
//! (`DEPT_001`, `EMP_0001`, ...). The formatted string is the wire form;
//! downstream loaders key off it, so the prefixes and padding widths are a
//! contract and must not change.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

macro_rules! sequential_id {
    ($(#[$doc:meta])* $name:ident, $prefix:literal, $width:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u32);

        impl $name {
            /// Create an identifier from a 1-based sequence number.
            pub fn new(sequence: u32) -> Self {
                Self(sequence)
            }

            /// The 1-based sequence number behind this identifier.
            pub fn sequence(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{:0width$}"), self.0, width = $width)
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&self.to_string())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                let digits = s.strip_prefix($prefix).ok_or_else(|| {
                    serde::de::Error::custom(format!(
                        "expected {} prefix in identifier: {}",
                        $prefix, s
                    ))
                })?;
                let sequence: u32 =
                    digits.parse().map_err(serde::de::Error::custom)?;
                Ok(Self(sequence))
            }
        }
    };
}

sequential_id!(
    /// Identifier of an organizational unit (`DEPT_001`)
    UnitId, "DEPT_", 3
);

sequential_id!(
    /// Identifier of a person (`EMP_0001`)
    PersonId, "EMP_", 4
);

sequential_id!(
    /// Identifier of a classified document (`DOC_000001`)
    AssetId, "DOC_", 6
);

sequential_id!(
    /// Identifier of an access event (`LOG_0000001`)
    EventId, "LOG_", 7
);

sequential_id!(
    /// Identifier of a security incident (`SEC_000001`)
    IncidentId, "SEC_", 6
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats() {
        assert_eq!(format!("{}", UnitId::new(1)), "DEPT_001");
        assert_eq!(format!("{}", UnitId::new(25)), "DEPT_025");
        assert_eq!(format!("{}", PersonId::new(7)), "EMP_0007");
        assert_eq!(format!("{}", AssetId::new(150_000)), "DOC_150000");
        assert_eq!(format!("{}", EventId::new(1)), "LOG_0000001");
        assert_eq!(format!("{}", IncidentId::new(42)), "SEC_000042");
    }

    #[test]
    fn test_serialization_round_trip() {
        let id = PersonId::new(123);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"EMP_0123\"");

        let back: PersonId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert_eq!(back.sequence(), 123);
    }

    #[test]
    fn test_deserialization_rejects_wrong_prefix() {
        let result: Result<UnitId, _> = serde_json::from_str("\"EMP_0001\"");
        assert!(result.is_err());

        let result: Result<UnitId, _> = serde_json::from_str("\"DEPT_abc\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_ordering_follows_sequence() {
        assert!(AssetId::new(1) < AssetId::new(2));
        assert!(EventId::new(99) < EventId::new(100));
    }

    #[test]
    fn test_hash_and_equality() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(PersonId::new(1));
        set.insert(PersonId::new(2));
        set.insert(PersonId::new(1)); // Duplicate

        assert_eq!(set.len(), 2);
        assert!(set.contains(&PersonId::new(1)));
        assert!(!set.contains(&PersonId::new(3)));
    }
}
