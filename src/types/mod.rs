//! Core types for the dataset generator
//!
//! This module contains the clearance scale and shared enums, sequential
//! identifier types, catalogs of fixed names, timestamp sampling helpers,
//! and the generator configuration.

pub mod catalog;
pub mod config;
pub mod enums;
pub mod identifiers;
pub mod sampling;

pub use config::{CliArgs, ConfigError, ConfigValidationError, GeneratorConfig};
pub use enums::{ClearanceLevel, RoleTier};
pub use identifiers::{AssetId, EventId, IncidentId, PersonId, UnitId};
