//! Access permissions
//!
//! Permissions are derived from the document and person sequences rather
//! than sampled independently: every document yields a creator grant, a set
//! of rolled unit-member grants, and occasionally time-bounded cross-unit
//! grants, all gated by the clearance ordinal.

pub mod generator;
pub mod permission;

pub use generator::PermissionGenerator;
pub use permission::{Granter, GrantType, Permission};
