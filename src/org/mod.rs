//! Organizational units
//!
//! The root of the dependency chain: units carry the security classification
//! that bounds every member's clearance, and are the ownership anchor for
//! generated documents.

pub mod generator;
pub mod unit;

pub use generator::OrgUnitGenerator;
pub use unit::OrgUnit;
