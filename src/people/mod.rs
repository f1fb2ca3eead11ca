//! People and role tiers
//!
//! Person generation derives each person's clearance from their unit's
//! classification and produces the `unit -> manager` mapping the driver
//! applies back onto the unit sequence.

pub mod generator;
pub mod person;

pub use generator::{ManagerAssignments, PersonGenerator};
pub use person::Person;
