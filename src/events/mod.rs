//! Access events
//!
//! The event stream samples documents and people independently of the
//! permission table: eligibility is recomputed from clearance ordinals, so
//! events model attempts (including unauthorized ones), not granted access.

pub mod access_event;
pub mod generator;

pub use access_event::{AccessAction, AccessEvent, AccessLocation, AccessResult, DenialReason};
pub use generator::AccessEventGenerator;
