//! Enterprise Dataset Generator
//!
//! A synthetic-dataset pipeline that manufactures a large, internally
//! consistent enterprise security dataset: organizational units, employees,
//! classified documents, derived access permissions, access events, and
//! security incidents.
//!
//! # Overview
//!
//! The generated dataset models an enterprise with a five-level security
//! classification scale. Every cross-entity reference resolves, and every
//! permission grant and successful access event respects the clearance
//! ordering: a person never holds a grant on, or successfully reads, a
//! document classified above their own clearance.
//!
//! ## Key Features
//!
//! - **Dependency-ordered pipeline**: units, then people, then documents,
//!   then derived permissions, access events, and incidents
//! - **Clearance consistency**: ordinal clearance comparisons gate every
//!   probabilistic grant and access decision
//! - **Deterministic runs**: a single seeded RNG is threaded through every
//!   stage, so a fixed seed reproduces the dataset byte for byte
//! - **Typed records**: every entity is a fixed-shape struct whose serialized
//!   field names are a wire contract for downstream loaders
//! - **Batch hand-off**: entity sequences chunk into fixed-size batches for
//!   an external transport collaborator
//!
//! ## Quick Start
//!
//! ```rust
//! use enterprise_dataset_generator::pipeline::DatasetPipeline;
//! use enterprise_dataset_generator::types::GeneratorConfig;
//!
//! let config = GeneratorConfig {
//!     unit_count: 25,
//!     person_count: 100,
//!     asset_count: 100,
//!     access_event_count: 200,
//!     incident_count: 20,
//!     seed: Some(7),
//!     ..Default::default()
//! };
//!
//! let dataset = DatasetPipeline::new(config)?.run()?;
//! assert_eq!(dataset.units.len(), 25);
//! # Ok::<(), enterprise_dataset_generator::pipeline::GeneratorError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: clearance scale, identifiers, configuration, catalogs
//! - [`org`]: organizational units and their generator
//! - [`people`]: employees, role tiers, and the manager backfill mapping
//! - [`assets`]: classified documents and their generator
//! - [`permissions`]: access grants derived from documents and people
//! - [`events`]: access-event stream generation
//! - [`incidents`]: security incidents with typed payloads
//! - [`pipeline`]: orchestration, errors, output artifacts, logging
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod org;
pub mod people;
pub mod assets;
pub mod permissions;
pub mod events;
pub mod incidents;
pub mod pipeline;

pub mod types;

// Core types and identifiers
pub use types::{
    AssetId,
    ClearanceLevel,
    EventId,
    GeneratorConfig,
    IncidentId,
    PersonId,
    RoleTier,
    UnitId,
};

// Entity records and generators
pub use org::{OrgUnit, OrgUnitGenerator};
pub use people::{ManagerAssignments, Person, PersonGenerator};
pub use assets::{Asset, AssetCategory, AssetGenerator};
pub use permissions::{Granter, GrantType, Permission, PermissionGenerator};
pub use events::{AccessAction, AccessEvent, AccessEventGenerator, AccessResult};
pub use incidents::{IncidentGenerator, IncidentType, SecurityIncident};

// Pipeline types
pub use pipeline::{
    DatasetPipeline, DatasetWriter, EnterpriseDataset, GeneratorError, GeneratorResult,
    LoggingConfig, PipelineSummary, RecordBatch,
};
