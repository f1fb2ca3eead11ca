//! Pipeline orchestration and collaborator boundaries
//!
//! The driver runs the generators in strict dependency order, applies the
//! manager backfill, and hands the finished sequences to the file writer and
//! the batch planner. A failure at any stage aborts the whole run; there is
//! no partial-success mode.

pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod output;

pub use error::{GeneratorError, GeneratorResult};
pub use logging::LoggingConfig;
pub use orchestrator::{DatasetPipeline, EnterpriseDataset, PipelineSummary};
pub use output::{plan_batches, DatasetWriter, LoadMode, RecordBatch};
