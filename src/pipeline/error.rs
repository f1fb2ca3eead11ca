//! Error types for the generation pipeline
//!
//! Generation errors are fatal: a failing stage aborts the whole run rather
//! than emitting incomplete sequences, because every later stage assumes
//! complete, valid inputs. I/O and serialization variants belong to the
//! persistence collaborator and are never produced by generation itself.

use thiserror::Error;

use crate::types::config::ConfigValidationError;

/// Errors that can occur during dataset generation
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Invalid configuration: catalog/count mismatch or a missing
    /// dependency pool
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A data-model invariant cannot be satisfied with the generated inputs
    #[error("Consistency violation: {0}")]
    ConsistencyViolation(String),

    /// I/O error while writing artifacts
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error while writing artifacts
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GeneratorError {
    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a consistency violation
    pub fn consistency(msg: impl Into<String>) -> Self {
        Self::ConsistencyViolation(msg.into())
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            GeneratorError::Configuration(_) => "Configuration",
            GeneratorError::ConsistencyViolation(_) => "Consistency",
            GeneratorError::Io(_) => "IO",
            GeneratorError::Serialization(_) => "Serialization",
        }
    }

    /// Whether the error originated in generation rather than persistence.
    /// Generation errors abort the run before any artifact is written.
    pub fn is_generation_error(&self) -> bool {
        matches!(
            self,
            GeneratorError::Configuration(_) | GeneratorError::ConsistencyViolation(_)
        )
    }
}

impl From<ConfigValidationError> for GeneratorError {
    fn from(err: ConfigValidationError) -> Self {
        GeneratorError::Configuration(err.to_string())
    }
}

/// Result type for pipeline operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;
