//! Pipeline errors and non-fatal error collection.

use super::error_code::{self, FaultlineErrorCode};
use super::{ConfigError, ExtractError, ScanError};

/// Errors that can occur during an analysis run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Analysis cancelled")]
    Cancelled,
}

impl FaultlineErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Scan(e) => e.error_code(),
            Self::Extract(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::InvalidInput(_) => error_code::INVALID_INPUT,
            Self::Cancelled => error_code::CANCELLED,
        }
    }
}

/// Result of an analysis run that accumulates non-fatal errors.
/// Allows a lower-fidelity graph to be returned even when some files
/// could not be read.
#[derive(Debug, Default)]
pub struct PipelineOutcome<T: Default = ()> {
    /// The successful result data.
    pub data: T,
    /// Non-fatal errors collected during the run.
    pub errors: Vec<PipelineError>,
}

impl<T: Default> PipelineOutcome<T> {
    /// Create a new outcome wrapping `data` with no errors.
    pub fn new(data: T) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    /// Add a non-fatal error to the outcome.
    pub fn add_error(&mut self, error: PipelineError) {
        self.errors.push(error);
    }

    /// Returns true if there are no non-fatal errors.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of non-fatal errors.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
