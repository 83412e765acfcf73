//! Pattern extraction errors.

use super::error_code::{self, FaultlineErrorCode};

/// Errors that can occur during pattern extraction.
///
/// Per-file failures (unreadable, binary, oversized) are not errors at
/// all; those files are skipped. Only rule compilation and cancellation
/// surface as `ExtractError`.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Invalid pattern rule {rule_id}: {message}")]
    InvalidRule { rule_id: String, message: String },

    #[error("Extraction cancelled")]
    Cancelled,
}

impl FaultlineErrorCode for ExtractError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Cancelled => error_code::CANCELLED,
            Self::InvalidRule { .. } => error_code::EXTRACT_ERROR,
        }
    }
}
