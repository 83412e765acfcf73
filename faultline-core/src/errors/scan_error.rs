//! File enumeration errors.

use std::path::PathBuf;

use super::error_code::{self, FaultlineErrorCode};

/// Errors that can occur while enumerating source files.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("IO error scanning {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Source root does not exist: {path}")]
    MissingRoot { path: PathBuf },

    #[error("Scan cancelled")]
    Cancelled,
}

impl FaultlineErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Cancelled => error_code::CANCELLED,
            _ => error_code::SCAN_ERROR,
        }
    }
}
