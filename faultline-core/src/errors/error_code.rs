//! Stable error codes for the embedding boundary.

/// Trait for converting Faultline errors to structured error codes.
/// Every error enum implements this so embedders receive a stable
/// code string alongside the human-readable message.
pub trait FaultlineErrorCode {
    /// Returns the error code string (e.g., "SCAN_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const EXTRACT_ERROR: &str = "EXTRACT_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const CANCELLED: &str = "CANCELLED";
pub const PIPELINE_ERROR: &str = "PIPELINE_ERROR";
