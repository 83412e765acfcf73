//! Error handling for Faultline.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod extract_error;
pub mod pipeline_error;
pub mod scan_error;

pub use config_error::ConfigError;
pub use error_code::FaultlineErrorCode;
pub use extract_error::ExtractError;
pub use pipeline_error::{PipelineError, PipelineOutcome};
pub use scan_error::ScanError;
