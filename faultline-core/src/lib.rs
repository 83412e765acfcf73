//! Core types, traits, errors, config, and tracing for the Faultline
//! dependency analyzer.

pub mod cancel;
pub mod config;
pub mod errors;
pub mod logging;
pub mod types;

pub use cancel::{Cancellable, CancellationToken};
pub use config::FaultlineConfig;
pub use errors::{ConfigError, ExtractError, PipelineError, ScanError};
pub use logging::init_tracing;
