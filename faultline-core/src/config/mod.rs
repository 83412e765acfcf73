//! Layered configuration for Faultline.

pub mod faultline_config;
pub mod resolution_config;
pub mod scan_config;
pub mod scoring_config;

pub use faultline_config::{ConfigOverrides, FaultlineConfig};
pub use resolution_config::{ResolutionConfig, UnresolvedPolicy};
pub use scan_config::ScanConfig;
pub use scoring_config::ScoringConfig;
