//! Blast radius, criticality scoring, and recommendations.

pub mod analyzer;
pub mod types;

pub use analyzer::analyze_impact;
pub use types::{ImpactReport, Recommendation};
