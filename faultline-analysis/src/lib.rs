//! Faultline analysis engine.
//!
//! A heuristic, single-snapshot static analyzer for polyglot
//! multi-service codebases. Infers service-to-service, database, and
//! cache dependencies by pattern matching over raw source text, then
//! quantifies each node's blast radius, the set of services affected
//! if it fails.
//!
//! The pipeline is a strict five-stage sequence:
//! extraction → normalization → graph build → impact analysis → diagram.

pub mod diagram;
pub mod extract;
pub mod graph;
pub mod impact;
pub mod normalize;
pub mod pipeline;
pub mod walk;

pub use diagram::render_diagram;
pub use extract::{extract_all, extract_file, MentionCategory, RawMention, RuleSet};
pub use graph::{DependencyGraph, Edge, EdgeKind, Node, NodeKind};
pub use impact::{analyze_impact, ImpactReport, Recommendation};
pub use normalize::normalize_mentions;
pub use pipeline::{
    analyze_from_disk, analyze_project, AnalysisResult, DetectedDatabase, GraphSummary,
    ServiceSpec, SourceFile,
};
pub use walk::{enumerate_sources, IgnoreSet};
