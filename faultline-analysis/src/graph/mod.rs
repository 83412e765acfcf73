//! Dependency graph: nodes, kind-tagged edges, deterministic build.

pub mod builder;
pub mod types;

pub use builder::build_graph;
pub use types::{DependencyGraph, Edge, EdgeKind, Node, NodeKind};
