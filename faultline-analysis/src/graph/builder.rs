//! Graph assembly from declared services, normalized edges, and
//! project-level detected databases.

use tracing::debug;

use crate::normalize::canonical_db_node;
use crate::pipeline::DetectedDatabase;

use super::types::{DependencyGraph, Edge, EdgeKind, NodeKind};

/// Build the immutable dependency graph.
///
/// Node order is deterministic: declared services in input order, then
/// database/external nodes in first-edge-discovery order, then any
/// project-declared databases not already referenced by an edge.
/// Project-declared databases merge with edge-inferred ones by
/// canonical name.
pub fn build_graph(
    services: &[String],
    edges: Vec<Edge>,
    detected_databases: &[DetectedDatabase],
) -> DependencyGraph {
    let mut graph = DependencyGraph::new();

    for service in services {
        graph.ensure_node(service, NodeKind::Service);
    }

    for edge in edges {
        let from_idx = graph.ensure_node(&edge.from, NodeKind::Service);
        let to_kind = target_kind(&graph, &edge);
        let to_idx = graph.ensure_node(&edge.to, to_kind);
        graph.graph.add_edge(from_idx, to_idx, edge.kind);
        graph.edge_list.push(edge);
    }

    for db in detected_databases {
        if !db.detected {
            continue;
        }
        match canonical_db_node(&db.db_type) {
            Some(node_id) => {
                graph.ensure_node(node_id, NodeKind::Database);
            }
            None => {
                debug!(db_type = %db.db_type, "no canonical node for detected database");
            }
        }
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "dependency graph built"
    );

    graph
}

/// Kind for a not-yet-seen edge target. Database and cache edges point
/// at database nodes; anything else that survived normalization without
/// naming a known service is an external placeholder.
fn target_kind(graph: &DependencyGraph, edge: &Edge) -> NodeKind {
    if let Some(node) = graph.node(&edge.to) {
        return node.kind;
    }
    match edge.kind {
        EdgeKind::Database | EdgeKind::Cache | EdgeKind::Queue => NodeKind::Database,
        EdgeKind::Api | EdgeKind::Internal => NodeKind::External,
    }
}

/// Convenience accessors over the built graph, grouped by node kind.
impl DependencyGraph {
    /// Declared and inferred service ids, in insertion order.
    pub fn service_ids(&self) -> Vec<&str> {
        self.nodes_of_kind(NodeKind::Service)
    }

    /// Database/cache node ids, in insertion order.
    pub fn database_ids(&self) -> Vec<&str> {
        self.nodes_of_kind(NodeKind::Database)
    }

    /// External placeholder node ids, in insertion order.
    pub fn external_ids(&self) -> Vec<&str> {
        self.nodes_of_kind(NodeKind::External)
    }

    fn nodes_of_kind(&self, kind: NodeKind) -> Vec<&str> {
        self.nodes()
            .filter(|n| n.kind == kind)
            .map(|n| n.id.as_str())
            .collect()
    }
}
