//! Nodes, edges, and the immutable dependency graph.

use faultline_core::types::collections::FxHashMap;
use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableGraph;
use petgraph::Directed;
use serde::{Deserialize, Serialize};

/// What a graph vertex represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Service,
    Database,
    External,
}

/// The dependency relationship an edge carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Api,
    Database,
    Cache,
    Queue,
    Internal,
}

impl EdgeKind {
    /// Stable wire name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Database => "database",
            Self::Cache => "cache",
            Self::Queue => "queue",
            Self::Internal => "internal",
        }
    }

    /// Short tag used as the diagram edge label. Internal edges carry
    /// no tag.
    pub fn diagram_label(&self) -> &'static str {
        match self {
            Self::Api => "API",
            Self::Database => "DB",
            Self::Cache => "CACHE",
            Self::Queue => "QUEUE",
            Self::Internal => "",
        }
    }
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A graph vertex. Identity is the id: two nodes with the same id are
/// the same node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub kind: NodeKind,
}

/// A directed, kind-tagged dependency edge.
///
/// Canonical identity is `(from, to, kind)`; duplicates on that key are
/// collapsed during normalization, keeping the first evidence seen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub kind: EdgeKind,
    pub evidence: Option<String>,
}

impl Edge {
    /// The dedup key `(from, to, kind)`.
    pub fn key(&self) -> (&str, &str, EdgeKind) {
        (&self.from, &self.to, self.kind)
    }
}

/// The immutable dependency graph. Built once per analysis run.
///
/// Node insertion order is discovery order: declared services first,
/// then database/external nodes as edges are processed. The diagram
/// serializer mirrors this ordering, so a fixed input always yields
/// byte-identical output.
pub struct DependencyGraph {
    /// The underlying petgraph StableGraph.
    pub graph: StableGraph<Node, EdgeKind, Directed>,
    /// Map from node id → NodeIndex for O(1) lookup.
    pub node_index: FxHashMap<String, NodeIndex>,
    /// Node indices in insertion order.
    pub order: Vec<NodeIndex>,
    /// Surviving normalized edges in discovery order.
    pub edge_list: Vec<Edge>,
}

impl DependencyGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: FxHashMap::default(),
            order: Vec::new(),
            edge_list: Vec::new(),
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_list.len()
    }

    /// Look up a node index by id.
    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index_of(id).map(|idx| &self.graph[idx])
    }

    /// Whether `id` names a service node.
    pub fn is_service(&self, id: &str) -> bool {
        self.node(id).is_some_and(|n| n.kind == NodeKind::Service)
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.order.iter().map(|&idx| &self.graph[idx])
    }

    /// Insert a node if absent, returning its index. Same-id nodes unify;
    /// the first kind seen wins.
    pub fn ensure_node(&mut self, id: &str, kind: NodeKind) -> NodeIndex {
        if let Some(&existing) = self.node_index.get(id) {
            return existing;
        }
        let idx = self.graph.add_node(Node {
            id: id.to_string(),
            kind,
        });
        self.node_index.insert(id.to_string(), idx);
        self.order.push(idx);
        idx
    }
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}
