//! Deterministic Mermaid rendering of the dependency graph.
//!
//! Node and edge statement order mirrors the graph exactly, so
//! identical input always yields byte-identical diagram text.

use std::fmt::Write;

use crate::graph::{DependencyGraph, NodeKind};
use crate::normalize::engine_label;

/// Render the graph as a Mermaid flowchart.
///
/// Service nodes get the `service` style class; database/cache nodes
/// get the `database` class with an inferred engine annotation. Edges
/// carry a short kind tag (`API`, `DB`, `CACHE`, `QUEUE`); internal
/// edges are unlabeled.
pub fn render_diagram(graph: &DependencyGraph) -> String {
    let mut out = String::new();
    out.push_str("graph TB\n");
    out.push_str("    classDef service fill:#4a90d9,stroke:#2c5a8c,color:#fff\n");
    out.push_str("    classDef database fill:#e8a33d,stroke:#a8721f,color:#fff\n");
    out.push_str("    classDef external fill:#9b9b9b,stroke:#6b6b6b,color:#fff\n");

    for node in graph.nodes() {
        let id = mermaid_id(&node.id);
        match node.kind {
            NodeKind::Service => {
                let _ = writeln!(out, "    {id}[\"{}\"]:::service", node.id);
            }
            NodeKind::Database => {
                let label = match engine_label(&node.id) {
                    Some(engine) => format!("{}<br/>{engine}", node.id),
                    None => node.id.clone(),
                };
                let _ = writeln!(out, "    {id}[(\"{label}\")]:::database");
            }
            NodeKind::External => {
                let _ = writeln!(out, "    {id}([\"{}\"]):::external", node.id);
            }
        }
    }

    for edge in &graph.edge_list {
        let from = mermaid_id(&edge.from);
        let to = mermaid_id(&edge.to);
        let label = edge.kind.diagram_label();
        if label.is_empty() {
            let _ = writeln!(out, "    {from} --> {to}");
        } else {
            let _ = writeln!(out, "    {from} -->|{label}| {to}");
        }
    }

    out
}

/// Mermaid identifiers cannot carry arbitrary punctuation; display
/// labels keep the original name.
fn mermaid_id(id: &str) -> String {
    id.chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{build_graph, Edge, EdgeKind};

    fn edge(from: &str, to: &str, kind: EdgeKind) -> Edge {
        Edge {
            from: from.to_string(),
            to: to.to_string(),
            kind,
            evidence: None,
        }
    }

    #[test]
    fn two_node_api_edge_renders_declarations_and_label() {
        let graph = build_graph(
            &vec!["ui".to_string(), "api".to_string()],
            vec![edge("ui", "api", EdgeKind::Api)],
            &[],
        );
        let text = render_diagram(&graph);
        assert!(text.contains("ui[\"ui\"]:::service"));
        assert!(text.contains("api[\"api\"]:::service"));
        assert_eq!(text.matches("ui -->|API| api").count(), 1);
    }

    #[test]
    fn database_node_carries_engine_annotation() {
        let graph = build_graph(
            &vec!["api".to_string()],
            vec![edge("api", "postgresql-db", EdgeKind::Database)],
            &[],
        );
        let text = render_diagram(&graph);
        assert!(text.contains("postgresql_db[(\"postgresql-db<br/>PostgreSQL\")]:::database"));
        assert!(text.contains("api -->|DB| postgresql_db"));
    }

    #[test]
    fn internal_edges_are_unlabeled() {
        let graph = build_graph(
            &vec!["web".to_string(), "billing".to_string()],
            vec![edge("web", "billing", EdgeKind::Internal)],
            &[],
        );
        let text = render_diagram(&graph);
        assert!(text.contains("web --> billing"));
        assert!(!text.contains("-->||"));
    }

    #[test]
    fn rendering_is_byte_identical_across_runs() {
        let build = || {
            build_graph(
                &vec!["web".to_string(), "api".to_string()],
                vec![
                    edge("web", "api", EdgeKind::Api),
                    edge("api", "redis-cache", EdgeKind::Cache),
                ],
                &[],
            )
        };
        assert_eq!(render_diagram(&build()), render_diagram(&build()));
    }

    #[test]
    fn empty_graph_renders_header_only() {
        let graph = build_graph(&Vec::new(), Vec::new(), &[]);
        let text = render_diagram(&graph);
        assert!(text.starts_with("graph TB\n"));
        assert!(!text.contains("-->"));
    }
}
