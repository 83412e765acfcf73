//! Pipeline input and output contracts.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::graph::DependencyGraph;
use crate::impact::ImpactReport;
use crate::normalize::engine_label;

/// One declared service: its name and source root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSpec {
    #[serde(rename = "serviceName")]
    pub name: String,
    #[serde(rename = "sourceRootPath")]
    pub root: PathBuf,
}

impl ServiceSpec {
    /// Shorthand constructor for tests and embedders.
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
        }
    }
}

/// A project-level database detection supplied by project analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedDatabase {
    #[serde(rename = "databaseType")]
    pub db_type: String,
    pub detected: bool,
}

/// One dependency edge in the output contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependencyRecord {
    pub from: String,
    pub to: String,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// One database node in the output contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub db_type: String,
}

/// Graph summary in the downstream contract shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSummary {
    pub services: Vec<String>,
    pub dependencies: Vec<DependencyRecord>,
    pub databases: Vec<DatabaseRecord>,
    pub external_services: Vec<String>,
}

impl GraphSummary {
    /// Project a built graph into the wire shape, preserving node and
    /// edge discovery order.
    pub fn from_graph(graph: &DependencyGraph) -> Self {
        let services = graph
            .service_ids()
            .into_iter()
            .map(str::to_string)
            .collect();

        let dependencies = graph
            .edge_list
            .iter()
            .map(|e| DependencyRecord {
                from: e.from.clone(),
                to: e.to.clone(),
                kind: e.kind.name().to_string(),
                details: e.evidence.clone(),
            })
            .collect();

        let databases = graph
            .database_ids()
            .into_iter()
            .map(|id| DatabaseRecord {
                name: id.to_string(),
                db_type: engine_label(id)
                    .map(|l| l.to_ascii_lowercase())
                    .unwrap_or_else(|| "unknown".to_string()),
            })
            .collect();

        let external_services = graph
            .external_ids()
            .into_iter()
            .map(str::to_string)
            .collect();

        Self {
            services,
            dependencies,
            databases,
            external_services,
        }
    }
}

/// The full result of one analysis run. Transient, recomputed from
/// scratch on every invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub graph: GraphSummary,
    #[serde(rename = "impactAnalysis")]
    pub impact: Vec<ImpactReport>,
    pub diagram: String,
}
