//! Impact analysis result types.

use serde::{Deserialize, Serialize};

/// Mitigation tier for a node, derived from its criticality score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recommendation {
    Critical,
    HighImpact,
    Moderate,
    LowImpactLeaf,
    Normal,
}

impl Recommendation {
    /// Stable wire name of the tier.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::HighImpact => "high-impact",
            Self::Moderate => "moderate",
            Self::LowImpactLeaf => "low-impact-leaf",
            Self::Normal => "normal",
        }
    }

    /// Advisory text for the tier.
    pub fn advice(&self) -> &'static str {
        match self {
            Self::Critical => {
                "Add redundancy, circuit breakers, and failover; monitor closely"
            }
            Self::HighImpact => "Add health checks and graceful degradation",
            Self::Moderate => "Consider read replicas and connection pooling",
            Self::LowImpactLeaf => "Safe to modify independently",
            Self::Normal => "Standard monitoring is sufficient",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Blast radius report for one graph node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactReport {
    /// The node the report is about.
    pub service: String,
    /// Services with an edge pointing directly at this node.
    pub direct_dependents: Vec<String>,
    /// Services reachable through one or more additional reverse hops,
    /// excluding the node itself and its direct dependents.
    pub indirect_dependents: Vec<String>,
    /// Targets of this node's `database`-kind edges. Cache and queue
    /// edges are excluded from this count.
    pub databases: Vec<String>,
    /// Heuristic blast-radius score in `[0, 100]`.
    pub criticality_score: u32,
    pub recommendation: Recommendation,
}
