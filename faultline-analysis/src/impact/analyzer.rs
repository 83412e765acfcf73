//! Per-node blast radius computation over the reverse edge relation.

use std::collections::VecDeque;

use faultline_core::config::ScoringConfig;
use faultline_core::types::collections::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::graph::{DependencyGraph, EdgeKind};

use super::types::{ImpactReport, Recommendation};

/// Compute an `ImpactReport` for every node, ranked by criticality.
///
/// The returned list is sorted descending by score with a stable sort,
/// so ties keep node discovery order and the ranking is deterministic.
pub fn analyze_impact(graph: &DependencyGraph, scoring: &ScoringConfig) -> Vec<ImpactReport> {
    // Reverse adjacency in edge-discovery order: target id → caller ids.
    let mut callers: FxHashMap<&str, Vec<&str>> = FxHashMap::default();
    for edge in &graph.edge_list {
        callers
            .entry(edge.to.as_str())
            .or_default()
            .push(edge.from.as_str());
    }

    let mut reports: Vec<ImpactReport> = graph
        .nodes()
        .map(|node| report_for(graph, &callers, node.id.as_str(), scoring))
        .collect();

    reports.sort_by(|a, b| b.criticality_score.cmp(&a.criticality_score));

    debug!(reports = reports.len(), "impact analysis complete");

    reports
}

fn report_for(
    graph: &DependencyGraph,
    callers: &FxHashMap<&str, Vec<&str>>,
    origin: &str,
    scoring: &ScoringConfig,
) -> ImpactReport {
    let direct = direct_dependents(graph, callers, origin);
    let indirect = indirect_dependents(callers, origin, &direct);
    let databases = database_dependencies(graph, origin);

    let score = criticality_score(
        direct.len(),
        indirect.len(),
        databases.len(),
        scoring,
    );
    let recommendation = recommend(score, direct.len(), databases.len(), scoring);

    ImpactReport {
        service: origin.to_string(),
        direct_dependents: direct,
        indirect_dependents: indirect,
        databases,
        criticality_score: score,
        recommendation,
    }
}

/// Services with an edge pointing directly at `origin`, in
/// edge-discovery order, deduplicated.
fn direct_dependents(
    graph: &DependencyGraph,
    callers: &FxHashMap<&str, Vec<&str>>,
    origin: &str,
) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut direct = Vec::new();
    for &caller in callers.get(origin).map(Vec::as_slice).unwrap_or(&[]) {
        if caller != origin && graph.is_service(caller) && seen.insert(caller) {
            direct.push(caller.to_string());
        }
    }
    direct
}

/// Transitive dependents beyond the direct frontier, found by inverse
/// breadth-first traversal.
///
/// The visited set is seeded with the origin and every direct
/// dependent, so cycles terminate in O(V+E) and the origin is never
/// re-added even when a cycle routes back through it.
fn indirect_dependents(
    callers: &FxHashMap<&str, Vec<&str>>,
    origin: &str,
    direct: &[String],
) -> Vec<String> {
    let mut visited: FxHashSet<&str> = FxHashSet::default();
    visited.insert(origin);

    let mut queue: VecDeque<&str> = VecDeque::new();
    for dep in direct {
        visited.insert(dep.as_str());
        queue.push_back(dep.as_str());
    }

    let mut indirect = Vec::new();
    while let Some(current) = queue.pop_front() {
        for &caller in callers.get(current).map(Vec::as_slice).unwrap_or(&[]) {
            if visited.insert(caller) {
                indirect.push(caller.to_string());
                queue.push_back(caller);
            }
        }
    }

    indirect
}

/// Targets of `origin`'s `database`-kind edges. Cache and queue edges
/// do not count.
fn database_dependencies(graph: &DependencyGraph, origin: &str) -> Vec<String> {
    graph
        .edge_list
        .iter()
        .filter(|e| e.from == origin && e.kind == EdgeKind::Database)
        .map(|e| e.to.clone())
        .collect()
}

/// The saturating criticality score. Pure function of the three counts
/// and the policy table; clamped to 100.
fn criticality_score(
    direct: usize,
    indirect: usize,
    databases: usize,
    scoring: &ScoringConfig,
) -> u32 {
    let raw = scoring.effective_direct_weight() * direct as u32
        + scoring.effective_indirect_weight() * indirect as u32
        + scoring.effective_database_weight() * databases as u32;
    raw.min(100)
}

/// Fixed, ordered recommendation ladder; first match wins.
fn recommend(
    score: u32,
    direct: usize,
    databases: usize,
    scoring: &ScoringConfig,
) -> Recommendation {
    if score >= scoring.effective_critical_threshold() {
        Recommendation::Critical
    } else if score >= scoring.effective_high_threshold() {
        Recommendation::HighImpact
    } else if databases > 0 && direct > 0 {
        Recommendation::Moderate
    } else if direct == 0 {
        Recommendation::LowImpactLeaf
    } else {
        Recommendation::Normal
    }
}
