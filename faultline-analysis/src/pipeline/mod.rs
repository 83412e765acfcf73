//! Pipeline orchestration: the strict five-stage sequence from raw
//! source files to graph, ranked impact reports, and diagram text.

pub mod types;

pub use types::{
    AnalysisResult, DatabaseRecord, DependencyRecord, DetectedDatabase, GraphSummary,
    ServiceSpec,
};

pub use crate::extract::SourceFile;

use tracing::info;

use faultline_core::cancel::{Cancellable, CancellationToken};
use faultline_core::config::FaultlineConfig;
use faultline_core::errors::{ExtractError, PipelineError, PipelineOutcome};
use faultline_core::types::collections::FxHashSet;

use crate::diagram::render_diagram;
use crate::extract::{extract_all, RuleSet};
use crate::graph::build_graph;
use crate::impact::analyze_impact;
use crate::normalize::normalize_mentions;
use crate::walk::{enumerate_sources, IgnoreSet};

/// Run the full analysis over in-memory source files.
///
/// The stages are strictly sequential: extraction must complete before
/// normalization because impact analysis needs a closed-world reverse
/// edge view. Only extraction itself is parallel internally.
///
/// Cancellation discards everything; no partially built graph is ever
/// returned.
pub fn analyze_project(
    services: &[ServiceSpec],
    files: &[SourceFile],
    detected_databases: &[DetectedDatabase],
    config: &FaultlineConfig,
    token: &CancellationToken,
) -> Result<AnalysisResult, PipelineError> {
    validate_services(services)?;

    let service_names: Vec<String> = services.iter().map(|s| s.name.clone()).collect();
    let rules = RuleSet::builtin()?;

    let mentions = match extract_all(files, &rules, &config.scan, token) {
        Ok(mentions) => mentions,
        Err(ExtractError::Cancelled) => return Err(PipelineError::Cancelled),
        Err(e) => return Err(e.into()),
    };

    let edges = normalize_mentions(&mentions, &service_names, &config.resolution);

    if token.is_cancelled() {
        return Err(PipelineError::Cancelled);
    }

    let graph = build_graph(&service_names, edges, detected_databases);
    let impact = analyze_impact(&graph, &config.scoring);
    let diagram = render_diagram(&graph);

    info!(
        services = service_names.len(),
        files = files.len(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "analysis complete"
    );

    Ok(AnalysisResult {
        graph: GraphSummary::from_graph(&graph),
        impact,
        diagram,
    })
}

/// Convenience entry point that enumerates each service's source root
/// from disk and then runs `analyze_project`.
///
/// A service whose root cannot be enumerated contributes zero files and
/// a non-fatal error on the outcome; it still appears as an isolated
/// node. Only contract violations and cancellation are fatal.
pub fn analyze_from_disk(
    services: &[ServiceSpec],
    detected_databases: &[DetectedDatabase],
    config: &FaultlineConfig,
    token: &CancellationToken,
) -> Result<PipelineOutcome<AnalysisResult>, PipelineError> {
    validate_services(services)?;

    let ignore_set = IgnoreSet::with_extra(&config.scan.extra_ignore_dirs);
    let mut files = Vec::new();
    let mut scan_errors: Vec<PipelineError> = Vec::new();
    for spec in services {
        match enumerate_sources(&spec.name, &spec.root, &ignore_set, &config.scan) {
            Ok(mut found) => files.append(&mut found),
            Err(e) => scan_errors.push(e.into()),
        }
    }

    let result = analyze_project(services, &files, detected_databases, config, token)?;
    let mut outcome = PipelineOutcome::new(result);
    outcome.errors = scan_errors;
    Ok(outcome)
}

/// Caller-contract validation. Everything else degrades gracefully;
/// a malformed services list does not.
fn validate_services(services: &[ServiceSpec]) -> Result<(), PipelineError> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for spec in services {
        if spec.name.trim().is_empty() {
            return Err(PipelineError::InvalidInput(
                "service name must not be empty".to_string(),
            ));
        }
        if !seen.insert(spec.name.as_str()) {
            return Err(PipelineError::InvalidInput(format!(
                "duplicate service name: {}",
                spec.name
            )));
        }
    }
    Ok(())
}
