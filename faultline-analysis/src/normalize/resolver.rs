//! Resolution of raw mentions to canonical, deduplicated edges.

use faultline_core::config::{ResolutionConfig, UnresolvedPolicy};
use faultline_core::types::collections::{FxHashSet, SmallVec4};
use tracing::trace;

use crate::extract::{MentionCategory, RawMention};
use crate::graph::{Edge, EdgeKind};

use super::canonical::resolve_db_keyword;

/// Resolve raw mentions against the known service set and deduplicate.
///
/// Resolution is per category:
/// - `httpCall`: the first non-generic segment of the hint (the literal
///   `api` is rejected) must name a known service other than the source.
/// - `databaseUsage`: the keyword maps to a canonical database/cache node.
/// - `internalImport`: a path segment must name a known service other
///   than the source.
///
/// Self-loops are dropped. Duplicates on `(from, to, kind)` collapse to
/// the first edge seen, keeping its evidence. Unresolved mentions are
/// dropped, or materialized as external placeholder targets when the
/// policy asks for them.
pub fn normalize_mentions(
    mentions: &[RawMention],
    known_services: &[String],
    config: &ResolutionConfig,
) -> Vec<Edge> {
    let known: FxHashSet<&str> = known_services.iter().map(String::as_str).collect();
    let mut seen: FxHashSet<(String, String, EdgeKind)> = FxHashSet::default();
    let mut edges = Vec::new();

    for mention in mentions {
        let resolved = match mention.category {
            MentionCategory::HttpCall => resolve_http(mention, &known, config),
            MentionCategory::DatabaseUsage => resolve_db(mention),
            MentionCategory::InternalImport => resolve_import(mention, &known),
        };

        let Some((to, kind)) = resolved else {
            trace!(
                service = %mention.service,
                hint = %mention.target_hint,
                category = mention.category.name(),
                "dropping unresolved mention"
            );
            continue;
        };

        if to == mention.service {
            continue;
        }

        let key = (mention.service.clone(), to.clone(), kind);
        if seen.insert(key) {
            edges.push(Edge {
                from: mention.service.clone(),
                to,
                kind,
                evidence: Some(mention.evidence.clone()),
            });
        }
    }

    edges
}

fn resolve_http(
    mention: &RawMention,
    known: &FxHashSet<&str>,
    config: &ResolutionConfig,
) -> Option<(String, EdgeKind)> {
    let candidates = candidate_segments(&mention.target_hint);

    for candidate in &candidates {
        if known.contains(candidate.as_str()) {
            return Some((candidate.clone(), EdgeKind::Api));
        }
    }

    match config.unresolved_policy {
        UnresolvedPolicy::Drop => None,
        UnresolvedPolicy::External => candidates
            .into_iter()
            .next()
            .map(|host| (host, EdgeKind::Api)),
    }
}

fn resolve_db(mention: &RawMention) -> Option<(String, EdgeKind)> {
    resolve_db_keyword(&mention.target_hint).map(|(node, kind)| (node.to_string(), kind))
}

// Splitting on both separators covers JS paths ("../billing/client")
// and dotted Python modules ("..billing.client") with one rule.
fn resolve_import(
    mention: &RawMention,
    known: &FxHashSet<&str>,
) -> Option<(String, EdgeKind)> {
    mention
        .target_hint
        .split(['/', '.'])
        .filter(|seg| !seg.is_empty())
        .find(|seg| known.contains(seg))
        .map(|seg| (seg.to_string(), EdgeKind::Internal))
}

/// Candidate service-name segments of an HTTP target hint, in priority
/// order: the host (minus port) for absolute URLs, then path segments.
/// The literal `api` is never a candidate.
fn candidate_segments(hint: &str) -> SmallVec4<String> {
    let rest = hint
        .strip_prefix("https://")
        .or_else(|| hint.strip_prefix("http://"))
        .unwrap_or(hint);

    rest.split('/')
        .filter(|seg| !seg.is_empty())
        .map(|seg| seg.split(':').next().unwrap_or(seg))
        .filter(|seg| !seg.is_empty() && !seg.eq_ignore_ascii_case("api"))
        .map(str::to_string)
        .collect()
}
