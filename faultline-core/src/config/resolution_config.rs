//! Edge resolution policy.

use serde::{Deserialize, Serialize};

/// What to do with mentions that resolve to no known node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedPolicy {
    /// Drop the mention silently. Under-counts true dependents but
    /// keeps the graph limited to known nodes.
    #[default]
    Drop,
    /// Materialize an "external" placeholder node for HTTP mentions
    /// with a plausible host or path segment.
    External,
}

/// Configuration for the edge normalizer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Policy for mentions that resolve to no known node.
    pub unresolved_policy: UnresolvedPolicy,
}
