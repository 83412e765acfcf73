//! Criticality scoring policy.

use serde::{Deserialize, Serialize};

/// The criticality scoring policy table.
///
/// The weights and thresholds are heuristics, not domain law, so they
/// are configuration rather than constants. The defaults weight a
/// direct caller twice as heavily as an indirect one, with database
/// fan-in between the two.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    /// Score contribution per direct dependent. Default: 20.
    pub direct_weight: Option<u32>,
    /// Score contribution per indirect dependent. Default: 10.
    pub indirect_weight: Option<u32>,
    /// Score contribution per database dependency. Default: 15.
    pub database_weight: Option<u32>,
    /// Score at or above which a node is "critical". Default: 80.
    pub critical_threshold: Option<u32>,
    /// Score at or above which a node is "high-impact". Default: 50.
    pub high_threshold: Option<u32>,
}

impl ScoringConfig {
    /// Returns the effective direct-dependent weight, defaulting to 20.
    pub fn effective_direct_weight(&self) -> u32 {
        self.direct_weight.unwrap_or(20)
    }

    /// Returns the effective indirect-dependent weight, defaulting to 10.
    pub fn effective_indirect_weight(&self) -> u32 {
        self.indirect_weight.unwrap_or(10)
    }

    /// Returns the effective database weight, defaulting to 15.
    pub fn effective_database_weight(&self) -> u32 {
        self.database_weight.unwrap_or(15)
    }

    /// Returns the effective critical threshold, defaulting to 80.
    pub fn effective_critical_threshold(&self) -> u32 {
        self.critical_threshold.unwrap_or(80)
    }

    /// Returns the effective high-impact threshold, defaulting to 50.
    pub fn effective_high_threshold(&self) -> u32 {
        self.high_threshold.unwrap_or(50)
    }
}
