//! Scan configuration.

use serde::{Deserialize, Serialize};

/// Configuration for file enumeration and per-file extraction budgets.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Maximum file size in bytes before a file is skipped. Default: 1 MiB.
    pub max_file_size: Option<u64>,
    /// Worker threads for parallel extraction. Default: rayon heuristic.
    pub threads: Option<usize>,
    /// Bytes sniffed from the head of a file for binary detection. Default: 8192.
    pub binary_sniff_bytes: Option<usize>,
    /// Additional directory names to ignore during enumeration.
    #[serde(default)]
    pub extra_ignore_dirs: Vec<String>,
}

impl ScanConfig {
    /// Returns the effective maximum file size, defaulting to 1 MiB.
    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(1024 * 1024)
    }

    /// Returns the effective binary sniff window, defaulting to 8 KiB.
    pub fn effective_binary_sniff_bytes(&self) -> usize {
        self.binary_sniff_bytes.unwrap_or(8192)
    }
}
