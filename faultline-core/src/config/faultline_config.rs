//! Top-level Faultline configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ResolutionConfig, ScanConfig, ScoringConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (applied via `apply_overrides`)
/// 2. Environment variables (`FAULTLINE_*`)
/// 3. Project config (`faultline.toml` in project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FaultlineConfig {
    pub scan: ScanConfig,
    pub scoring: ScoringConfig,
    pub resolution: ResolutionConfig,
}

/// Programmatic overrides that callers can apply on top of file/env layers.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub max_file_size: Option<u64>,
    pub threads: Option<usize>,
}

impl FaultlineConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = root.join("faultline.toml");
        if project_config_path.exists() {
            let raw = std::fs::read_to_string(&project_config_path).map_err(|e| {
                ConfigError::ParseError {
                    path: project_config_path.display().to_string(),
                    message: e.to_string(),
                }
            })?;
            config = toml::from_str(&raw).map_err(|e| ConfigError::ParseError {
                path: project_config_path.display().to_string(),
                message: e.to_string(),
            })?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): programmatic overrides
        if let Some(ov) = overrides {
            Self::apply_overrides(&mut config, ov);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &FaultlineConfig) -> Result<(), ConfigError> {
        if let Some(size) = config.scan.max_file_size {
            if size == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.max_file_size".to_string(),
                    message: "must be greater than zero".to_string(),
                });
            }
        }
        if let Some(threads) = config.scan.threads {
            if threads == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.threads".to_string(),
                    message: "must be greater than zero".to_string(),
                });
            }
        }
        if let Some(threshold) = config.scoring.high_threshold {
            let critical = config.scoring.effective_critical_threshold();
            if threshold > critical {
                return Err(ConfigError::ValidationFailed {
                    field: "scoring.high_threshold".to_string(),
                    message: format!("must not exceed critical_threshold ({critical})"),
                });
            }
        }
        Ok(())
    }

    fn apply_env_overrides(config: &mut FaultlineConfig) {
        if let Ok(val) = std::env::var("FAULTLINE_MAX_FILE_SIZE") {
            if let Ok(size) = val.parse::<u64>() {
                config.scan.max_file_size = Some(size);
            }
        }
        if let Ok(val) = std::env::var("FAULTLINE_THREADS") {
            if let Ok(threads) = val.parse::<usize>() {
                config.scan.threads = Some(threads);
            }
        }
    }

    fn apply_overrides(config: &mut FaultlineConfig, overrides: &ConfigOverrides) {
        if let Some(size) = overrides.max_file_size {
            config.scan.max_file_size = Some(size);
        }
        if let Some(threads) = overrides.threads {
            config.scan.threads = Some(threads);
        }
    }
}
