//! Engine configuration. Strict mode is on unless the caller trusts its extractor.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the JSON config file
pub const CONFIG_PATH_ENV: &str = "BIOKEY_CONFIG_PATH";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricConfig {
    /// Reject NaN/infinite elements before scoring
    pub strict: bool,
    /// Variance-aware scorer constants
    pub variance_aware: VarianceAwareParams,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VarianceAwareParams {
    /// Floor applied to profile standard deviations (ms)
    pub min_feature_std: f32,
    /// z-scores are clamped to ±max_z
    pub max_z: f32,
    /// Huber loss switches from quadratic to linear past this |z|
    pub huber_delta: f32,
    /// Floor applied to per-pair weights
    pub min_weight: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for MetricConfig {
    fn default() -> Self {
        Self {
            strict: true,
            variance_aware: VarianceAwareParams::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for VarianceAwareParams {
    fn default() -> Self {
        Self {
            min_feature_std: 15.0,
            max_z: 5.0,
            huber_delta: 2.5,
            min_weight: 0.01,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

impl MetricConfig {
    /// Load from JSON file if present; otherwise return default
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(data) => match serde_json::from_str::<MetricConfig>(&data) {
                    Ok(c) => return c,
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "invalid config; using defaults")
                    }
                },
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "unreadable config; using defaults")
                }
            }
        }
        Self::default()
    }

    /// Load from the path in `BIOKEY_CONFIG_PATH`, falling back to `biokey.json`
    pub fn from_env() -> Self {
        let path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("biokey.json"));
        Self::load(&path)
    }
}
