//! Run configuration: decision threshold, absent-feature policy, logging.

use crate::error::{ClassifyError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Probability at or above which a user is called fake. Not derived
    /// from data; 0.5 unless overridden.
    pub decision_threshold: f32,
    /// Fill for model schema columns absent from the current batch.
    pub absent_feature: AbsentFeaturePolicy,
    /// Logging
    pub log: LogConfig,
}

/// How to fill a feature column the model was trained on but this batch
/// never produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsentFeaturePolicy {
    /// NaN column; the model's missing-value handling applies.
    Missing,
    /// Zero-fill.
    Zero,
    /// Refuse to score.
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            decision_threshold: 0.5,
            absent_feature: AbsentFeaturePolicy::Missing,
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load from a JSON file. An unreadable or unparsable file is an error;
    /// callers that want defaults simply don't pass a config path.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|source| ClassifyError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&data)?)
    }
}
