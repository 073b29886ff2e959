//! Run configuration. File values are defaults; CLI flags override them.

use crate::error::{FeatureError, Result};
use crate::features::{BoundaryPolicy, Feature};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Accepted layout for `--start-time` when it is not plain epoch seconds.
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Window length in seconds; must be > 0
    pub window_secs: i64,
    /// Explicit anchor for the first window (epoch seconds); derived from data when absent
    pub start_time: Option<i64>,
    /// Cap on raw input rows considered
    pub row_limit: Option<usize>,
    /// Force one boundary policy for every feature instead of each feature's own
    pub policy_override: Option<BoundaryPolicy>,
    /// Features to extract, in output order
    pub features: Vec<Feature>,
    /// Logging
    pub log: LogConfig,
}

/// Command-line values layered over a loaded config. `None` / empty keeps the file value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub window_secs: Option<i64>,
    /// Epoch seconds or `YYYY-MM-DD HH:MM:SS` (UTC)
    pub start_time: Option<String>,
    pub row_limit: Option<usize>,
    pub policy: Option<BoundaryPolicy>,
    pub features: Vec<Feature>,
    pub log_level: Option<String>,
    pub log_json: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            window_secs: 300,
            start_time: None,
            row_limit: None,
            policy_override: None,
            features: Feature::ALL.to_vec(),
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

impl FeatureConfig {
    /// Load from JSON file if present; otherwise return default.
    /// A file that exists but does not parse is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)?;
        let config = serde_json::from_str::<FeatureConfig>(&data)?;
        Ok(config)
    }

    /// Merge command-line values over this config.
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) -> Result<()> {
        if let Some(window) = overrides.window_secs {
            self.window_secs = window;
        }
        if let Some(raw) = overrides.start_time.as_deref() {
            self.start_time = Some(parse_start_time(raw)?);
        }
        if overrides.row_limit.is_some() {
            self.row_limit = overrides.row_limit;
        }
        if overrides.policy.is_some() {
            self.policy_override = overrides.policy;
        }
        if !overrides.features.is_empty() {
            self.features = overrides.features;
        }
        if let Some(level) = overrides.log_level {
            self.log.level = level;
        }
        self.log.json |= overrides.log_json;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.window_secs <= 0 {
            return Err(FeatureError::Configuration(format!(
                "window size must be positive, got {}",
                self.window_secs
            )));
        }
        if self.features.is_empty() {
            return Err(FeatureError::Configuration("no features selected".into()));
        }
        Ok(())
    }

    /// Boundary policy a feature runs under in this configuration.
    pub fn policy_for(&self, feature: Feature) -> BoundaryPolicy {
        self.policy_override
            .unwrap_or_else(|| feature.default_policy())
    }
}

/// Parse a start time given either as epoch seconds or as `YYYY-MM-DD HH:MM:SS` (UTC).
pub fn parse_start_time(raw: &str) -> Result<i64> {
    let raw = raw.trim();
    if let Ok(secs) = raw.parse::<i64>() {
        return Ok(secs);
    }
    NaiveDateTime::parse_from_str(raw, START_TIME_FORMAT)
        .map(|dt| dt.and_utc().timestamp())
        .map_err(|e| FeatureError::Configuration(format!("invalid start time {raw:?}: {e}")))
}

/// The input log must be an existing regular file.
pub fn require_input(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(FeatureError::Configuration(format!(
            "input file not found: {}",
            path.display()
        )))
    }
}
