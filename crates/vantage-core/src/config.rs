//! Engine tuning parameters and their on-disk configuration file.
//!
//! Only the health weighting is tunable. Label and attention thresholds are
//! fixed because callers rely on them.

use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VantageError};

const CONFIG_FILE: &str = "config.json";

/// Weighting of the health score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HealthConfig {
    /// Days after which recency earns no credit at all
    pub horizon_days: u32,
    /// Relative weight of mean milestone completion
    pub progress_weight: f64,
    /// Relative weight of update recency
    pub recency_weight: f64,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            horizon_days: 90,
            progress_weight: 0.5,
            recency_weight: 0.5,
        }
    }
}

impl HealthConfig {
    /// Checks the weights can produce a monotonic score.
    ///
    /// # Errors
    ///
    /// Returns `VantageError::Configuration` when the horizon is zero, a weight
    /// is negative or not finite, or both weights are zero.
    pub fn validate(&self) -> Result<()> {
        if self.horizon_days == 0 {
            return Err(VantageError::configuration(
                "health.horizon_days must be greater than zero",
            ));
        }
        for (name, weight) in [
            ("progress_weight", self.progress_weight),
            ("recency_weight", self.recency_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(VantageError::configuration(format!(
                    "health.{name} must be a non-negative number, got {weight}"
                )));
            }
        }
        if self.progress_weight + self.recency_weight <= 0.0 {
            return Err(VantageError::configuration(
                "health weights must not both be zero",
            ));
        }
        Ok(())
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub health: HealthConfig,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        self.health.validate()
    }

    /// Reads a JSON configuration file. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `VantageError::FileSystem` if the file cannot be read,
    /// `VantageError::Serialization` if it is not valid JSON, and
    /// `VantageError::Configuration` if the values are out of range.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| VantageError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        debug!("Loaded engine configuration from {}", path.display());
        Ok(config)
    }

    /// Loads `$XDG_CONFIG_HOME/vantage/config.json` when present, otherwise
    /// returns the defaults.
    pub fn discover() -> Result<Self> {
        match Self::default_config_path() {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("vantage").find_config_file(CONFIG_FILE)
    }
}
