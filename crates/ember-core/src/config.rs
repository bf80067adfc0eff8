//! Workspace configuration, loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{EmberError, EmberResult};

mod defaults {
    pub const COST_PER_PACK: f64 = crate::constants::DEFAULT_COST_PER_PACK;
    pub const PUFFS_PER_PACK: u32 = crate::constants::DEFAULT_PUFFS_PER_PACK;
    pub const PREDICTION_WINDOW_DAYS: i64 = crate::constants::PREDICTION_WINDOW_DAYS;
    pub const PREDICTION_MIN_EVENTS: usize = crate::constants::MIN_EVENTS_FOR_PREDICTION;
    pub const COACHING_ENDPOINT: &str = "http://localhost:11434/v1/chat/completions";
    pub const COACHING_MODEL: &str = "llama3.1";
    pub const COACHING_MAX_TOKENS: u32 = 400;
    pub const COACHING_TEMPERATURE: f64 = 0.7;
    pub const COACHING_TIMEOUT_SECS: u64 = 15;
}

/// Pack economics used for money-saved calculations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    pub cost_per_pack: f64,
    pub puffs_per_pack: u32,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            cost_per_pack: defaults::COST_PER_PACK,
            puffs_per_pack: defaults::PUFFS_PER_PACK,
        }
    }
}

/// Prediction engine tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Trailing window length in days.
    pub window_days: i64,
    /// Below this many events the engine returns the sentinel result.
    pub min_events: usize,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            window_days: defaults::PREDICTION_WINDOW_DAYS,
            min_events: defaults::PREDICTION_MIN_EVENTS,
        }
    }
}

/// Text-generation service settings for the coaching planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoachingConfig {
    pub endpoint: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    /// Hard cap on the external call — the only unbounded-latency
    /// dependency in the system.
    pub timeout_secs: u64,
}

impl Default for CoachingConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::COACHING_ENDPOINT.to_string(),
            model: defaults::COACHING_MODEL.to_string(),
            max_tokens: defaults::COACHING_MAX_TOKENS,
            temperature: defaults::COACHING_TEMPERATURE,
            timeout_secs: defaults::COACHING_TIMEOUT_SECS,
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmberConfig {
    pub economy: EconomyConfig,
    pub prediction: PredictionConfig,
    pub coaching: CoachingConfig,
}

impl EmberConfig {
    /// Load from a TOML file. Missing sections fall back to defaults.
    pub fn load(path: &Path) -> EmberResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| EmberError::Config {
            reason: format!("read {}: {e}", path.display()),
        })?;
        toml::from_str(&raw).map_err(|e| EmberError::Config {
            reason: e.to_string(),
        })
    }
}
