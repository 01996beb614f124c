//! # Engine configuration
//!
//! Every balance constant lives here so the resolution code stays free of
//! magic numbers. Presets cover the common cases; a JSON file can override any
//! field.
//!
//! ```rust
//! use touchline_core::engine::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! let arcade = EngineConfig::arcade();
//! assert!(arcade.chance.finishing_factor > config.chance.finishing_factor);
//! ```

mod chance_config;
mod fatigue_config;
mod momentum_config;

pub use chance_config::ChanceConfig;
pub use fatigue_config::FatigueConfig;
pub use momentum_config::MomentumConfig;

use serde::{Deserialize, Serialize};
use std::{env, fs};

use crate::error::MatchError;

/// Environment variable naming a JSON config file.
pub const ENGINE_CONFIG_PATH_ENV: &str = "TOUCHLINE_ENGINE_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EngineConfig {
    #[serde(default)]
    pub chance: ChanceConfig,
    #[serde(default)]
    pub momentum: MomentumConfig,
    #[serde(default)]
    pub fatigue: FatigueConfig,
}

impl EngineConfig {
    pub fn realistic() -> Self {
        Self::default()
    }

    /// More shots, sharper finishing.
    pub fn arcade() -> Self {
        let mut cfg = Self::default();
        cfg.chance.shot_share = 0.65;
        cfg.chance.finishing_factor = 0.4;
        cfg.chance.xg_max = 0.5;
        cfg.momentum.goal_spike = 30.0;
        cfg
    }

    /// No jitter or variance: only the contest draws remain random.
    pub fn deterministic() -> Self {
        let mut cfg = Self::default();
        cfg.chance.finishing_variance = 0.0;
        cfg.chance.opponent_attack_variance = 0.0;
        cfg.chance.opponent_defense_variance = 0.0;
        cfg.fatigue.jitter_max = 0.0;
        cfg
    }

    pub fn preset(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "realistic" => Some(Self::realistic()),
            "arcade" => Some(Self::arcade()),
            "deterministic" => Some(Self::deterministic()),
            _ => None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, MatchError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from the file named by `TOUCHLINE_ENGINE_CONFIG`, default otherwise.
    pub fn from_env() -> Result<Self, MatchError> {
        let Ok(path) = env::var(ENGINE_CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };
        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_json(&content).map_err(|e| {
            MatchError::InvalidConfig(format!("{ENGINE_CONFIG_PATH_ENV}='{path}': {e}"))
        })
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        let c = &self.chance;
        let m = &self.momentum;
        let f = &self.fatigue;

        let values = [
            c.shot_share,
            c.clear_share,
            c.finishing_factor,
            c.xg_min,
            c.xg_max,
            c.finishing_variance,
            c.opponent_attack_variance,
            c.opponent_defense_variance,
            m.initial,
            m.decay_step,
            m.midfield_win_nudge,
            m.defensive_win_nudge,
            m.missed_chance_nudge,
            m.goal_spike,
            f.jitter_max,
            f.decay_scale,
            f.penalty_threshold,
            f.penalty_weight,
        ];
        if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(invalid("values must be finite and non-negative"));
        }
        if c.shot_share > 1.0 || c.clear_share > 1.0 {
            return Err(invalid("shot_share and clear_share must be within 0..=1"));
        }
        if c.finishing_factor <= 0.0 || c.finishing_factor > 1.0 {
            return Err(invalid("finishing_factor must be within (0, 1]"));
        }
        if c.xg_min > c.xg_max || c.xg_max > 1.0 {
            return Err(invalid("xG band must satisfy 0 <= xg_min <= xg_max <= 1"));
        }
        if m.initial > 100.0 || m.goal_spike > 50.0 {
            return Err(invalid("momentum initial must be <= 100 and goal_spike <= 50"));
        }
        if f.penalty_threshold > 100.0 || f.penalty_weight > 1.0 {
            return Err(invalid("penalty_threshold must be <= 100 and penalty_weight <= 1"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> MatchError {
    MatchError::InvalidConfig(msg.to_string())
}
