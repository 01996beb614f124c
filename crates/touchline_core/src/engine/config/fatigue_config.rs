use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FatigueConfig {
    /// Upper bound of the random per-minute condition loss (default: 0.05)
    pub jitter_max: f32,
    /// Multiplier on the pressing decay table (default: 1.0)
    pub decay_scale: f32,
    /// Condition below which attributes start to suffer (default: 90)
    pub penalty_threshold: f32,
    /// Attribute loss at zero condition, as a fraction (default: 0.5)
    pub penalty_weight: f32,
}

impl Default for FatigueConfig {
    fn default() -> Self {
        Self { jitter_max: 0.05, decay_scale: 1.0, penalty_threshold: 90.0, penalty_weight: 0.5 }
    }
}
