//! Final-third duel, finishing and xG tuning.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChanceConfig {
    /// Fraction of the attacker's interval that turns into a shot (default: 0.5)
    pub shot_share: f32,
    /// Fraction of the defender's interval that wins the ball back (default: 0.5)
    pub clear_share: f32,
    /// Goal iff draw < shooter quality × this (default: 0.3)
    pub finishing_factor: f32,
    /// Per-shot xG band, sampled uniformly (default: 0.05..0.35)
    pub xg_min: f32,
    pub xg_max: f32,
    /// Random spread added to shooter and keeper quality (default: 10)
    pub finishing_variance: f32,
    /// CPU variance on the abstract opponent's attack rolls (default: 10)
    pub opponent_attack_variance: f32,
    /// CPU variance on the abstract opponent's defensive rolls (default: 5)
    pub opponent_defense_variance: f32,
}

impl Default for ChanceConfig {
    fn default() -> Self {
        Self {
            shot_share: 0.5,
            clear_share: 0.5,
            finishing_factor: 0.3,
            xg_min: 0.05,
            xg_max: 0.35,
            finishing_variance: 10.0,
            opponent_attack_variance: 10.0,
            opponent_defense_variance: 5.0,
        }
    }
}
