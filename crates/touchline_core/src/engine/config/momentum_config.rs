use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MomentumConfig {
    /// Kick-off momentum (default: 50)
    pub initial: f32,
    /// Per-minute pull toward 50 (default: 0.5)
    pub decay_step: f32,
    /// Winning the midfield contest (default: 1)
    pub midfield_win_nudge: f32,
    /// Winning the ball back in the own third (default: 2)
    pub defensive_win_nudge: f32,
    /// Against the attacker after a save or miss (default: 5)
    pub missed_chance_nudge: f32,
    /// Distance from 50 momentum jumps to after a goal (default: 25)
    pub goal_spike: f32,
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self {
            initial: 50.0,
            decay_step: 0.5,
            midfield_win_nudge: 1.0,
            defensive_win_nudge: 2.0,
            missed_chance_nudge: 5.0,
            goal_spike: 25.0,
        }
    }
}
