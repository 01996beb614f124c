//! Per-minute condition loss for the live roster.

use rand::Rng;

use super::config::FatigueConfig;
use super::probability::spread;
use crate::models::Team;

/// Condition lost by one starter this minute: random jitter plus the fixed
/// decay of the team's pressing intensity.
pub fn minute_loss(team: &Team, cfg: &FatigueConfig, rng: &mut impl Rng) -> f32 {
    spread(rng, cfg.jitter_max) + team.tactics.pressing.fatigue_decay() * cfg.decay_scale
}

/// Tire every current starter. Bench and reserves recover nothing and lose nothing.
pub fn apply_minute(team: &mut Team, cfg: &FatigueConfig, rng: &mut impl Rng) {
    for idx in 0..team.players.len() {
        if !team.players[idx].is_starting() {
            continue;
        }
        let loss = minute_loss(team, cfg, rng);
        team.players[idx].tire(loss);
    }
}
