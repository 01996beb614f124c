//! Engine-owned state for one match.

use serde::{Deserialize, Serialize};

use super::config::EngineConfig;
use super::momentum::Momentum;
use super::zone::{PerSide, Side, Zone};
use crate::models::{possession_percent, MatchEvent, MatchStatistics};

/// Regulation length. There is no stoppage time.
pub const FULL_TIME_MINUTE: u8 = 90;

/// Hard cap on substitutions per match.
pub const MAX_SUBSTITUTIONS: u8 = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchState {
    /// Minutes resolved so far (0-90).
    pub minute: u8,
    pub zone: Zone,
    pub possession: Side,
    pub momentum: Momentum,
    pub score: PerSide<u8>,
    pub shots: PerSide<u16>,
    pub xg: PerSide<f32>,
    /// One tick per resolved minute, credited to the side in control.
    pub possession_ticks: PerSide<u32>,
    pub events: Vec<MatchEvent>,
    pub substitutions_used: u8,
}

impl MatchState {
    pub fn kick_off(config: &EngineConfig) -> Self {
        Self {
            minute: 0,
            zone: Zone::Midfield,
            possession: Side::Home,
            momentum: Momentum::new(config.momentum.initial),
            score: PerSide::default(),
            shots: PerSide::default(),
            xg: PerSide::default(),
            possession_ticks: PerSide::default(),
            events: Vec::new(),
            substitutions_used: 0,
        }
    }

    pub fn is_full_time(&self) -> bool {
        self.minute >= FULL_TIME_MINUTE
    }

    pub fn substitutions_left(&self) -> u8 {
        MAX_SUBSTITUTIONS.saturating_sub(self.substitutions_used)
    }

    pub fn statistics(&self, home_team: &str, away_team: &str) -> MatchStatistics {
        MatchStatistics {
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            home_score: self.score.home,
            away_score: self.score.away,
            possession: possession_percent(self.possession_ticks.home, self.possession_ticks.away),
            shots_home: self.shots.home,
            shots_away: self.shots.away,
            xg_home: round_xg(self.xg.home),
            xg_away: round_xg(self.xg.away),
        }
    }
}

/// Two decimal places, enough for a scoreboard.
fn round_xg(xg: f32) -> f32 {
    (xg * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kick_off_state() {
        let state = MatchState::kick_off(&EngineConfig::default());
        assert_eq!(state.minute, 0);
        assert_eq!(state.zone, Zone::Midfield);
        assert_eq!(state.momentum.value(), 50.0);
        assert!(state.events.is_empty());
        assert_eq!(state.substitutions_left(), 5);
        assert!(!state.is_full_time());
    }

    #[test]
    fn test_statistics_before_any_minute() {
        let state = MatchState::kick_off(&EngineConfig::default());
        let stats = state.statistics("Home", "Away");
        assert_eq!(stats.possession, 50);
        assert_eq!(stats.total_goals(), 0);
        assert_eq!(stats.home_team, "Home");
    }

    #[test]
    fn test_xg_is_rounded() {
        let mut state = MatchState::kick_off(&EngineConfig::default());
        state.xg.home = 1.23456;
        assert_eq!(state.statistics("H", "A").xg_home, 1.23);
    }
}
