use serde::{Deserialize, Serialize};

/// Running or final statistics for one match. Home is always the manager's side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MatchStatistics {
    pub home_team: String,
    pub away_team: String,
    pub home_score: u8,
    pub away_score: u8,
    /// Home possession, whole percent. Away is `100 - possession`.
    pub possession: u8,
    pub shots_home: u16,
    pub shots_away: u16,
    pub xg_home: f32,
    pub xg_away: f32,
}

impl MatchStatistics {
    pub fn possession_away(&self) -> u8 {
        100u8.saturating_sub(self.possession)
    }

    pub fn total_goals(&self) -> u16 {
        self.home_score as u16 + self.away_score as u16
    }
}

/// `round(home / (home + away) * 100)`, 50 before any minute is played.
pub fn possession_percent(home_ticks: u32, away_ticks: u32) -> u8 {
    let total = home_ticks + away_ticks;
    if total == 0 {
        return 50;
    }
    ((home_ticks as f64 / total as f64) * 100.0).round() as u8
}
