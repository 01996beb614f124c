use serde::{Deserialize, Serialize};

use super::{Player, Position, SquadStatus};
use crate::tactics::{Formation, Tactics};

/// Starters a team must field.
pub const STARTING_COUNT: usize = 11;

/// Rating used when a team has neither an explicit rating nor any starter.
pub const DEFAULT_TEAM_RATING: u8 = 75;

/// Rating assumed for an opponent descriptor without one.
pub const DEFAULT_OPPONENT_RATING: u8 = 72;

/// The manager's team. The engine works on its own copy of this.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub name: String,
    #[serde(default)]
    pub tactics: Tactics,
    /// Explicit overall rating. When set, each selected player's quality is
    /// blended halfway toward it; derived from the starters when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(name: impl Into<String>, players: Vec<Player>) -> Self {
        Self { name: name.into(), tactics: Tactics::default(), rating: None, players }
    }

    pub fn formation(&self) -> Formation {
        self.tactics.formation
    }

    pub fn starters(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_starting())
    }

    pub fn starter_count(&self) -> usize {
        self.starters().count()
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Explicit rating, or the mean overall of the current starters.
    pub fn overall_rating(&self) -> u8 {
        if let Some(rating) = self.rating {
            return rating;
        }
        let (sum, count) = self
            .starters()
            .fold((0u32, 0u32), |(sum, count), p| (sum + p.overall as u32, count + 1));
        if count == 0 {
            DEFAULT_TEAM_RATING
        } else {
            (sum as f32 / count as f32).round() as u8
        }
    }

    pub fn average_starter_condition(&self) -> f32 {
        let (sum, count) = self
            .starters()
            .fold((0.0f32, 0u32), |(sum, count), p| (sum + p.clamped_condition(), count + 1));
        if count == 0 {
            0.0
        } else {
            sum / count as f32
        }
    }

    /// Roster problems the engine will work around. Never fatal.
    pub fn lineup_issues(&self) -> Vec<LineupIssue> {
        let mut issues = Vec::new();

        let starters = self.starter_count();
        if starters != STARTING_COUNT {
            issues.push(LineupIssue::StarterCount { expected: STARTING_COUNT, found: starters });
        }

        let has_starting = |pred: fn(&Position) -> bool| self.starters().any(|p| pred(&p.position));
        if !has_starting(Position::is_goalkeeper) {
            issues.push(LineupIssue::MissingPosition(Position::Goalkeeper));
        }
        if !has_starting(Position::is_defender) {
            issues.push(LineupIssue::MissingPosition(Position::Defender));
        }
        if !has_starting(Position::is_midfielder) {
            issues.push(LineupIssue::MissingPosition(Position::Midfielder));
        }
        if !has_starting(Position::is_forward) {
            issues.push(LineupIssue::MissingPosition(Position::Forward));
        }

        let mut ids: Vec<&str> = self.players.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        if ids.len() != self.players.len() {
            issues.push(LineupIssue::DuplicateIds);
        }

        issues
    }

    pub fn count_with_status(&self, status: SquadStatus) -> usize {
        self.players.iter().filter(|p| p.squad_status == status).count()
    }
}

/// Opponent as seen by the engine: only an aggregate rating is simulated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Opponent {
    pub name: String,
    #[serde(default = "default_opponent_rating")]
    pub rating: u8,
    #[serde(default)]
    pub formation: Formation,
}

fn default_opponent_rating() -> u8 {
    DEFAULT_OPPONENT_RATING
}

impl Opponent {
    pub fn new(name: impl Into<String>, rating: u8) -> Self {
        Self { name: name.into(), rating, formation: Formation::default() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineupIssue {
    StarterCount { expected: usize, found: usize },
    MissingPosition(Position),
    DuplicateIds,
}

impl std::fmt::Display for LineupIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            LineupIssue::StarterCount { expected, found } => {
                write!(f, "expected {} starters, found {}", expected, found)
            }
            LineupIssue::MissingPosition(position) => {
                write!(f, "no starting {}", position.code())
            }
            LineupIssue::DuplicateIds => write!(f, "duplicate player ids"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::demo_squad as squad;

    #[test]
    fn test_valid_squad_has_no_issues() {
        let team = squad("Home", 75);
        assert_eq!(team.starter_count(), STARTING_COUNT);
        assert!(team.lineup_issues().is_empty(), "{:?}", team.lineup_issues());
    }

    #[test]
    fn test_rating_derived_from_starters() {
        let mut team = squad("Home", 80);
        assert_eq!(team.overall_rating(), 80);
        team.rating = Some(66);
        assert_eq!(team.overall_rating(), 66);
    }

    #[test]
    fn test_empty_team_uses_default_rating() {
        let team = Team::new("Nobody", Vec::new());
        assert_eq!(team.overall_rating(), DEFAULT_TEAM_RATING);
        let issues = team.lineup_issues();
        assert!(issues.contains(&LineupIssue::StarterCount { expected: 11, found: 0 }));
        assert!(issues.contains(&LineupIssue::MissingPosition(Position::Goalkeeper)));
    }

    #[test]
    fn test_opponent_rating_defaults() {
        let opponent: Opponent = serde_json::from_str(r#"{"name":"Rivals"}"#).unwrap();
        assert_eq!(opponent.rating, DEFAULT_OPPONENT_RATING);
        assert_eq!(opponent.formation, Formation::F442);
    }
}
