//! Picking the player who takes part in each roll.
//!
//! Only current starters are eligible. Each role walks a list of position
//! tiers and takes the best effective value in the first non-empty tier,
//! then any starter, then a stand-in rated at the team's overall rating so
//! a malformed roster never stops a match.
//!
//! An explicit `Team::rating` pulls every picked player's quality halfway
//! toward it; a derived rating leaves player quality alone.

use tracing::warn;

use super::config::FatigueConfig;
use crate::models::{Attribute, Player, Position, Team};

/// The player chosen for a roll and their fatigue-adjusted quality.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<'a> {
    pub name: &'a str,
    pub quality: f32,
    /// True when no starter was available and the team stood in.
    pub stand_in: bool,
}

/// Attribute multiplier for a given condition. 1.0 at or above the
/// threshold, falling linearly to `1 - penalty_weight` at zero.
pub fn fatigue_factor(condition: f32, cfg: &FatigueConfig) -> f32 {
    if cfg.penalty_threshold <= 0.0 {
        return 1.0;
    }
    let condition = if condition.is_finite() { condition.clamp(0.0, 100.0) } else { 100.0 };
    let shortfall = (cfg.penalty_threshold - condition).max(0.0);
    1.0 - cfg.penalty_weight * shortfall / cfg.penalty_threshold
}

/// Weighted attribute blend scaled by fatigue.
pub fn effective(player: &Player, weights: &[(Attribute, f32)], cfg: &FatigueConfig) -> f32 {
    let raw: f32 = weights
        .iter()
        .map(|(attr, weight)| player.attributes.get(*attr) as f32 * weight)
        .sum();
    raw * fatigue_factor(player.clamped_condition(), cfg)
}

const PLAYMAKING: &[(Attribute, f32)] = &[(Attribute::Passing, 0.6), (Attribute::Dribbling, 0.4)];
const CREATING: &[(Attribute, f32)] = &[(Attribute::Passing, 0.5), (Attribute::Dribbling, 0.5)];
const FINISHING: &[(Attribute, f32)] = &[(Attribute::Shooting, 1.0)];
const DEFENDING: &[(Attribute, f32)] = &[(Attribute::Defending, 0.7), (Attribute::Physical, 0.3)];

type Tier = fn(&Position) -> bool;

/// Midfield contest: best midfielder by passing/dribbling.
pub fn playmaker<'a>(team: &'a Team, cfg: &FatigueConfig) -> Candidate<'a> {
    best_of(team, &[Position::is_midfielder, Position::is_forward], PLAYMAKING, cfg)
}

/// Final-third creator: best midfielder or forward by passing + dribbling.
pub fn creator<'a>(team: &'a Team, cfg: &FatigueConfig) -> Candidate<'a> {
    best_of(team, &[|p: &Position| p.is_midfielder() || p.is_forward()], CREATING, cfg)
}

pub fn shooter<'a>(team: &'a Team, cfg: &FatigueConfig) -> Candidate<'a> {
    best_of(team, &[Position::is_forward, Position::is_midfielder], FINISHING, cfg)
}

pub fn defender<'a>(team: &'a Team, cfg: &FatigueConfig) -> Candidate<'a> {
    best_of(team, &[Position::is_defender, Position::is_goalkeeper], DEFENDING, cfg)
}

/// Keeper quality is the overall rating; an outfield stand-in uses defending.
pub fn keeper<'a>(team: &'a Team, cfg: &FatigueConfig) -> Candidate<'a> {
    let keeper = team
        .starters()
        .filter(|p| p.position.is_goalkeeper())
        .map(|p| Candidate {
            name: p.name.as_str(),
            quality: p.overall.min(99) as f32 * fatigue_factor(p.clamped_condition(), cfg),
            stand_in: false,
        })
        .max_by(|a, b| a.quality.total_cmp(&b.quality));

    match keeper {
        Some(candidate) => with_team_rating(team, candidate),
        None => best_of(team, &[Position::is_defender], DEFENDING, cfg),
    }
}

fn with_team_rating<'a>(team: &Team, mut candidate: Candidate<'a>) -> Candidate<'a> {
    if let Some(rating) = team.rating {
        candidate.quality = (candidate.quality + rating.min(99) as f32) / 2.0;
    }
    candidate
}

fn best_of<'a>(
    team: &'a Team,
    tiers: &[Tier],
    weights: &[(Attribute, f32)],
    cfg: &FatigueConfig,
) -> Candidate<'a> {
    let pick = |filter: &dyn Fn(&Player) -> bool| {
        team.starters()
            .filter(|p| filter(p))
            .map(|p| Candidate {
                name: p.name.as_str(),
                quality: effective(p, weights, cfg),
                stand_in: false,
            })
            .max_by(|a, b| a.quality.total_cmp(&b.quality))
    };

    for tier in tiers {
        if let Some(candidate) = pick(&|p: &Player| tier(&p.position)) {
            return with_team_rating(team, candidate);
        }
    }
    if let Some(candidate) = pick(&|_: &Player| true) {
        return with_team_rating(team, candidate);
    }

    warn!(team = %team.name, "no eligible starter, using team stand-in");
    Candidate { name: team.name.as_str(), quality: team.overall_rating() as f32, stand_in: true }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::demo_squad;
    use crate::models::{PlayerAttributes, SquadStatus};

    #[test]
    fn test_fatigue_factor_curve() {
        let cfg = FatigueConfig::default();
        assert_eq!(fatigue_factor(100.0, &cfg), 1.0);
        assert_eq!(fatigue_factor(90.0, &cfg), 1.0);
        assert!((fatigue_factor(45.0, &cfg) - 0.75).abs() < 1e-6);
        assert!((fatigue_factor(0.0, &cfg) - 0.5).abs() < 1e-6);
        assert!(fatigue_factor(60.0, &cfg) < fatigue_factor(80.0, &cfg));
    }

    #[test]
    fn test_playmaker_prefers_best_midfielder() {
        let mut team = demo_squad("Home", 70);
        let idx = team.players.iter().position(|p| p.position.is_midfielder()).unwrap();
        team.players[idx].attributes = PlayerAttributes { passing: 95, dribbling: 90, ..team.players[idx].attributes };
        let name = team.players[idx].name.clone();

        let pick = playmaker(&team, &FatigueConfig::default());
        assert_eq!(pick.name, name);
        assert!((pick.quality - (95.0 * 0.6 + 90.0 * 0.4)).abs() < 1e-4);
        assert!(!pick.stand_in);
    }

    #[test]
    fn test_tired_star_loses_to_fresh_teammate() {
        let mut team = demo_squad("Home", 70);
        let fwd: Vec<usize> = team
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_starting() && p.position.is_forward())
            .map(|(i, _)| i)
            .collect();
        team.players[fwd[0]].attributes.shooting = 80;
        team.players[fwd[0]].condition = 10.0;
        team.players[fwd[1]].attributes.shooting = 72;

        let pick = shooter(&team, &FatigueConfig::default());
        assert_eq!(pick.name, team.players[fwd[1]].name);
    }

    #[test]
    fn test_bench_players_are_ignored() {
        let mut team = demo_squad("Home", 60);
        for p in team.players.iter_mut().filter(|p| p.is_substitute()) {
            p.attributes = PlayerAttributes::uniform(99);
        }
        let pick = creator(&team, &FatigueConfig::default());
        assert!((pick.quality - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_missing_keeper_falls_back_to_defender() {
        let mut team = demo_squad("Home", 70);
        team.players[0].squad_status = SquadStatus::Reserve;
        let pick = keeper(&team, &FatigueConfig::default());
        assert!(!pick.stand_in);
        let picked = team.players.iter().find(|p| p.name == pick.name).unwrap();
        assert!(picked.position.is_defender());
    }

    #[test]
    fn test_explicit_rating_pulls_quality_toward_it() {
        let mut team = demo_squad("Home", 60);
        let cfg = FatigueConfig::default();
        let derived = creator(&team, &cfg).quality;

        team.rating = Some(95);
        let pick = creator(&team, &cfg);
        assert!((pick.quality - (derived + 95.0) / 2.0).abs() < 1e-4);
        assert!(keeper(&team, &cfg).quality > 60.0);
    }

    #[test]
    fn test_empty_roster_uses_stand_in() {
        let team = Team::new("Ghosts", Vec::new());
        let cfg = FatigueConfig::default();
        for pick in [playmaker(&team, &cfg), shooter(&team, &cfg), keeper(&team, &cfg)] {
            assert!(pick.stand_in);
            assert_eq!(pick.name, "Ghosts");
            assert_eq!(pick.quality, 75.0);
        }
    }
}
