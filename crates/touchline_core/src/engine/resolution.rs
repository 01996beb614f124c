//! One minute of zone resolution.
//!
//! Each call resolves exactly one transition for the current zone, credits
//! possession to exactly one side and appends at most one commentary event.
//! Momentum decay, fatigue and the minute counter belong to the session.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::info;

use super::config::EngineConfig;
use super::probability::{contest, duel, finish, sample_xg, spread, DuelOutcome};
use super::selection;
use super::state::MatchState;
use super::zone::{Side, Zone};
use crate::models::{MatchEvent, Opponent, Team};
use crate::tactics::Tactics;

/// What the minute amounted to.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Transition {
    /// Midfield won, ball moved into a final third.
    Advance,
    /// Attacker kept the ball in the final third.
    Pressure,
    /// Defender won the ball, back to midfield.
    Turnover,
    /// Shot saved or missed.
    Shot,
    Goal,
}

/// Both sides as the resolver sees them.
pub struct Pitch<'a> {
    pub team: &'a Team,
    pub opponent: &'a Opponent,
    pub opponent_tactics: &'a Tactics,
}

impl Pitch<'_> {
    fn name(&self, side: Side) -> &str {
        match side {
            Side::Home => &self.team.name,
            Side::Away => &self.opponent.name,
        }
    }

    fn tactics(&self, side: Side) -> &Tactics {
        match side {
            Side::Home => &self.team.tactics,
            Side::Away => self.opponent_tactics,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub transition: Transition,
    /// Side credited with this minute's possession tick.
    pub credited: Side,
    pub event: Option<MatchEvent>,
}

/// Resolve the minute that is about to be played (`state.minute + 1`).
pub fn resolve_minute<R: Rng>(
    state: &mut MatchState,
    pitch: &Pitch<'_>,
    config: &EngineConfig,
    rng: &mut R,
) -> Resolution {
    let resolution = match state.zone.attacking_side() {
        None => midfield(state, pitch, config, rng),
        Some(attacker) => final_third(state, pitch, config, rng, attacker),
    };

    *state.possession_ticks.get_mut(resolution.credited) += 1;
    if let Some(event) = &resolution.event {
        state.events.push(event.clone());
    }
    resolution
}

fn midfield<R: Rng>(
    state: &mut MatchState,
    pitch: &Pitch<'_>,
    config: &EngineConfig,
    rng: &mut R,
) -> Resolution {
    let minute = state.minute + 1;
    let home_on_ball = state.possession == Side::Home;
    let playmaker = selection::playmaker(pitch.team, &config.fatigue);

    let home = playmaker.quality
        + pitch.team.tactics.midfield_bonus(home_on_ball, rng)
        + state.momentum.contribution(Side::Home);
    let away = pitch.opponent.rating as f32
        + pitch.opponent_tactics.midfield_bonus(!home_on_ball, rng)
        + state.momentum.contribution(Side::Away);

    let winner = if contest(rng, home, away) { Side::Home } else { Side::Away };
    state.zone = state.zone.advance(winner);
    state.possession = winner;
    state.momentum.nudge(winner, config.momentum.midfield_win_nudge);

    let description = match winner {
        Side::Home => line(
            rng,
            &[
                "{p} threads a pass through midfield.",
                "{p} carries the ball past the press.",
                "{p} switches play and {t} push forward.",
            ],
            playmaker.name,
            &pitch.team.name,
        ),
        Side::Away => line(
            rng,
            &[
                "{t} win the midfield battle, {p} is bypassed.",
                "{p} is dispossessed and {t} break.",
                "{t} cut out a pass from {p}.",
            ],
            playmaker.name,
            &pitch.opponent.name,
        ),
    };

    Resolution {
        transition: Transition::Advance,
        credited: winner,
        event: Some(MatchEvent::normal(minute, pitch.name(winner), description)),
    }
}

fn final_third<R: Rng>(
    state: &mut MatchState,
    pitch: &Pitch<'_>,
    config: &EngineConfig,
    rng: &mut R,
    attacker: Side,
) -> Resolution {
    let minute = state.minute + 1;
    let defender = attacker.opponent();
    let chance = &config.chance;

    let (attack, defense, duelist) = match attacker {
        Side::Home => {
            let creator = selection::creator(pitch.team, &config.fatigue);
            let attack = creator.quality + pitch.team.tactics.attacking_bonus();
            let defense = pitch.opponent.rating as f32
                + pitch.opponent_tactics.defending_bonus()
                + spread(rng, chance.opponent_defense_variance);
            (attack, defense, creator.name)
        }
        Side::Away => {
            let stopper = selection::defender(pitch.team, &config.fatigue);
            let attack = pitch.opponent.rating as f32
                + pitch.opponent_tactics.attacking_bonus()
                + spread(rng, chance.opponent_attack_variance);
            let defense = stopper.quality + pitch.team.tactics.defending_bonus();
            (attack, defense, stopper.name)
        }
    };

    match duel(rng, attack, defense, chance) {
        DuelOutcome::Shot => shot(state, pitch, config, rng, attacker),
        DuelOutcome::Defended => {
            state.zone = Zone::Midfield;
            state.possession = defender;
            state.momentum.nudge(defender, config.momentum.defensive_win_nudge);
            let description = match defender {
                Side::Home => line(
                    rng,
                    &["{p} times the tackle perfectly.", "{p} reads it and clears the danger."],
                    duelist,
                    &pitch.team.name,
                ),
                Side::Away => line(
                    rng,
                    &["{t} crowd out {p} and clear.", "{p} runs into a wall of {t} shirts."],
                    duelist,
                    &pitch.opponent.name,
                ),
            };
            Resolution {
                transition: Transition::Turnover,
                credited: attacker,
                event: Some(MatchEvent::normal(minute, pitch.name(defender), description)),
            }
        }
        DuelOutcome::Pressure => {
            state.possession = attacker;
            let description = match attacker {
                Side::Home => line(
                    rng,
                    &["{p} probes around the box.", "{t} keep recycling the ball on the edge."],
                    duelist,
                    &pitch.team.name,
                ),
                Side::Away => line(
                    rng,
                    &["{t} pin {p} back in the box.", "{t} keep the pressure on."],
                    duelist,
                    &pitch.opponent.name,
                ),
            };
            Resolution {
                transition: Transition::Pressure,
                credited: attacker,
                event: Some(MatchEvent::normal(minute, pitch.name(attacker), description)),
            }
        }
    }
}

fn shot<R: Rng>(
    state: &mut MatchState,
    pitch: &Pitch<'_>,
    config: &EngineConfig,
    rng: &mut R,
    attacker: Side,
) -> Resolution {
    let minute = state.minute + 1;
    let defender = attacker.opponent();
    let chance = &config.chance;

    *state.shots.get_mut(attacker) += 1;
    *state.xg.get_mut(attacker) += sample_xg(rng, chance);

    let rating = pitch.opponent.rating as f32;
    let (shooter_name, shooter, keeper_name, keeper) = match attacker {
        Side::Home => {
            let s = selection::shooter(pitch.team, &config.fatigue);
            (s.name, s.quality, pitch.opponent.name.as_str(), rating)
        }
        Side::Away => {
            let k = selection::keeper(pitch.team, &config.fatigue);
            (pitch.opponent.name.as_str(), rating, k.name, k.quality)
        }
    };
    let shooter = shooter + spread(rng, chance.finishing_variance);
    let keeper = keeper + spread(rng, chance.finishing_variance);

    if finish(rng, shooter, keeper, chance) {
        let goals = state.score.get_mut(attacker);
        *goals = goals.saturating_add(1);
        state.zone = Zone::Midfield;
        state.possession = defender;
        state.momentum.spike(attacker, config.momentum.goal_spike);

        let team = pitch.name(attacker);
        info!(minute, team, scorer = shooter_name, home = state.score.home, away = state.score.away, "goal");
        let description = match attacker {
            Side::Home => format!(
                "GOAL! {shooter_name} scores for {team}! ({}-{})",
                state.score.home, state.score.away
            ),
            Side::Away => format!(
                "GOAL! {team} score past {keeper_name}. ({}-{})",
                state.score.home, state.score.away
            ),
        };
        return Resolution {
            transition: Transition::Goal,
            credited: attacker,
            event: Some(MatchEvent::goal(minute, team, description)),
        };
    }

    state.zone = state.zone.regress(attacker);
    state.possession = defender;
    state.momentum.nudge(defender, config.momentum.missed_chance_nudge);

    let on_target = shooter > keeper;
    let description = match (attacker, on_target) {
        (Side::Home, true) => format!("{shooter_name} shoots, saved by the {keeper_name} keeper!"),
        (Side::Home, false) => format!("{shooter_name} shoots... just wide!"),
        (Side::Away, true) => format!("{shooter_name} shoot, {keeper_name} makes the save!"),
        (Side::Away, false) => format!("{shooter_name} shoot and it flies over the bar."),
    };
    Resolution {
        transition: Transition::Shot,
        credited: attacker,
        event: Some(MatchEvent::chance(minute, pitch.name(attacker), description)),
    }
}

fn line(rng: &mut impl Rng, templates: &[&str], player: &str, team: &str) -> String {
    templates
        .choose(rng)
        .map(|t| t.replace("{p}", player).replace("{t}", team))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::demo_squad;
    use crate::models::EventType;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Shots always come and always go in when the defence has zero strength.
    fn sure_goal_config() -> EngineConfig {
        let mut cfg = EngineConfig::deterministic();
        cfg.chance.shot_share = 1.0;
        cfg.chance.finishing_factor = 1.0;
        cfg
    }

    #[test]
    fn test_home_goal_resets_zone_and_flips_possession() {
        let team = demo_squad("Home", 80);
        let opponent = Opponent::new("Away", 0);
        let tactics = Tactics::default();
        let pitch = Pitch { team: &team, opponent: &opponent, opponent_tactics: &tactics };
        let cfg = sure_goal_config();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let mut state = MatchState::kick_off(&cfg);
        state.zone = Zone::Attack;
        state.possession = Side::Home;

        let res = resolve_minute(&mut state, &pitch, &cfg, &mut rng);
        assert_eq!(res.transition, Transition::Goal);
        assert_eq!(state.score.home, 1);
        assert_eq!(state.shots.home, 1);
        assert!(state.xg.home > 0.0);
        assert_eq!(state.zone, Zone::Midfield);
        assert_eq!(state.possession, Side::Away);
        assert_eq!(state.momentum.value(), 75.0);
        assert_eq!(state.events.last().map(|e| e.event_type), Some(EventType::Goal));
        assert_eq!(state.events[0].minute, 1);
    }

    #[test]
    fn test_away_goal_mirrors_home_goal() {
        let team = demo_squad("Home", 0);
        let opponent = Opponent::new("Away", 80);
        let tactics = Tactics::default();
        let pitch = Pitch { team: &team, opponent: &opponent, opponent_tactics: &tactics };
        let cfg = sure_goal_config();
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        let mut state = MatchState::kick_off(&cfg);
        state.zone = Zone::Defense;
        state.possession = Side::Away;

        let res = resolve_minute(&mut state, &pitch, &cfg, &mut rng);
        assert_eq!(res.transition, Transition::Goal);
        assert_eq!(state.score.away, 1);
        assert_eq!(state.zone, Zone::Midfield);
        assert_eq!(state.possession, Side::Home);
        assert_eq!(state.momentum.value(), 25.0);
        assert_eq!(state.possession_ticks.away, 1);
    }

    #[test]
    fn test_midfield_always_moves_the_ball() {
        let team = demo_squad("Home", 75);
        let opponent = Opponent::new("Away", 75);
        let tactics = Tactics::default();
        let pitch = Pitch { team: &team, opponent: &opponent, opponent_tactics: &tactics };
        let cfg = EngineConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        for _ in 0..200 {
            let mut state = MatchState::kick_off(&cfg);
            let res = resolve_minute(&mut state, &pitch, &cfg, &mut rng);
            assert_eq!(res.transition, Transition::Advance);
            let expected = match res.credited {
                Side::Home => Zone::Attack,
                Side::Away => Zone::Defense,
            };
            assert_eq!(state.zone, expected);
            assert_eq!(state.possession, res.credited);
            assert_eq!(*state.possession_ticks.get(res.credited), 1);
        }
    }

    #[test]
    fn test_missed_chance_goes_back_to_midfield() {
        let team = demo_squad("Home", 60);
        let opponent = Opponent::new("Away", 99);
        let tactics = Tactics::default();
        let pitch = Pitch { team: &team, opponent: &opponent, opponent_tactics: &tactics };
        let mut cfg = EngineConfig::deterministic();
        cfg.chance.shot_share = 1.0;
        cfg.chance.clear_share = 0.0;
        cfg.chance.finishing_factor = 0.01;
        let mut rng = ChaCha8Rng::seed_from_u64(4);

        let mut misses = 0;
        for _ in 0..100 {
            let mut state = MatchState::kick_off(&cfg);
            state.zone = Zone::Attack;
            let res = resolve_minute(&mut state, &pitch, &cfg, &mut rng);
            if res.transition == Transition::Shot {
                misses += 1;
                assert_eq!(state.zone, Zone::Midfield);
                assert_eq!(state.possession, Side::Away);
                assert_eq!(state.momentum.value(), 45.0);
                assert_eq!(state.events[0].event_type, EventType::Chance);
            }
        }
        assert!(misses > 0);
    }

    #[test]
    fn test_every_minute_credits_exactly_one_side() {
        let team = demo_squad("Home", 75);
        let opponent = Opponent::new("Away", 75);
        let tactics = Tactics::default();
        let pitch = Pitch { team: &team, opponent: &opponent, opponent_tactics: &tactics };
        let cfg = EngineConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let mut state = MatchState::kick_off(&cfg);
        for n in 1..=90u32 {
            resolve_minute(&mut state, &pitch, &cfg, &mut rng);
            state.minute += 1;
            assert_eq!(state.possession_ticks.home + state.possession_ticks.away, n);
        }
    }
}
