//! Live match session.
//!
//! Pull-based orchestration: the caller decides when a minute passes by
//! calling [`MatchSession::advance_minute`]. Nothing here knows about wall
//! clock time, so a UI timer, a fast-forward loop and a test harness all
//! produce the same match for the same seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::config::EngineConfig;
use super::fatigue;
use super::resolution::{resolve_minute, Pitch, Transition};
use super::state::MatchState;
use super::substitutions::SubstitutionLedger;
use super::zone::{Side, Zone};
use crate::error::SessionError;
use crate::models::{MatchEvent, MatchStatistics, Opponent, Player, Team};
use crate::tactics::{Formation, TacticChange, Tactics};

// ============================================
// Phase and per-call results
// ============================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchPhase {
    NotStarted,
    Playing,
    Paused,
    /// Terminal. Only finalize is accepted.
    FullTime,
}

/// Result of one `advance_minute` call.
#[derive(Debug, Clone, PartialEq)]
pub enum StepResult {
    /// `start` has not been called yet.
    NotStarted,
    /// Paused: nothing was resolved.
    Paused,
    /// A minute was resolved.
    Minute(MinuteReport),
    /// Regulation time is over.
    FullTime,
    /// The session was finalized before full time.
    Finalized,
}

/// What happened in one resolved minute.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MinuteReport {
    pub minute: u8,
    pub transition: Transition,
    pub zone: Zone,
    pub possession: Side,
    pub momentum: f32,
    pub score: (u8, u8),
    pub event: Option<MatchEvent>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MomentumSample {
    pub minute: u8,
    pub value: f32,
}

/// Handoff to the caller at the end of a match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchOutcome {
    pub statistics: MatchStatistics,
    /// The live roster, conditions updated, statuses as they ended the match.
    pub players: Vec<Player>,
    /// Ids of every player who started or came on.
    pub appearances: Vec<String>,
    pub minutes_played: u8,
    /// False when the match was abandoned before minute 90.
    pub completed: bool,
}

// ============================================
// MatchSession
// ============================================

/// One match between the manager's team and an abstract opponent.
///
/// The session owns a snapshot of the team taken at construction; the
/// caller's copy is never touched.
pub struct MatchSession<R: Rng = ChaCha8Rng> {
    team: Team,
    opponent: Opponent,
    opponent_tactics: Tactics,
    config: EngineConfig,
    rng: R,
    phase: MatchPhase,
    state: MatchState,
    ledger: SubstitutionLedger,
    momentum_timeline: Vec<MomentumSample>,
    outcome: Option<MatchOutcome>,
}

impl MatchSession<ChaCha8Rng> {
    pub fn with_seed(team: &Team, opponent: &Opponent, config: EngineConfig, seed: u64) -> Self {
        Self::new(team, opponent, config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> MatchSession<R> {
    pub fn new(team: &Team, opponent: &Opponent, config: EngineConfig, rng: R) -> Self {
        for issue in team.lineup_issues() {
            warn!(team = %team.name, %issue, "lineup issue, fallback selection will be used");
        }

        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                warn!(%err, "engine config rejected, using defaults");
                EngineConfig::default()
            }
        };

        let mut team = team.clone();
        for player in &mut team.players {
            player.condition = player.clamped_condition();
        }

        let state = MatchState::kick_off(&config);
        Self {
            ledger: SubstitutionLedger::from_lineup(&team),
            team,
            opponent: opponent.clone(),
            opponent_tactics: Tactics { formation: opponent.formation, ..Tactics::default() },
            config,
            rng,
            phase: MatchPhase::NotStarted,
            state,
            momentum_timeline: Vec::new(),
            outcome: None,
        }
    }

    // =========================================================================
    // Read-only projections
    // =========================================================================

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn minute(&self) -> u8 {
        self.state.minute
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn live_team(&self) -> &Team {
        &self.team
    }

    pub fn opponent(&self) -> &Opponent {
        &self.opponent
    }

    pub fn live_statistics(&self) -> MatchStatistics {
        self.state.statistics(&self.team.name, &self.opponent.name)
    }

    pub fn events(&self) -> &[MatchEvent] {
        &self.state.events
    }

    /// Events appended after `cursor` (a previous `events().len()`).
    pub fn events_since(&self, cursor: usize) -> &[MatchEvent] {
        let start = cursor.min(self.state.events.len());
        &self.state.events[start..]
    }

    pub fn momentum_timeline(&self) -> &[MomentumSample] {
        &self.momentum_timeline
    }

    pub fn is_finalized(&self) -> bool {
        self.outcome.is_some()
    }

    // =========================================================================
    // Phase control
    // =========================================================================

    /// Kick off, or resume after a pause.
    pub fn start(&mut self) -> Result<(), SessionError> {
        self.ensure_open()?;
        match self.phase {
            MatchPhase::NotStarted => {
                info!(home = %self.team.name, away = %self.opponent.name, "kick-off");
                self.phase = MatchPhase::Playing;
                Ok(())
            }
            MatchPhase::Paused => {
                debug!(minute = self.state.minute, "resumed");
                self.phase = MatchPhase::Playing;
                Ok(())
            }
            phase => Err(SessionError::InvalidTransition { action: "start", phase }),
        }
    }

    pub fn pause(&mut self) -> Result<(), SessionError> {
        self.ensure_open()?;
        match self.phase {
            MatchPhase::Playing => {
                debug!(minute = self.state.minute, "paused");
                self.phase = MatchPhase::Paused;
                Ok(())
            }
            phase => Err(SessionError::InvalidTransition { action: "pause", phase }),
        }
    }

    /// Resolve exactly one minute if playing; report the phase otherwise.
    pub fn advance_minute(&mut self) -> StepResult {
        if self.outcome.is_some() {
            return StepResult::Finalized;
        }
        match self.phase {
            MatchPhase::NotStarted => StepResult::NotStarted,
            MatchPhase::Paused => StepResult::Paused,
            MatchPhase::FullTime => StepResult::FullTime,
            MatchPhase::Playing => StepResult::Minute(self.play_minute()),
        }
    }

    /// Fast-forward: start or resume, then play every remaining minute.
    pub fn run_to_full_time(&mut self) -> Result<(), SessionError> {
        if self.outcome.is_some() {
            return Err(SessionError::Finalized);
        }
        if self.phase == MatchPhase::FullTime {
            return Ok(());
        }
        if self.phase != MatchPhase::Playing {
            self.start()?;
        }
        while let StepResult::Minute(_) = self.advance_minute() {}
        Ok(())
    }

    fn play_minute(&mut self) -> MinuteReport {
        self.state.momentum.decay(self.config.momentum.decay_step);

        let pitch = Pitch {
            team: &self.team,
            opponent: &self.opponent,
            opponent_tactics: &self.opponent_tactics,
        };
        let resolution = resolve_minute(&mut self.state, &pitch, &self.config, &mut self.rng);
        fatigue::apply_minute(&mut self.team, &self.config.fatigue, &mut self.rng);

        self.state.minute += 1;
        let minute = self.state.minute;
        let momentum = self.state.momentum.value();
        self.momentum_timeline.push(MomentumSample { minute, value: momentum });

        debug!(
            minute,
            transition = ?resolution.transition,
            zone = ?self.state.zone,
            possession = ?self.state.possession,
            momentum,
            "minute resolved"
        );

        if self.state.is_full_time() {
            self.phase = MatchPhase::FullTime;
            info!(
                home = %self.team.name,
                away = %self.opponent.name,
                home_score = self.state.score.home,
                away_score = self.state.score.away,
                "full time"
            );
        }

        MinuteReport {
            minute,
            transition: resolution.transition,
            zone: self.state.zone,
            possession: self.state.possession,
            momentum,
            score: (self.state.score.home, self.state.score.away),
            event: resolution.event,
        }
    }

    // =========================================================================
    // Manager commands
    // =========================================================================

    /// Swap a bench player for a starter. Takes effect from the next minute.
    pub fn substitute(&mut self, bench_id: &str, on_field_id: &str) -> Result<(), SessionError> {
        self.ensure_open()?;
        match self.ledger.apply(&mut self.team, &mut self.state, bench_id, on_field_id) {
            Ok(event) => {
                info!(minute = self.state.minute, "{}", event.description);
                Ok(())
            }
            Err(err) => {
                warn!(bench_id, on_field_id, error = %err, "substitution rejected");
                Err(err.into())
            }
        }
    }

    /// Overwrite one tactics field on the live team.
    pub fn change_tactic(&mut self, change: TacticChange) -> Result<(), SessionError> {
        self.ensure_open()?;
        let description = self.team.tactics.apply(change);
        let text = format!("{} {}.", self.team.name, description);
        debug!(minute = self.state.minute, "{}", text);
        self.state.events.push(MatchEvent::normal(self.state.minute, &self.team.name, text));
        Ok(())
    }

    pub fn change_formation(&mut self, formation: Formation) -> Result<(), SessionError> {
        self.change_tactic(TacticChange::Formation(formation))
    }

    // =========================================================================
    // Finalization
    // =========================================================================

    /// Reduce the session into the caller handoff. Valid in any phase; the
    /// first result is cached and every later call returns it unchanged.
    pub fn finalize(&mut self) -> MatchOutcome {
        if let Some(outcome) = &self.outcome {
            return outcome.clone();
        }

        let completed = self.phase == MatchPhase::FullTime;
        if !completed {
            warn!(minute = self.state.minute, "match finalized before full time");
        }
        let outcome = MatchOutcome {
            statistics: self.live_statistics(),
            players: self.team.players.clone(),
            appearances: self.ledger.appearances().to_vec(),
            minutes_played: self.state.minute,
            completed,
        };
        self.outcome = Some(outcome.clone());
        outcome
    }

    fn ensure_open(&self) -> Result<(), SessionError> {
        if self.outcome.is_some() {
            Err(SessionError::Finalized)
        } else if self.phase == MatchPhase::FullTime {
            Err(SessionError::MatchOver)
        } else {
            Ok(())
        }
    }
}
