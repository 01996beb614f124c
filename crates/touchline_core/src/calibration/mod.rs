//! Seeded batch runs for balance tuning.
//!
//! Each seed plays an independent match; results are collected in seed order
//! so a batch is as reproducible as a single match.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::engine::{EngineConfig, MatchSession};
use crate::models::{MatchStatistics, Opponent, Team};

/// Below this many seeds the thread pool costs more than it saves.
const PARALLEL_THRESHOLD: usize = 16;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchSample {
    pub seed: u64,
    pub statistics: MatchStatistics,
    pub average_condition: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BatchSummary {
    pub matches: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub avg_goals_for: f32,
    pub avg_goals_against: f32,
    pub avg_shots_for: f32,
    pub avg_shots_against: f32,
    pub avg_xg_for: f32,
    pub avg_xg_against: f32,
    pub avg_possession: f32,
    /// Mean end-of-match condition of the final eleven.
    pub avg_final_condition: f32,
}

pub fn run_match(team: &Team, opponent: &Opponent, config: &EngineConfig, seed: u64) -> MatchSample {
    let mut session = MatchSession::with_seed(team, opponent, config.clone(), seed);
    if let Err(err) = session.run_to_full_time() {
        warn!(seed, %err, "batch match stopped early");
    }
    let outcome = session.finalize();
    MatchSample {
        seed,
        statistics: outcome.statistics,
        average_condition: session.live_team().average_starter_condition(),
    }
}

pub fn run_samples(
    team: &Team,
    opponent: &Opponent,
    config: &EngineConfig,
    seeds: &[u64],
) -> Vec<MatchSample> {
    if seeds.len() > PARALLEL_THRESHOLD {
        seeds.par_iter().map(|&seed| run_match(team, opponent, config, seed)).collect()
    } else {
        seeds.iter().map(|&seed| run_match(team, opponent, config, seed)).collect()
    }
}

pub fn run_batch(
    team: &Team,
    opponent: &Opponent,
    config: &EngineConfig,
    seeds: &[u64],
) -> BatchSummary {
    let summary = summarize(&run_samples(team, opponent, config, seeds));
    info!(
        matches = summary.matches,
        wins = summary.wins,
        draws = summary.draws,
        losses = summary.losses,
        avg_goals_for = summary.avg_goals_for,
        avg_goals_against = summary.avg_goals_against,
        "batch complete"
    );
    summary
}

pub fn summarize(samples: &[MatchSample]) -> BatchSummary {
    if samples.is_empty() {
        return BatchSummary::default();
    }

    let mut summary = BatchSummary { matches: samples.len(), ..BatchSummary::default() };
    for sample in samples {
        let s = &sample.statistics;
        match s.home_score.cmp(&s.away_score) {
            std::cmp::Ordering::Greater => summary.wins += 1,
            std::cmp::Ordering::Equal => summary.draws += 1,
            std::cmp::Ordering::Less => summary.losses += 1,
        }
        summary.avg_goals_for += s.home_score as f32;
        summary.avg_goals_against += s.away_score as f32;
        summary.avg_shots_for += s.shots_home as f32;
        summary.avg_shots_against += s.shots_away as f32;
        summary.avg_xg_for += s.xg_home;
        summary.avg_xg_against += s.xg_away;
        summary.avg_possession += s.possession as f32;
        summary.avg_final_condition += sample.average_condition;
    }

    let n = samples.len() as f32;
    for avg in [
        &mut summary.avg_goals_for,
        &mut summary.avg_goals_against,
        &mut summary.avg_shots_for,
        &mut summary.avg_shots_against,
        &mut summary.avg_xg_for,
        &mut summary.avg_xg_against,
        &mut summary.avg_possession,
        &mut summary.avg_final_condition,
    ] {
        *avg /= n;
    }
    summary
}
