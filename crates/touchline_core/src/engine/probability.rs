//! Random draws used by the zone resolution.
//!
//! Every contest is a single uniform draw against a combined-strength
//! interval. There is no tie state: equal strengths are a coin flip.

use rand::Rng;

use super::config::ChanceConfig;

/// Uniform in `[0, max)`, or 0 without drawing when `max` is not positive.
pub fn spread(rng: &mut impl Rng, max: f32) -> f32 {
    if max > 0.0 && max.is_finite() {
        rng.gen_range(0.0..max)
    } else {
        0.0
    }
}

/// True when the first side wins a draw over `[0, a + b)`.
pub fn contest(rng: &mut impl Rng, a: f32, b: f32) -> bool {
    let a = a.max(0.0);
    let b = b.max(0.0);
    let total = a + b;
    if total <= 0.0 || !total.is_finite() {
        return rng.gen_bool(0.5);
    }
    rng.gen_range(0.0..total) < a
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuelOutcome {
    /// Attacker works a shot.
    Shot,
    /// Defender wins the ball.
    Defended,
    /// Neither: attacker keeps the ball in the final third.
    Pressure,
}

/// Final-third duel. One draw over `[0, attack + defense)`: the low end of
/// the attacker's interval is a shot, the high end of the defender's
/// interval is a turnover, the middle is sustained pressure.
pub fn duel(rng: &mut impl Rng, attack: f32, defense: f32, cfg: &ChanceConfig) -> DuelOutcome {
    let attack = attack.max(0.0);
    let defense = defense.max(0.0);
    let total = attack + defense;
    if total <= 0.0 || !total.is_finite() {
        return DuelOutcome::Pressure;
    }
    let r = rng.gen_range(0.0..total);
    if r < attack * cfg.shot_share {
        DuelOutcome::Shot
    } else if r >= attack + defense * (1.0 - cfg.clear_share) {
        DuelOutcome::Defended
    } else {
        DuelOutcome::Pressure
    }
}

/// Goal iff a draw over `[0, shooter + keeper)` lands below `shooter × factor`.
pub fn finish(rng: &mut impl Rng, shooter: f32, keeper: f32, cfg: &ChanceConfig) -> bool {
    let shooter = shooter.max(0.0);
    let total = shooter + keeper.max(0.0);
    if total <= 0.0 || !total.is_finite() {
        return false;
    }
    rng.gen_range(0.0..total) < shooter * cfg.finishing_factor
}

/// Coarse per-shot xG, independent of shot quality.
/// The band is clamped to `0..=1`; non-finite bounds read as 0.
pub fn sample_xg(rng: &mut impl Rng, cfg: &ChanceConfig) -> f32 {
    let bound = |v: f32| if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 };
    let (lo, hi) = (bound(cfg.xg_min), bound(cfg.xg_max));
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}
