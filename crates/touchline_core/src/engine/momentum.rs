//! Momentum: 0 (away dominance) .. 100 (home dominance), resting at 50.

use serde::{Deserialize, Serialize};

use super::zone::Side;

pub const NEUTRAL: f32 = 50.0;
pub const MAX: f32 = 100.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Momentum(f32);

impl Default for Momentum {
    fn default() -> Self {
        Momentum(NEUTRAL)
    }
}

impl Momentum {
    pub fn new(value: f32) -> Self {
        Momentum(sanitize(value))
    }

    pub fn value(self) -> f32 {
        self.0
    }

    /// Contest contribution for `side`: momentum/10 home, (100-momentum)/10 away.
    pub fn contribution(self, side: Side) -> f32 {
        match side {
            Side::Home => self.0 / 10.0,
            Side::Away => (MAX - self.0) / 10.0,
        }
    }

    /// Pull toward 50 by `step` without overshooting.
    pub fn decay(&mut self, step: f32) {
        let step = step.max(0.0);
        if self.0 > NEUTRAL {
            self.0 = (self.0 - step).max(NEUTRAL);
        } else if self.0 < NEUTRAL {
            self.0 = (self.0 + step).min(NEUTRAL);
        }
    }

    /// Push toward `side` by `amount`.
    pub fn nudge(&mut self, side: Side, amount: f32) {
        let delta = if side.is_home() { amount } else { -amount };
        self.0 = sanitize(self.0 + delta);
    }

    /// Hard reset after a goal: `spike` points past neutral toward the scorer.
    pub fn spike(&mut self, side: Side, spike: f32) {
        let delta = if side.is_home() { spike } else { -spike };
        self.0 = sanitize(NEUTRAL + delta);
    }
}

fn sanitize(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, MAX)
    } else {
        NEUTRAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decay_does_not_overshoot() {
        let mut m = Momentum::new(50.3);
        m.decay(0.5);
        assert_eq!(m.value(), 50.0);

        let mut m = Momentum::new(40.0);
        m.decay(0.5);
        assert_eq!(m.value(), 40.5);
    }

    #[test]
    fn test_goal_spike() {
        let mut m = Momentum::new(10.0);
        m.spike(Side::Home, 25.0);
        assert_eq!(m.value(), 75.0);
        m.spike(Side::Away, 25.0);
        assert_eq!(m.value(), 25.0);
    }

    #[test]
    fn test_contributions_mirror() {
        let m = Momentum::new(70.0);
        assert_eq!(m.contribution(Side::Home), 7.0);
        assert_eq!(m.contribution(Side::Away), 3.0);
    }

    proptest! {
        #[test]
        fn prop_momentum_stays_in_bounds(
            start in -50.0f32..150.0f32,
            ops in prop::collection::vec((0u8..3, any::<bool>(), 0.0f32..60.0f32), 0..200)
        ) {
            let mut m = Momentum::new(start);
            for (op, home, amount) in ops {
                let side = if home { Side::Home } else { Side::Away };
                match op {
                    0 => m.decay(amount),
                    1 => m.nudge(side, amount),
                    _ => m.spike(side, amount),
                }
                prop_assert!((0.0..=MAX).contains(&m.value()));
            }
        }
    }
}
