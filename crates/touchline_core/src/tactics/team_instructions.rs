//! Team-wide tactical settings and the modifiers they feed into the engine.
//!
//! Every setting is a closed enum. The numeric effects live next to the enum
//! so the resolution code only ever asks "what bonus does this give me".

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::formation::Formation;

/// Live tactics for one side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Tactics {
    #[serde(default)]
    pub formation: Formation,
    #[serde(default)]
    pub pressing: PressingIntensity,
    #[serde(default)]
    pub passing: PassingStyle,
    #[serde(default, alias = "defensiveLine")]
    pub defensive_line: DefensiveLine,
}

impl Tactics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite one field. Returns the human-readable description of the change.
    pub fn apply(&mut self, change: TacticChange) -> String {
        match change {
            TacticChange::Formation(formation) => {
                self.formation = formation;
                format!("switch to a {} formation", formation.code())
            }
            TacticChange::Pressing(pressing) => {
                self.pressing = pressing;
                format!("change pressing to {}", pressing.display_name())
            }
            TacticChange::Passing(passing) => {
                self.passing = passing;
                format!("change passing style to {}", passing.display_name())
            }
            TacticChange::DefensiveLine(line) => {
                self.defensive_line = line;
                format!("move to a {} defensive line", line.display_name())
            }
        }
    }

    /// Flat bonus while attacking the opponent's third.
    pub fn attacking_bonus(&self) -> f32 {
        self.passing.attacking_bonus() + self.defensive_line.attacking_bonus()
    }

    /// Flat bonus while defending the own third.
    pub fn defending_bonus(&self) -> f32 {
        self.defensive_line.defending_bonus() + self.pressing.defending_bonus()
    }

    /// Midfield contest modifier. Passing style rewards keeping the ball,
    /// pressing rewards winning it back.
    pub fn midfield_bonus(&self, in_possession: bool, rng: &mut impl Rng) -> f32 {
        let pressing = if in_possession { 0.0 } else { self.pressing.ball_winning_bonus() };
        self.passing.midfield_bonus(in_possession, rng) + pressing
    }
}

/// A single mid-match tactical instruction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum TacticChange {
    Formation(Formation),
    Pressing(PressingIntensity),
    Passing(PassingStyle),
    DefensiveLine(DefensiveLine),
}

/// Pressing intensity, from least to most punishing on fitness.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PressingIntensity {
    LowBlock,
    #[default]
    Balanced,
    HighPress,
    Gegenpress,
}

impl PressingIntensity {
    /// Fixed per-minute condition loss for every starter.
    pub fn fatigue_decay(&self) -> f32 {
        match self {
            Self::LowBlock => 0.05,
            Self::Balanced => 0.10,
            Self::HighPress => 0.15,
            Self::Gegenpress => 0.22,
        }
    }

    pub fn ball_winning_bonus(&self) -> f32 {
        match self {
            Self::LowBlock | Self::Balanced => 0.0,
            Self::HighPress => 2.0,
            Self::Gegenpress => 4.0,
        }
    }

    pub fn defending_bonus(&self) -> f32 {
        match self {
            Self::Gegenpress => 5.0,
            _ => 0.0,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::LowBlock => "a low block",
            Self::Balanced => "balanced",
            Self::HighPress => "a high press",
            Self::Gegenpress => "gegenpressing",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PassingStyle {
    Short,
    #[default]
    Mixed,
    Direct,
    LongBall,
}

impl PassingStyle {
    /// Retention bonus in possession; direct styles swing either way instead.
    pub fn midfield_bonus(&self, in_possession: bool, rng: &mut impl Rng) -> f32 {
        match self {
            Self::Short if in_possession => 4.0,
            Self::Mixed if in_possession => 2.0,
            Self::Short | Self::Mixed => 0.0,
            Self::Direct => rng.gen_range(-3.0..6.0),
            Self::LongBall => rng.gen_range(-6.0..9.0),
        }
    }

    pub fn attacking_bonus(&self) -> f32 {
        match self {
            Self::Direct => 5.0,
            Self::LongBall => 3.0,
            Self::Short | Self::Mixed => 0.0,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Mixed => "mixed",
            Self::Direct => "direct",
            Self::LongBall => "long ball",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DefensiveLine {
    Deep,
    #[default]
    Standard,
    High,
}

impl DefensiveLine {
    /// A high line sustains pressure in the final third.
    pub fn attacking_bonus(&self) -> f32 {
        match self {
            Self::High => 5.0,
            _ => 0.0,
        }
    }

    pub fn defending_bonus(&self) -> f32 {
        match self {
            Self::Deep => 5.0,
            _ => 0.0,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Deep => "deep",
            Self::Standard => "standard",
            Self::High => "high",
        }
    }
}
