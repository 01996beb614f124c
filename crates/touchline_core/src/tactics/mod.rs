// Tactical settings: formations, pressing, passing, defensive line.

pub mod formation;
pub mod team_instructions;

pub use formation::{Formation, LayoutSlot};
pub use team_instructions::{DefensiveLine, PassingStyle, PressingIntensity, TacticChange, Tactics};
