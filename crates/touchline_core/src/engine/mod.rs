//! Match engine: zone resolution, fatigue, momentum and the live session.

pub mod config;
pub mod fatigue;
pub mod live_match;
pub mod momentum;
pub mod probability;
pub mod resolution;
pub mod selection;
pub mod state;
pub mod substitutions;
pub mod zone;


pub use config::EngineConfig;
pub use live_match::{MatchOutcome, MatchPhase, MatchSession, MinuteReport, MomentumSample, StepResult};
pub use momentum::Momentum;
pub use resolution::Transition;
pub use state::{MatchState, FULL_TIME_MINUTE, MAX_SUBSTITUTIONS};
pub use substitutions::SubstitutionLedger;
pub use zone::{PerSide, Side, Zone};
