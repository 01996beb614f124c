//! # touchline_core - Minute-by-minute football match engine
//!
//! Simulates one match between a manager's squad and an abstract opponent,
//! one discrete minute per call.
//!
//! ## Features
//! - Three-zone pitch with possession, momentum and fatigue
//! - Seedable random source: same seed, same match
//! - Pull-based session with pause/resume, substitutions and tactic changes
//! - JSON API and parallel batch calibration
//!
//! ```rust
//! use touchline_core::engine::{EngineConfig, MatchSession};
//! use touchline_core::models::{fixtures::demo_squad, Opponent};
//!
//! let team = demo_squad("Touchline FC", 76);
//! let mut session =
//!     MatchSession::with_seed(&team, &Opponent::new("Rivals", 72), EngineConfig::default(), 7);
//! session.run_to_full_time().unwrap();
//! let outcome = session.finalize();
//! assert_eq!(outcome.minutes_played, 90);
//! ```

pub mod api;
pub mod calibration;
pub mod engine;
pub mod error;
pub mod models;
pub mod tactics;

pub use api::{simulate_match, simulate_match_json, MatchRequest, MatchResponse, SCHEMA_VERSION};
pub use calibration::{run_batch, BatchSummary};
pub use engine::{EngineConfig, MatchOutcome, MatchPhase, MatchSession, StepResult};
pub use error::{MatchError, Result, SessionError, SubstitutionError};
pub use models::{EventType, MatchEvent, MatchStatistics, Opponent, Player, Team};
pub use tactics::{Formation, TacticChange, Tactics};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
