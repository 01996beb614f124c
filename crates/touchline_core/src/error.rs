use thiserror::Error;

use crate::engine::MatchPhase;

/// Errors surfaced at the request boundary (JSON API, config loading).
#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Unsupported schema version: found {found}, expected {expected}")]
    SchemaVersion { found: u8, expected: u8 },

    #[error("Invalid engine config: {0}")]
    InvalidConfig(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl From<serde_json::Error> for MatchError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            MatchError::DeserializationError(err.to_string())
        } else {
            MatchError::SerializationError(err.to_string())
        }
    }
}

/// Misuse of the live session state machine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Cannot {action} while the match is {phase:?}")]
    InvalidTransition { action: &'static str, phase: MatchPhase },

    #[error("The match is over; only finalize is allowed")]
    MatchOver,

    #[error("The match has already been finalized")]
    Finalized,

    #[error(transparent)]
    Substitution(#[from] SubstitutionError),
}

/// Rejected substitution. The session is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubstitutionError {
    #[error("Substitution limit reached ({max} used)")]
    LimitReached { max: u8 },

    #[error("Unknown player: {id}")]
    UnknownPlayer { id: String },

    #[error("Player {id} is not on the bench")]
    NotOnBench { id: String },

    #[error("Player {id} is not on the pitch")]
    NotOnField { id: String },

    #[error("Player {id} has already been substituted off")]
    AlreadyWithdrawn { id: String },
}

impl SubstitutionError {
    /// Short notice suitable for showing to the manager.
    pub fn notice(&self) -> &'static str {
        match self {
            SubstitutionError::LimitReached { .. } => "Substitution limit reached",
            SubstitutionError::UnknownPlayer { .. } => "Player not found in squad",
            SubstitutionError::NotOnBench { .. } => "That player is not on the bench",
            SubstitutionError::NotOnField { .. } => "That player is not on the pitch",
            SubstitutionError::AlreadyWithdrawn { .. } => "That player cannot return to the pitch",
        }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
