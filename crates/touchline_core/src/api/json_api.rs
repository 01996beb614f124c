use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::engine::{EngineConfig, MatchOutcome, MatchSession, MomentumSample, StepResult};
use crate::error::{MatchError, SessionError};
use crate::models::{MatchEvent, Opponent, Team};
use crate::tactics::TacticChange;

pub const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub team: Team,
    pub opponent: Opponent,
    /// Preset name or a full/partial config object. Realistic when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ConfigSource>,
    /// Manager commands, applied once `minute` minutes have been played.
    #[serde(default)]
    pub script: Vec<ScriptedCommand>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigSource {
    Preset(String),
    Inline(EngineConfig),
}

impl ConfigSource {
    pub fn resolve(self) -> Result<EngineConfig, MatchError> {
        let config = match self {
            ConfigSource::Preset(name) => EngineConfig::preset(&name)
                .ok_or_else(|| MatchError::InvalidConfig(format!("unknown preset '{name}'")))?,
            ConfigSource::Inline(config) => config,
        };
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScriptedCommand {
    pub minute: u8,
    pub command: Command,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    Substitute { bench_id: String, on_field_id: String },
    Tactic { change: TacticChange },
    /// Stop the match here and finalize what has been played.
    Abandon,
}

/// A scripted command the session refused.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rejection {
    pub minute: u8,
    pub command: Command,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResponse {
    pub schema_version: u8,
    pub outcome: MatchOutcome,
    pub events: Vec<MatchEvent>,
    pub momentum: Vec<MomentumSample>,
    #[serde(default)]
    pub rejected: Vec<Rejection>,
}

/// JSON in, JSON out. See [`simulate_match`].
pub fn simulate_match_json(request_json: &str) -> Result<String, MatchError> {
    let request: MatchRequest = serde_json::from_str(request_json)?;
    let response = simulate_match(request)?;
    Ok(serde_json::to_string(&response)?)
}

/// Play one seeded match to full time (or until an `abandon` command).
pub fn simulate_match(request: MatchRequest) -> Result<MatchResponse, MatchError> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(MatchError::SchemaVersion {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }
    if let Some(late) = request.script.iter().find(|c| c.minute > 90) {
        return Err(MatchError::InvalidRequest(format!(
            "scripted command at minute {} is past full time",
            late.minute
        )));
    }

    let config = match request.config {
        Some(source) => source.resolve()?,
        None => EngineConfig::default(),
    };

    let mut script = request.script;
    script.sort_by_key(|c| c.minute);
    let mut pending = script.into_iter().peekable();

    let mut session = MatchSession::with_seed(&request.team, &request.opponent, config, request.seed);
    let mut rejected = Vec::new();
    session.start()?;

    'match_loop: loop {
        while let Some(scripted) = pending.next_if(|c| c.minute <= session.minute()) {
            let result = match &scripted.command {
                Command::Substitute { bench_id, on_field_id } => {
                    session.substitute(bench_id, on_field_id)
                }
                Command::Tactic { change } => session.change_tactic(*change),
                Command::Abandon => break 'match_loop,
            };
            if let Err(err) = result {
                rejected.push(Rejection {
                    minute: session.minute(),
                    reason: rejection_reason(&err),
                    command: scripted.command,
                });
            }
        }
        if !matches!(session.advance_minute(), StepResult::Minute(_)) {
            break;
        }
    }

    // Anything left over was cut off by an abandon.
    for scripted in pending {
        warn!(minute = scripted.minute, "scripted command not applied");
        rejected.push(Rejection {
            minute: session.minute(),
            command: scripted.command,
            reason: "The match is over".to_string(),
        });
    }

    let outcome = session.finalize();
    info!(
        seed = request.seed,
        home_score = outcome.statistics.home_score,
        away_score = outcome.statistics.away_score,
        rejected = rejected.len(),
        "match simulated"
    );

    Ok(MatchResponse {
        schema_version: SCHEMA_VERSION,
        events: session.events().to_vec(),
        momentum: session.momentum_timeline().to_vec(),
        outcome,
        rejected,
    })
}

fn rejection_reason(err: &SessionError) -> String {
    match err {
        SessionError::Substitution(sub) => sub.notice().to_string(),
        other => other.to_string(),
    }
}
