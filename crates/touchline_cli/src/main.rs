//! touchline CLI
//!
//! Runs match requests from JSON files, seeded calibration batches and a
//! minute-by-minute demo match on the terminal.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::prelude::*;

use touchline_core::api::{simulate_match, ConfigSource, MatchRequest};
use touchline_core::calibration;
use touchline_core::engine::{EngineConfig, MatchSession, StepResult};
use touchline_core::models::{fixtures::demo_squad, EventType, Opponent, Team};

#[derive(Parser, Debug)]
#[command(name = "touchline")]
#[command(about = "Simulate football matches minute by minute", long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Engine config JSON file (overrides --preset)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Engine preset: realistic, arcade or deterministic
    #[arg(long, global = true)]
    preset: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate one match request file
    Simulate {
        /// Match request JSON file
        #[arg(long)]
        request: PathBuf,

        /// Write the full response JSON here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,

        #[arg(long, default_value = "false")]
        pretty: bool,
    },

    /// Run a seeded batch and print averages
    Calibrate {
        /// Team JSON file. A demo squad is used when omitted.
        #[arg(long)]
        team: Option<PathBuf>,

        /// Rating of the generated demo squad
        #[arg(long, default_value = "75")]
        rating: u8,

        #[arg(long, default_value = "72")]
        opponent_rating: u8,

        #[arg(long, default_value = "100")]
        matches: u64,

        #[arg(long, default_value = "0")]
        first_seed: u64,
    },

    /// Play a demo match and print the commentary feed
    Demo {
        #[arg(long, default_value = "1")]
        seed: u64,

        #[arg(long, default_value = "75")]
        rating: u8,

        #[arg(long, default_value = "72")]
        opponent_rating: u8,

        /// Only print goals and chances
        #[arg(long, default_value = "false")]
        highlights: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);
    run(cli)
}

/// Initialize tracing/logging on stderr so stdout stays machine-readable.
fn init_tracing(log_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(cli.config.as_deref(), cli.preset.as_deref())?;

    match cli.command {
        Commands::Simulate { request, out, pretty } => {
            let output = simulate_file(&request, config, pretty)?;
            match out {
                Some(path) => {
                    fs::write(&path, output)
                        .with_context(|| format!("writing {}", path.display()))?;
                    info!(path = %path.display(), "response written");
                }
                None => println!("{output}"),
            }
        }

        Commands::Calibrate { team, rating, opponent_rating, matches, first_seed } => {
            let team = match team {
                Some(path) => load_team(&path)?,
                None => demo_squad("Touchline XI", rating),
            };
            let opponent = Opponent::new("Calibration Opponent", opponent_rating);
            let seeds: Vec<u64> = (first_seed..first_seed.saturating_add(matches)).collect();
            let summary = calibration::run_batch(&team, &opponent, &config, &seeds);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }

        Commands::Demo { seed, rating, opponent_rating, highlights } => {
            for line in demo_feed(config, seed, rating, opponent_rating, highlights)? {
                println!("{line}");
            }
        }
    }

    Ok(())
}

/// `--config` wins over `--preset`; otherwise `TOUCHLINE_ENGINE_CONFIG` or the default.
fn resolve_config(path: Option<&Path>, preset: Option<&str>) -> Result<EngineConfig> {
    if let Some(path) = path {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        return EngineConfig::from_json(&json)
            .with_context(|| format!("parsing config {}", path.display()));
    }
    if let Some(name) = preset {
        return match EngineConfig::preset(name) {
            Some(config) => Ok(config),
            None => bail!("unknown preset '{name}' (expected realistic, arcade or deterministic)"),
        };
    }
    EngineConfig::from_env().context("loading engine config from environment")
}

fn load_team(path: &Path) -> Result<Team> {
    let json =
        fs::read_to_string(path).with_context(|| format!("reading team {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("parsing team {}", path.display()))
}

/// Run a request file. A config embedded in the request takes precedence.
fn simulate_file(path: &Path, config: EngineConfig, pretty: bool) -> Result<String> {
    let json =
        fs::read_to_string(path).with_context(|| format!("reading request {}", path.display()))?;
    let mut request: MatchRequest = serde_json::from_str(&json)
        .with_context(|| format!("parsing request {}", path.display()))?;
    if request.config.is_none() {
        request.config = Some(ConfigSource::Inline(config));
    }

    let response = simulate_match(request).context("simulating match")?;
    let stats = &response.outcome.statistics;
    info!(
        "{} {} - {} {} (xG {:.2} - {:.2})",
        stats.home_team, stats.home_score, stats.away_score, stats.away_team, stats.xg_home, stats.xg_away
    );

    let output = if pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    Ok(output)
}

fn demo_feed(
    config: EngineConfig,
    seed: u64,
    rating: u8,
    opponent_rating: u8,
    highlights: bool,
) -> Result<Vec<String>> {
    let team = demo_squad("Touchline XI", rating);
    let opponent = Opponent::new("Rivals", opponent_rating);
    let mut session = MatchSession::with_seed(&team, &opponent, config, seed);
    session.start()?;

    let mut lines = Vec::new();
    let mut cursor = 0;
    while let StepResult::Minute(_) = session.advance_minute() {
        for event in session.events_since(cursor) {
            if highlights && !matches!(event.event_type, EventType::Goal | EventType::Chance) {
                continue;
            }
            lines.push(format!("{:>2}' {}", event.minute, event.description));
        }
        cursor = session.events().len();
    }

    let stats = session.finalize().statistics;
    lines.push(format!(
        "FT {} {} - {} {} | shots {}-{} | xG {:.2}-{:.2} | possession {}%-{}%",
        stats.home_team,
        stats.home_score,
        stats.away_score,
        stats.away_team,
        stats.shots_home,
        stats.shots_away,
        stats.xg_home,
        stats.xg_away,
        stats.possession,
        stats.possession_away()
    ));
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["touchline", "demo", "--seed", "9", "--highlights"]).unwrap();
        assert!(matches!(cli.command, Commands::Demo { seed: 9, highlights: true, .. }));

        let cli = Cli::try_parse_from([
            "touchline", "--preset", "arcade", "calibrate", "--matches", "10",
        ])
        .unwrap();
        assert_eq!(cli.preset.as_deref(), Some("arcade"));
        assert!(matches!(cli.command, Commands::Calibrate { matches: 10, rating: 75, .. }));

        assert!(Cli::try_parse_from(["touchline", "simulate"]).is_err());
    }

    #[test]
    fn test_resolve_config_sources() {
        let arcade = resolve_config(None, Some("arcade")).unwrap();
        assert_eq!(arcade, EngineConfig::arcade());
        assert!(resolve_config(None, Some("chaos")).is_err());

        let file = write_temp(r#"{"momentum":{"goal_spike":10}}"#);
        let config = resolve_config(Some(file.path()), Some("arcade")).unwrap();
        assert_eq!(config.momentum.goal_spike, 10.0);
        assert_eq!(config.chance, EngineConfig::default().chance);
    }

    #[test]
    fn test_simulate_file_round_trip() {
        let request = serde_json::json!({
            "schema_version": 1,
            "seed": 5,
            "team": demo_squad("File FC", 74),
            "opponent": { "name": "Visitors", "rating": 70 },
            "script": [
                { "minute": 55, "command": { "type": "substitute", "bench_id": "fil-17", "on_field_id": "fil-10" } }
            ]
        });
        let file = write_temp(&request.to_string());

        let output = simulate_file(file.path(), EngineConfig::default(), false).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["outcome"]["completed"], true);
        assert_eq!(parsed["outcome"]["minutes_played"], 90);
        assert!(parsed["rejected"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_simulate_file_reports_bad_json() {
        let file = write_temp("not json");
        let err = simulate_file(file.path(), EngineConfig::default(), false).unwrap_err();
        assert!(format!("{err:#}").contains("parsing request"));
    }

    #[test]
    fn test_demo_feed_ends_with_full_time_line() {
        let lines = demo_feed(EngineConfig::default(), 3, 75, 72, false).unwrap();
        assert!(lines.len() > 1);
        assert!(lines.last().unwrap().starts_with("FT Touchline XI"));

        let highlights = demo_feed(EngineConfig::default(), 3, 75, 72, true).unwrap();
        assert!(highlights.len() < lines.len());
    }
}
