//! Ready-made squads for demos, benchmarks and tests.

use super::{Player, PlayerAttributes, Position, SquadStatus, Team};

/// 4-4-2 starting eleven plus seven substitutes and two reserves, every
/// attribute set to `rating`. Ids are `{prefix}-01` .. `{prefix}-20`.
pub fn demo_squad(name: &str, rating: u8) -> Team {
    let prefix: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(3)
        .collect::<String>()
        .to_lowercase();

    let lineup = [
        (Position::Goalkeeper, SquadStatus::Starting),
        (Position::Defender, SquadStatus::Starting),
        (Position::Defender, SquadStatus::Starting),
        (Position::Defender, SquadStatus::Starting),
        (Position::Defender, SquadStatus::Starting),
        (Position::Midfielder, SquadStatus::Starting),
        (Position::Midfielder, SquadStatus::Starting),
        (Position::Midfielder, SquadStatus::Starting),
        (Position::Midfielder, SquadStatus::Starting),
        (Position::Forward, SquadStatus::Starting),
        (Position::Forward, SquadStatus::Starting),
        (Position::Goalkeeper, SquadStatus::Substitute),
        (Position::Defender, SquadStatus::Substitute),
        (Position::Defender, SquadStatus::Substitute),
        (Position::Midfielder, SquadStatus::Substitute),
        (Position::Midfielder, SquadStatus::Substitute),
        (Position::Forward, SquadStatus::Substitute),
        (Position::Forward, SquadStatus::Substitute),
        (Position::Midfielder, SquadStatus::Reserve),
        (Position::Defender, SquadStatus::Reserve),
    ];

    let players = lineup
        .iter()
        .enumerate()
        .map(|(idx, (position, status))| {
            let number = idx + 1;
            Player::new(
                format!("{prefix}-{number:02}"),
                format!("{name} {} {number}", position.code()),
                *position,
                rating,
            )
            .with_attributes(PlayerAttributes::uniform(rating))
            .with_status(*status)
        })
        .collect();

    Team::new(name, players)
}
