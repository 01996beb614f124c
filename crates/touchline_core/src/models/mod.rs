pub mod events;
pub mod fixtures;
pub mod match_statistics;
pub mod player;
pub mod team;

pub use events::{EventType, MatchEvent};
pub use match_statistics::{possession_percent, MatchStatistics};
pub use player::{Attribute, Player, PlayerAttributes, Position, SquadStatus};
pub use team::{LineupIssue, Opponent, Team};
