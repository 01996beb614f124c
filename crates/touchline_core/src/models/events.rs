use serde::{Deserialize, Serialize};

/// One line of the live commentary feed. Never mutated once appended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchEvent {
    pub minute: u8,
    pub description: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(alias = "teamName")]
    pub team_name: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    Normal,
    Chance,
    Goal,
    YellowCard,
    RedCard,
    Substitution,
    Injury,
}

impl MatchEvent {
    pub fn new(
        minute: u8,
        event_type: EventType,
        team_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self { minute, description: description.into(), event_type, team_name: team_name.into() }
    }

    pub fn normal(minute: u8, team_name: &str, description: impl Into<String>) -> Self {
        Self::new(minute, EventType::Normal, team_name, description)
    }

    pub fn chance(minute: u8, team_name: &str, description: impl Into<String>) -> Self {
        Self::new(minute, EventType::Chance, team_name, description)
    }

    pub fn goal(minute: u8, team_name: &str, description: impl Into<String>) -> Self {
        Self::new(minute, EventType::Goal, team_name, description)
    }

    pub fn substitution(minute: u8, team_name: &str, player_in: &str, player_out: &str) -> Self {
        Self::new(
            minute,
            EventType::Substitution,
            team_name,
            format!("Substitution for {team_name}: {player_in} replaces {player_out}."),
        )
    }

    pub fn is_goal(&self) -> bool {
        self.event_type == EventType::Goal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_event_type_wire_names() {
        let names: Vec<String> = EventType::iter()
            .map(|t| serde_json::to_string(&t).unwrap().trim_matches('"').to_string())
            .collect();
        assert_eq!(
            names,
            ["NORMAL", "CHANCE", "GOAL", "YELLOW_CARD", "RED_CARD", "SUBSTITUTION", "INJURY"]
        );
    }

    #[test]
    fn test_event_serializes_type_key() {
        let event = MatchEvent::goal(23, "Home FC", "GOAL!");
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "GOAL");
        assert_eq!(value["minute"], 23);
        assert_eq!(value["team_name"], "Home FC");
    }

    #[test]
    fn test_substitution_description_names_both_players() {
        let event = MatchEvent::substitution(60, "Home FC", "Fresh Legs", "Tired Legs");
        assert_eq!(event.event_type, EventType::Substitution);
        assert!(event.description.contains("Fresh Legs replaces Tired Legs"));
    }
}
