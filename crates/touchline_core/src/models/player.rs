use serde::{Deserialize, Serialize};

/// Highest attribute value the engine reads. Anything above is clamped.
pub const MAX_ATTRIBUTE: u8 = 99;

/// Full fitness.
pub const MAX_CONDITION: f32 = 100.0;

/// Squad member as supplied by the career layer.
///
/// `condition` is the only field the match engine mutates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub position: Position,
    #[serde(flatten)]
    pub attributes: PlayerAttributes,
    /// Overall rating (0-99)
    #[serde(alias = "rating")]
    pub overall: u8,
    /// Fatigue-adjusted fitness (0.0-100.0)
    #[serde(default = "default_condition")]
    pub condition: f32,
    #[serde(alias = "squadStatus")]
    pub squad_status: SquadStatus,
    #[serde(default, alias = "trainingFocus", skip_serializing_if = "Option::is_none")]
    pub training_focus: Option<String>,
}

fn default_condition() -> f32 {
    MAX_CONDITION
}

impl Player {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        position: Position,
        overall: u8,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
            attributes: PlayerAttributes::uniform(overall),
            overall,
            condition: MAX_CONDITION,
            squad_status: SquadStatus::Reserve,
            training_focus: None,
        }
    }

    pub fn with_status(mut self, status: SquadStatus) -> Self {
        self.squad_status = status;
        self
    }

    pub fn with_attributes(mut self, attributes: PlayerAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn is_starting(&self) -> bool {
        self.squad_status == SquadStatus::Starting
    }

    pub fn is_substitute(&self) -> bool {
        self.squad_status == SquadStatus::Substitute
    }

    /// Subtract fatigue, flooring at zero.
    pub fn tire(&mut self, amount: f32) {
        if amount.is_finite() && amount > 0.0 {
            self.condition = (self.condition - amount).max(0.0);
        }
    }

    /// Condition clamped to the valid range (inputs are not trusted).
    pub fn clamped_condition(&self) -> f32 {
        if self.condition.is_finite() {
            self.condition.clamp(0.0, MAX_CONDITION)
        } else {
            MAX_CONDITION
        }
    }
}

/// Six headline attributes, each 0-99.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PlayerAttributes {
    pub pace: u8,
    pub shooting: u8,
    pub passing: u8,
    pub dribbling: u8,
    pub defending: u8,
    pub physical: u8,
}

impl PlayerAttributes {
    pub fn uniform(value: u8) -> Self {
        Self {
            pace: value,
            shooting: value,
            passing: value,
            dribbling: value,
            defending: value,
            physical: value,
        }
    }

    pub fn get(&self, attribute: Attribute) -> u8 {
        let raw = match attribute {
            Attribute::Pace => self.pace,
            Attribute::Shooting => self.shooting,
            Attribute::Passing => self.passing,
            Attribute::Dribbling => self.dribbling,
            Attribute::Defending => self.defending,
            Attribute::Physical => self.physical,
        };
        raw.min(MAX_ATTRIBUTE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Pace,
    Shooting,
    Passing,
    Dribbling,
    Defending,
    Physical,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Position {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DEF")]
    Defender,
    #[serde(rename = "MID")]
    Midfielder,
    #[serde(rename = "FWD")]
    Forward,
}

impl Position {
    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Position::Goalkeeper)
    }

    pub fn is_defender(&self) -> bool {
        matches!(self, Position::Defender)
    }

    pub fn is_midfielder(&self) -> bool {
        matches!(self, Position::Midfielder)
    }

    pub fn is_forward(&self) -> bool {
        matches!(self, Position::Forward)
    }

    pub fn code(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::Defender => "DEF",
            Position::Midfielder => "MID",
            Position::Forward => "FWD",
        }
    }
}

/// Match eligibility.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum SquadStatus {
    Starting,
    #[serde(rename = "SUB")]
    Substitute,
    Reserve,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tire_floors_at_zero() {
        let mut player = Player::new("p1", "Test", Position::Midfielder, 70);
        player.tire(30.0);
        assert_eq!(player.condition, 70.0);
        player.tire(500.0);
        assert_eq!(player.condition, 0.0);
    }

    #[test]
    fn test_tire_ignores_negative_and_nan() {
        let mut player = Player::new("p1", "Test", Position::Forward, 70);
        player.tire(-5.0);
        player.tire(f32::NAN);
        assert_eq!(player.condition, MAX_CONDITION);
    }

    #[test]
    fn test_attribute_clamped_to_99() {
        let attrs = PlayerAttributes { shooting: 140, ..PlayerAttributes::uniform(50) };
        assert_eq!(attrs.get(Attribute::Shooting), 99);
        assert_eq!(attrs.get(Attribute::Passing), 50);
    }

    #[test]
    fn test_wire_spellings() {
        let json = r#"{
            "id": "p9",
            "name": "Striker",
            "position": "FWD",
            "pace": 80, "shooting": 85, "passing": 70,
            "dribbling": 78, "defending": 30, "physical": 72,
            "rating": 80,
            "condition": 95,
            "squadStatus": "SUB"
        }"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.position, Position::Forward);
        assert_eq!(player.squad_status, SquadStatus::Substitute);
        assert_eq!(player.overall, 80);
        assert_eq!(player.attributes.shooting, 85);
        assert_eq!(player.condition, 95.0);
    }

    #[test]
    fn test_missing_condition_defaults_to_fit() {
        let json = r#"{
            "id": "p1", "name": "Keeper", "position": "GK",
            "pace": 50, "shooting": 20, "passing": 55,
            "dribbling": 30, "defending": 60, "physical": 70,
            "overall": 74, "squad_status": "STARTING"
        }"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.condition, MAX_CONDITION);
        assert!(player.is_starting());
    }
}
