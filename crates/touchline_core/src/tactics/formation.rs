//! Formations and their positional layouts.
//!
//! Layout coordinates are percentages of the pitch: `left` across, `bottom`
//! up from the own goal line. Slot 0 is always the goalkeeper.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(from = "String", into = "String")]
pub enum Formation {
    #[default]
    F442,
    F433,
    F352,
    F532,
    F4231,
}

/// One slot of a formation layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutSlot {
    pub left: f32,
    pub bottom: f32,
    pub role: &'static str,
}

const fn slot(left: f32, bottom: f32, role: &'static str) -> LayoutSlot {
    LayoutSlot { left, bottom, role }
}

const LAYOUT_442: [LayoutSlot; 11] = [
    slot(50.0, 4.0, "GK"),
    slot(15.0, 25.0, "LB"),
    slot(38.0, 22.0, "CB"),
    slot(62.0, 22.0, "CB"),
    slot(85.0, 25.0, "RB"),
    slot(15.0, 55.0, "LM"),
    slot(38.0, 50.0, "CM"),
    slot(62.0, 50.0, "CM"),
    slot(85.0, 55.0, "RM"),
    slot(35.0, 82.0, "ST"),
    slot(65.0, 82.0, "ST"),
];

const LAYOUT_433: [LayoutSlot; 11] = [
    slot(50.0, 4.0, "GK"),
    slot(15.0, 25.0, "LB"),
    slot(38.0, 22.0, "CB"),
    slot(62.0, 22.0, "CB"),
    slot(85.0, 25.0, "RB"),
    slot(25.0, 50.0, "CM"),
    slot(50.0, 45.0, "CDM"),
    slot(75.0, 50.0, "CM"),
    slot(15.0, 80.0, "LW"),
    slot(50.0, 85.0, "ST"),
    slot(85.0, 80.0, "RW"),
];

const LAYOUT_352: [LayoutSlot; 11] = [
    slot(50.0, 4.0, "GK"),
    slot(20.0, 22.0, "CB"),
    slot(50.0, 20.0, "CB"),
    slot(80.0, 22.0, "CB"),
    slot(10.0, 45.0, "LWB"),
    slot(35.0, 50.0, "CM"),
    slot(50.0, 45.0, "CDM"),
    slot(65.0, 50.0, "CM"),
    slot(90.0, 45.0, "RWB"),
    slot(35.0, 82.0, "ST"),
    slot(65.0, 82.0, "ST"),
];

const LAYOUT_532: [LayoutSlot; 11] = [
    slot(50.0, 4.0, "GK"),
    slot(10.0, 28.0, "LWB"),
    slot(30.0, 22.0, "CB"),
    slot(50.0, 20.0, "CB"),
    slot(70.0, 22.0, "CB"),
    slot(90.0, 28.0, "RWB"),
    slot(30.0, 50.0, "CM"),
    slot(50.0, 45.0, "CM"),
    slot(70.0, 50.0, "CM"),
    slot(35.0, 82.0, "ST"),
    slot(65.0, 82.0, "ST"),
];

const LAYOUT_4231: [LayoutSlot; 11] = [
    slot(50.0, 4.0, "GK"),
    slot(15.0, 25.0, "LB"),
    slot(38.0, 22.0, "CB"),
    slot(62.0, 22.0, "CB"),
    slot(85.0, 25.0, "RB"),
    slot(35.0, 42.0, "CDM"),
    slot(65.0, 42.0, "CDM"),
    slot(15.0, 65.0, "LAM"),
    slot(50.0, 65.0, "CAM"),
    slot(85.0, 65.0, "RAM"),
    slot(50.0, 85.0, "ST"),
];

impl Formation {
    pub const ALL: [Formation; 5] =
        [Formation::F442, Formation::F433, Formation::F352, Formation::F532, Formation::F4231];

    /// Resolve a formation key. Unknown keys fall back to 4-4-2.
    pub fn from_key(key: &str) -> Self {
        Self::parse(key).unwrap_or_default()
    }

    /// Strict lookup, `None` for unknown keys.
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.code() == key.trim())
    }

    /// Canonical formation code string (e.g., "4-3-3").
    pub fn code(&self) -> &'static str {
        match self {
            Formation::F442 => "4-4-2",
            Formation::F433 => "4-3-3",
            Formation::F352 => "3-5-2",
            Formation::F532 => "5-3-2",
            Formation::F4231 => "4-2-3-1",
        }
    }

    pub fn layout(&self) -> &'static [LayoutSlot; 11] {
        match self {
            Formation::F442 => &LAYOUT_442,
            Formation::F433 => &LAYOUT_433,
            Formation::F352 => &LAYOUT_352,
            Formation::F532 => &LAYOUT_532,
            Formation::F4231 => &LAYOUT_4231,
        }
    }

    /// Returns (defenders, midfielders, forwards), read off the code: first
    /// line defends, last line attacks, everything between is midfield.
    pub fn get_positions(&self) -> (u8, u8, u8) {
        let lines: Vec<u8> = self
            .code()
            .split('-')
            .filter_map(|n| n.parse().ok())
            .collect();
        match lines.as_slice() {
            [defenders, middle @ .., forwards] => {
                (*defenders, middle.iter().sum(), *forwards)
            }
            _ => (4, 4, 2),
        }
    }
}

impl From<String> for Formation {
    fn from(key: String) -> Self {
        Formation::from_key(&key)
    }
}

impl From<Formation> for String {
    fn from(formation: Formation) -> Self {
        formation.code().to_string()
    }
}
