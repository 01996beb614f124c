//! The three-zone pitch and the two sides contesting it.
//!
//! Zones are always named from the manager's (home) point of view:
//! `Attack` means the home side is pressing the opponent's goal.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }

    pub fn is_home(self) -> bool {
        self == Side::Home
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Zone {
    Defense,
    #[default]
    Midfield,
    Attack,
}

impl Zone {
    /// -1 (home defending), 0, +1 (home attacking)
    pub fn offset(self) -> i8 {
        match self {
            Zone::Defense => -1,
            Zone::Midfield => 0,
            Zone::Attack => 1,
        }
    }

    fn from_offset(offset: i8) -> Zone {
        match offset.clamp(-1, 1) {
            -1 => Zone::Defense,
            0 => Zone::Midfield,
            _ => Zone::Attack,
        }
    }

    /// One step toward `side`'s attacking end, saturating at the box.
    pub fn advance(self, side: Side) -> Zone {
        let step = if side.is_home() { 1 } else { -1 };
        Zone::from_offset(self.offset() + step)
    }

    /// One step back toward `side`'s own goal.
    pub fn regress(self, side: Side) -> Zone {
        self.advance(side.opponent())
    }

    /// The side pressing in this zone, `None` in midfield.
    pub fn attacking_side(self) -> Option<Side> {
        match self {
            Zone::Attack => Some(Side::Home),
            Zone::Defense => Some(Side::Away),
            Zone::Midfield => None,
        }
    }
}

/// A value tracked separately for each side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct PerSide<T> {
    pub home: T,
    pub away: T,
}

impl<T> PerSide<T> {
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_and_regress() {
        assert_eq!(Zone::Midfield.advance(Side::Home), Zone::Attack);
        assert_eq!(Zone::Midfield.advance(Side::Away), Zone::Defense);
        assert_eq!(Zone::Attack.advance(Side::Home), Zone::Attack);
        assert_eq!(Zone::Defense.advance(Side::Away), Zone::Defense);
        assert_eq!(Zone::Attack.regress(Side::Home), Zone::Midfield);
        assert_eq!(Zone::Defense.regress(Side::Away), Zone::Midfield);
    }

    #[test]
    fn test_attacking_side() {
        assert_eq!(Zone::Attack.attacking_side(), Some(Side::Home));
        assert_eq!(Zone::Defense.attacking_side(), Some(Side::Away));
        assert_eq!(Zone::Midfield.attacking_side(), None);
    }

    #[test]
    fn test_per_side_access() {
        let mut shots = PerSide::<u16>::default();
        *shots.get_mut(Side::Away) += 2;
        assert_eq!(*shots.get(Side::Away), 2);
        assert_eq!(shots.home, 0);
    }
}
