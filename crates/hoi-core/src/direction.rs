//! Directions for the pointing round.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::choice::Enumerated;
use crate::error::CoreError;

/// Where the pointer points, or where the other side turns its head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Hidari.
    Left,
    /// Migi.
    Right,
    /// Ue.
    Up,
    /// Shita.
    Down,
}

impl Direction {
    /// All directions, in the order the CPU draws from.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// The Japanese name shown on the direction buttons.
    pub fn label_ja(self) -> &'static str {
        match self {
            Direction::Left => "左",
            Direction::Right => "右",
            Direction::Up => "上",
            Direction::Down => "下",
        }
    }

    /// An arrow glyph for terminals.
    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Left => "←",
            Direction::Right => "→",
            Direction::Up => "↑",
            Direction::Down => "↓",
        }
    }
}

impl Enumerated for Direction {
    const ALL: &'static [Self] = &Direction::ALL;
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

impl FromStr for Direction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "left" | "l" | "左" => Ok(Direction::Left),
            "right" | "r" | "右" => Ok(Direction::Right),
            "up" | "u" | "上" => Ok(Direction::Up),
            "down" | "d" | "下" => Ok(Direction::Down),
            _ => Err(CoreError::UnknownDirection(trimmed.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_directions() {
        assert_eq!("LEFT".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!("r".parse::<Direction>(), Ok(Direction::Right));
        assert_eq!("上".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("down".parse::<Direction>(), Ok(Direction::Down));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(
            "sideways".parse::<Direction>(),
            Err(CoreError::UnknownDirection("sideways".into()))
        );
    }

    #[test]
    fn display_and_labels() {
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Left.label_ja(), "左");
        assert_eq!(Direction::Down.arrow(), "↓");
    }
}
