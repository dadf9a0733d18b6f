use hoi_core::Side;
use serde::{Deserialize, Serialize};

/// Where a round currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Waiting for the player's hand.
    #[default]
    Janken,
    /// Waiting for the player's direction.
    Pointing,
    /// The round is decided and its result is on display.
    Deciding,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Janken => write!(f, "janken"),
            Self::Pointing => write!(f, "pointing"),
            Self::Deciding => write!(f, "deciding"),
        }
    }
}

/// Which side points in the current pointing round.
///
/// The janken winner points. A matching direction scores for the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pointer {
    /// The player won janken and points.
    PlayerPoints,
    /// The CPU won janken and points.
    CpuPoints,
}

impl Pointer {
    /// The side doing the pointing.
    pub fn side(self) -> Side {
        match self {
            Self::PlayerPoints => Side::Player,
            Self::CpuPoints => Side::Cpu,
        }
    }
}

impl std::fmt::Display for Pointer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} points", self.side())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_phase_is_janken() {
        assert_eq!(Phase::default(), Phase::Janken);
    }

    #[test]
    fn pointer_side() {
        assert_eq!(Pointer::PlayerPoints.side(), Side::Player);
        assert_eq!(Pointer::CpuPoints.side(), Side::Cpu);
        assert_eq!(Pointer::CpuPoints.to_string(), "cpu points");
    }
}
