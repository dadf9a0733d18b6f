//! Match score tracking.
//!
//! Scores persist across rounds and only move when a pointing round is
//! decided. They are cleared by an explicit reset.

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The human player.
    Player,
    /// The computer opponent.
    Cpu,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Player => write!(f, "player"),
            Self::Cpu => write!(f, "cpu"),
        }
    }
}

/// Two non-negative win counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    player: u32,
    cpu: u32,
}

impl Scoreboard {
    /// Create a scoreboard at 0 - 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one win for `side`.
    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player = self.player.saturating_add(1),
            Side::Cpu => self.cpu = self.cpu.saturating_add(1),
        }
    }

    /// Set both counters back to zero.
    pub fn reset(&mut self) {
        self.player = 0;
        self.cpu = 0;
    }

    /// The player's wins.
    pub fn player(&self) -> u32 {
        self.player
    }

    /// The CPU's wins.
    pub fn cpu(&self) -> u32 {
        self.cpu
    }

    /// Wins for the given side.
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Cpu => self.cpu,
        }
    }

    /// The side that is ahead, or `None` when level.
    pub fn leader(&self) -> Option<Side> {
        match self.player.cmp(&self.cpu) {
            std::cmp::Ordering::Greater => Some(Side::Player),
            std::cmp::Ordering::Less => Some(Side::Cpu),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.player, self.cpu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let board = Scoreboard::new();
        assert_eq!(board.player(), 0);
        assert_eq!(board.cpu(), 0);
        assert_eq!(board.leader(), None);
    }

    #[test]
    fn increment_touches_one_side() {
        let mut board = Scoreboard::new();
        board.increment(Side::Player);
        board.increment(Side::Player);
        board.increment(Side::Cpu);
        assert_eq!(board.get(Side::Player), 2);
        assert_eq!(board.get(Side::Cpu), 1);
        assert_eq!(board.leader(), Some(Side::Player));
    }

    #[test]
    fn reset_clears_both() {
        let mut board = Scoreboard::new();
        board.increment(Side::Cpu);
        board.increment(Side::Player);
        board.reset();
        assert_eq!(board, Scoreboard::new());
    }

    #[test]
    fn display() {
        let mut board = Scoreboard::new();
        board.increment(Side::Cpu);
        assert_eq!(board.to_string(), "0 - 1");
    }

    #[test]
    fn round_trip_serde() {
        let mut board = Scoreboard::new();
        board.increment(Side::Player);
        let json = serde_json::to_string(&board).unwrap();
        let back: Scoreboard = serde_json::from_str(&json).unwrap();
        assert_eq!(back.player(), 1);
    }
}
