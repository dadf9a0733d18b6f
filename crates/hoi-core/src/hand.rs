//! Janken hands and the beats-relation between them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::choice::Enumerated;
use crate::error::CoreError;

/// A rock, scissors, or paper hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hand {
    /// Gu. Beats scissors.
    Rock,
    /// Choki. Beats paper.
    Scissors,
    /// Pa. Beats rock.
    Paper,
}

impl Hand {
    /// All hands, in the order the CPU draws from.
    pub const ALL: [Hand; 3] = [Hand::Rock, Hand::Scissors, Hand::Paper];

    /// Check if this hand beats the other.
    pub fn beats(self, other: Hand) -> bool {
        matches!(
            (self, other),
            (Hand::Rock, Hand::Scissors) | (Hand::Scissors, Hand::Paper) | (Hand::Paper, Hand::Rock)
        )
    }

    /// The Japanese name called out during the chant.
    pub fn label_ja(self) -> &'static str {
        match self {
            Hand::Rock => "グー",
            Hand::Scissors => "チョキ",
            Hand::Paper => "パー",
        }
    }

    /// A single-glyph rendering for terminals.
    pub fn emoji(self) -> &'static str {
        match self {
            Hand::Rock => "✊",
            Hand::Scissors => "✌️",
            Hand::Paper => "🖐️",
        }
    }
}

impl Enumerated for Hand {
    const ALL: &'static [Self] = &Hand::ALL;
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hand::Rock => write!(f, "rock"),
            Hand::Scissors => write!(f, "scissors"),
            Hand::Paper => write!(f, "paper"),
        }
    }
}

impl FromStr for Hand {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "rock" | "r" | "gu" | "グー" => Ok(Hand::Rock),
            "scissors" | "s" | "choki" | "チョキ" => Ok(Hand::Scissors),
            "paper" | "p" | "pa" | "パー" => Ok(Hand::Paper),
            _ => Err(CoreError::UnknownHand(trimmed.to_string())),
        }
    }
}
