use hoi_core::{Direction, Hand};
use serde::{Deserialize, Serialize};

use crate::phase::Phase;

/// Everything the presentation layer may observe about a round.
///
/// The CPU's preselected direction and the pointer designation are
/// deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundView {
    /// Current phase.
    pub phase: Phase,
    /// The player's hand, once thrown.
    pub player_hand: Option<Hand>,
    /// The CPU's hand, once thrown.
    pub cpu_hand: Option<Hand>,
    /// The player's direction, once chosen.
    pub player_direction: Option<Direction>,
    /// The CPU's direction, once revealed.
    pub cpu_direction: Option<Direction>,
    /// The player's wins.
    pub player_score: u32,
    /// The CPU's wins.
    pub cpu_score: u32,
    /// Whether input is currently refused.
    pub locked: bool,
    /// The status line in the configured locale.
    pub status: String,
}
