//! Core types for hoi.
//!
//! Holds the values both players choose between ([`Hand`] for janken,
//! [`Direction`] for the pointing round), the uniform random source the CPU
//! draws from, and the [`Scoreboard`] that persists across rounds.

pub mod choice;
pub mod direction;
pub mod error;
pub mod hand;
pub mod score;

pub use choice::{Enumerated, RandomChoice, ScriptedChoice, SeededChoice, choose};
pub use direction::Direction;
pub use error::{CoreError, CoreResult};
pub use hand::Hand;
pub use score::{Scoreboard, Side};
