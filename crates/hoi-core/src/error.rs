//! Error types for the core crate.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors produced while turning player input into core values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The input did not name a rock, scissors, or paper hand.
    #[error("unknown hand: {0}")]
    UnknownHand(String),

    /// The input did not name a left, right, up, or down direction.
    #[error("unknown direction: {0}")]
    UnknownDirection(String),
}
