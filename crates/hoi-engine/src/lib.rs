//! Round state machine for hoi.
//!
//! A round is a game of janken followed, when the hands differ, by a
//! pointing round ("acchi muite hoi"). [`RoundEngine`] owns the round phase,
//! both sides' choices, the [`hoi_core::Scoreboard`], and an input lock. It
//! drives its own transitions through delayed continuations handed to an
//! injected [`Scheduler`], and reports what happened through [`RoundEvent`]s
//! and phrases spoken by a [`Narrator`].

/// Engine configuration and builders.
pub mod config;
/// The round state machine.
pub mod engine;
/// Error types for the engine crate.
pub mod error;
/// Round events and the event log.
pub mod event;
/// Narration collaborators and the phrase catalog.
pub mod narrator;
/// Round phases and pointer designation.
pub mod phase;
/// Delayed continuation scheduling.
pub mod scheduler;
/// Serializable snapshots of observable engine state.
pub mod view;

/// Re-export of [`config::EngineConfig`].
pub use config::EngineConfig;
/// Re-export of [`engine::RoundEngine`].
pub use engine::RoundEngine;
/// Re-exports of [`error::EngineError`] and [`error::EngineResult`].
pub use error::{EngineError, EngineResult};
/// Re-exports of [`event::EventLog`], [`event::EventRecord`], and [`event::RoundEvent`].
pub use event::{EventLog, EventRecord, RoundEvent};
/// Re-exports of the narrator types.
pub use narrator::{
    Locale, Narrator, NarratorConfig, Phrase, RecordingNarrator, SilentNarrator, Transcript,
};
/// Re-exports of [`phase::Phase`] and [`phase::Pointer`].
pub use phase::{Phase, Pointer};
/// Re-exports of the scheduler types.
pub use scheduler::{Continuation, ManualScheduler, Scheduler, Step, WallClockScheduler};
/// Re-export of [`view::RoundView`].
pub use view::RoundView;
