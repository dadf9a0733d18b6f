//! Narration for the talking character.
//!
//! The engine hands finished phrases to a [`Narrator`] at fixed points of a
//! round. Speaking is fire-and-forget: nothing comes back.

mod config;
mod phrases;

use std::cell::RefCell;
use std::rc::Rc;

pub use config::{Locale, NarratorConfig};
pub use phrases::Phrase;

/// Something that voices phrases: a speech synthesizer, a terminal, a log.
pub trait Narrator {
    /// Speak a line. Must not block on the speech finishing.
    fn say(&mut self, line: &str);
}

/// A narrator that drops every line.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNarrator;

impl Narrator for SilentNarrator {
    fn say(&mut self, _line: &str) {}
}

/// Shared handle to the lines a [`RecordingNarrator`] has heard.
#[derive(Debug, Default, Clone)]
pub struct Transcript(Rc<RefCell<Vec<String>>>);

impl Transcript {
    /// Copy of every line spoken so far.
    pub fn lines(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    /// The most recent line.
    pub fn last(&self) -> Option<String> {
        self.0.borrow().last().cloned()
    }

    /// Number of lines spoken.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// `true` when nothing has been spoken.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

/// A narrator that keeps a transcript instead of speaking.
#[derive(Debug, Default)]
pub struct RecordingNarrator {
    transcript: Transcript,
}

impl RecordingNarrator {
    /// Create a narrator with an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle that stays valid after the narrator moves into an engine.
    pub fn transcript(&self) -> Transcript {
        self.transcript.clone()
    }
}

impl Narrator for RecordingNarrator {
    fn say(&mut self, line: &str) {
        self.transcript.0.borrow_mut().push(line.to_string());
    }
}
