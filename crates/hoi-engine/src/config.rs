use std::time::Duration;

use crate::narrator::NarratorConfig;

/// Delay used for both continuations unless configured otherwise.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2500);

/// Configuration for a [`crate::RoundEngine`].
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed for the CPU's draws. `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Time between a janken result and the start of the pointing round.
    pub reveal_delay: Duration,
    /// Time between a direction reveal and the round's resolution.
    pub resolve_delay: Duration,
    /// Maximum event log size (oldest events dropped when exceeded). 0 = unlimited.
    pub max_events: usize,
    /// Narration settings.
    pub narrator: NarratorConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            reveal_delay: DEFAULT_DELAY,
            resolve_delay: DEFAULT_DELAY,
            max_events: 0,
            narrator: NarratorConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Seed the CPU's draws for a reproducible session.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the delay before the pointing round starts.
    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    /// Set the delay before a pointing round resolves.
    pub fn with_resolve_delay(mut self, delay: Duration) -> Self {
        self.resolve_delay = delay;
        self
    }

    /// Set both continuation delays at once.
    pub fn with_delay(self, delay: Duration) -> Self {
        self.with_reveal_delay(delay).with_resolve_delay(delay)
    }

    /// Set the maximum event log size (0 = unlimited).
    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = max;
        self
    }

    /// Set the narration settings.
    pub fn with_narrator(mut self, narrator: NarratorConfig) -> Self {
        self.narrator = narrator;
        self
    }
}
