//! Uniform random selection over small enumerated sets.
//!
//! The CPU draws its hand and its direction through a [`RandomChoice`]
//! source. [`SeededChoice`] is the real source; [`ScriptedChoice`] replays a
//! fixed sequence of draws so a round can be forced down a known path.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A finite set of values that can be drawn from.
pub trait Enumerated: Copy + PartialEq + 'static {
    /// Every value of the set. Never empty.
    const ALL: &'static [Self];

    /// Position of this value within [`Enumerated::ALL`].
    fn index(self) -> usize {
        Self::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }
}

/// A source of uniformly distributed indices.
pub trait RandomChoice {
    /// Return an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Draw one value of `E` with uniform probability.
pub fn choose<E: Enumerated>(source: &mut dyn RandomChoice) -> E {
    let all = E::ALL;
    all[source.pick(all.len()) % all.len()]
}

/// A [`RandomChoice`] backed by a seeded `StdRng`.
#[derive(Debug, Clone)]
pub struct SeededChoice {
    rng: StdRng,
}

impl SeededChoice {
    /// Create a deterministic source from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RandomChoice for SeededChoice {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// A [`RandomChoice`] that replays queued draws in order.
///
/// Once the queue is exhausted every draw returns the first value of the set.
#[derive(Debug, Clone, Default)]
pub struct ScriptedChoice {
    queue: VecDeque<usize>,
}

impl ScriptedChoice {
    /// Create an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `value` as the result of the next unconsumed draw.
    pub fn then<E: Enumerated>(mut self, value: E) -> Self {
        self.queue.push_back(value.index());
        self
    }
}

impl RandomChoice for ScriptedChoice {
    fn pick(&mut self, len: usize) -> usize {
        self.queue.pop_front().map(|i| i % len).unwrap_or(0)
    }
}
