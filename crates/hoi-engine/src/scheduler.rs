//! Delayed continuations.
//!
//! The engine never sleeps. When a transition needs time for the
//! presentation to catch up, it hands a [`Continuation`] to its
//! [`Scheduler`] and locks itself. The owner of the engine calls
//! [`crate::RoundEngine::tick`], which fires whatever the scheduler reports
//! as due.

use std::time::{Duration, Instant};

/// The deferred half of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Leave janken and open the pointing round.
    EnterPointing,
    /// Compare directions, score, and show the result.
    Resolve,
}

/// A scheduled step tagged with the round generation it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Continuation {
    /// What to do when the delay elapses.
    pub step: Step,
    /// Round generation at scheduling time. Stale generations are dropped.
    pub generation: u64,
}

impl Continuation {
    /// Create a continuation for `step` in `generation`.
    pub fn new(step: Step, generation: u64) -> Self {
        Self { step, generation }
    }
}

/// A time source that can hold fire-once, non-cancellable continuations.
pub trait Scheduler {
    /// Time elapsed since the scheduler was created.
    fn now(&self) -> Duration;

    /// Queue `continuation` to become due `delay` from now.
    fn schedule(&mut self, delay: Duration, continuation: Continuation);

    /// Remove and return every due continuation, earliest first.
    fn take_due(&mut self) -> Vec<Continuation>;

    /// Time until the earliest pending continuation is due, if any.
    fn next_due_in(&self) -> Option<Duration>;

    /// Number of continuations not yet taken.
    fn pending(&self) -> usize;
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    due: Duration,
    seq: u64,
    continuation: Continuation,
}

/// Pending continuations ordered by due time, then by scheduling order.
#[derive(Debug, Default, Clone)]
struct Timeline {
    entries: Vec<Entry>,
    next_seq: u64,
}

impl Timeline {
    fn push(&mut self, due: Duration, continuation: Continuation) {
        self.entries.push(Entry {
            due,
            seq: self.next_seq,
            continuation,
        });
        self.next_seq += 1;
    }

    fn take_due(&mut self, now: Duration) -> Vec<Continuation> {
        let (mut due, waiting): (Vec<Entry>, Vec<Entry>) =
            std::mem::take(&mut self.entries)
                .into_iter()
                .partition(|e| e.due <= now);
        self.entries = waiting;
        due.sort_by_key(|e| (e.due, e.seq));
        due.into_iter().map(|e| e.continuation).collect()
    }

    fn next_due_in(&self, now: Duration) -> Option<Duration> {
        self.entries
            .iter()
            .map(|e| e.due.saturating_sub(now))
            .min()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// A virtual clock that only moves when told to.
///
/// Deterministic: tests and simulations advance it explicitly.
#[derive(Debug, Default, Clone)]
pub struct ManualScheduler {
    now: Duration,
    timeline: Timeline,
}

impl ManualScheduler {
    /// Create a clock at time zero with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward. Returns the new time.
    pub fn advance(&mut self, by: Duration) -> Duration {
        self.now += by;
        self.now
    }
}

impl Scheduler for ManualScheduler {
    fn now(&self) -> Duration {
        self.now
    }

    fn schedule(&mut self, delay: Duration, continuation: Continuation) {
        self.timeline.push(self.now + delay, continuation);
    }

    fn take_due(&mut self) -> Vec<Continuation> {
        self.timeline.take_due(self.now)
    }

    fn next_due_in(&self) -> Option<Duration> {
        self.timeline.next_due_in(self.now)
    }

    fn pending(&self) -> usize {
        self.timeline.len()
    }
}

/// A scheduler measured against the monotonic system clock.
#[derive(Debug, Clone)]
pub struct WallClockScheduler {
    start: Instant,
    timeline: Timeline,
}

impl Default for WallClockScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl WallClockScheduler {
    /// Start measuring from now.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            timeline: Timeline::default(),
        }
    }
}

impl Scheduler for WallClockScheduler {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }

    fn schedule(&mut self, delay: Duration, continuation: Continuation) {
        let due = self.now() + delay;
        self.timeline.push(due, continuation);
    }

    fn take_due(&mut self) -> Vec<Continuation> {
        let now = self.now();
        self.timeline.take_due(now)
    }

    fn next_due_in(&self) -> Option<Duration> {
        self.timeline.next_due_in(self.now())
    }

    fn pending(&self) -> usize {
        self.timeline.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn manual_initial_state() {
        let scheduler = ManualScheduler::new();
        assert_eq!(scheduler.now(), Duration::ZERO);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.next_due_in(), None);
    }

    #[test]
    fn nothing_due_before_delay() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(ms(100), Continuation::new(Step::EnterPointing, 0));
        scheduler.advance(ms(99));
        assert!(scheduler.take_due().is_empty());
        assert_eq!(scheduler.next_due_in(), Some(ms(1)));
        scheduler.advance(ms(1));
        assert_eq!(
            scheduler.take_due(),
            vec![Continuation::new(Step::EnterPointing, 0)]
        );
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn due_in_time_then_schedule_order() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(ms(50), Continuation::new(Step::Resolve, 2));
        scheduler.schedule(ms(10), Continuation::new(Step::EnterPointing, 1));
        scheduler.schedule(ms(50), Continuation::new(Step::Resolve, 3));
        scheduler.advance(ms(60));
        let generations: Vec<u64> = scheduler
            .take_due()
            .into_iter()
            .map(|c| c.generation)
            .collect();
        assert_eq!(generations, vec![1, 2, 3]);
    }

    #[test]
    fn zero_delay_is_due_immediately() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(Duration::ZERO, Continuation::new(Step::Resolve, 0));
        assert_eq!(scheduler.next_due_in(), Some(Duration::ZERO));
        assert_eq!(scheduler.take_due().len(), 1);
    }

    #[test]
    fn continuations_fire_once() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(ms(5), Continuation::new(Step::Resolve, 0));
        scheduler.advance(ms(5));
        assert_eq!(scheduler.take_due().len(), 1);
        assert!(scheduler.take_due().is_empty());
    }

    #[test]
    fn wall_clock_zero_delay() {
        let mut scheduler = WallClockScheduler::new();
        scheduler.schedule(Duration::ZERO, Continuation::new(Step::EnterPointing, 0));
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.take_due().len(), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn wall_clock_long_delay_stays_pending() {
        let mut scheduler = WallClockScheduler::new();
        scheduler.schedule(Duration::from_secs(3600), Continuation::new(Step::Resolve, 0));
        assert!(scheduler.take_due().is_empty());
        assert!(scheduler.next_due_in().is_some_and(|d| d > Duration::from_secs(3000)));
    }
}
