use std::time::Duration;

use hoi_core::{Direction, Hand, RandomChoice, Scoreboard, SeededChoice, Side, choose};
use tracing::{debug, info, trace};

use crate::config::EngineConfig;
use crate::event::{EventLog, EventRecord, RoundEvent};
use crate::narrator::{Narrator, Phrase, SilentNarrator};
use crate::phase::{Phase, Pointer};
use crate::scheduler::{Continuation, ManualScheduler, Scheduler, Step};
use crate::view::RoundView;

/// The round state machine.
///
/// Owns the phase, both sides' hands and directions, the scoreboard, and the
/// input lock. Every transition triggered by input is split in two: the
/// immediate half runs inside [`submit_hand`](Self::submit_hand) or
/// [`submit_direction`](Self::submit_direction) and locks the engine; the
/// delayed half is a [`Continuation`] that runs from [`tick`](Self::tick)
/// once the scheduler reports it due, and unlocks it.
///
/// Input that arrives in the wrong phase or while locked is ignored.
pub struct RoundEngine<S: Scheduler> {
    config: EngineConfig,
    scheduler: S,
    choice: Box<dyn RandomChoice>,
    narrator: Box<dyn Narrator>,
    scores: Scoreboard,
    events: EventLog,
    phase: Phase,
    player_hand: Option<Hand>,
    cpu_hand: Option<Hand>,
    player_direction: Option<Direction>,
    cpu_direction: Option<Direction>,
    /// Drawn when the pointer is designated, revealed on direction input.
    preselected_cpu_direction: Option<Direction>,
    pointer: Option<Pointer>,
    locked: bool,
    /// Bumped on every new round; continuations from older rounds are dropped.
    generation: u64,
    status: Phrase,
}

impl<S: Scheduler> std::fmt::Debug for RoundEngine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoundEngine")
            .field("phase", &self.phase)
            .field("locked", &self.locked)
            .field("generation", &self.generation)
            .field("scores", &self.scores)
            .field("pending", &self.scheduler.pending())
            .finish()
    }
}

impl<S: Scheduler> RoundEngine<S> {
    /// Create an engine in the janken phase with a silent narrator.
    ///
    /// The CPU draws from a [`SeededChoice`] built from `config.seed`, or
    /// from OS entropy when no seed is set.
    pub fn new(config: EngineConfig, scheduler: S) -> Self {
        let choice = match config.seed {
            Some(seed) => SeededChoice::new(seed),
            None => SeededChoice::from_entropy(),
        };
        let events = EventLog::new(config.max_events);
        Self {
            config,
            scheduler,
            choice: Box::new(choice),
            narrator: Box::new(SilentNarrator),
            scores: Scoreboard::new(),
            events,
            phase: Phase::Janken,
            player_hand: None,
            cpu_hand: None,
            player_direction: None,
            cpu_direction: None,
            preselected_cpu_direction: None,
            pointer: None,
            locked: false,
            generation: 0,
            status: Phrase::RoundPrompt,
        }
    }

    /// Replace the CPU's random source.
    pub fn with_choice(mut self, choice: impl RandomChoice + 'static) -> Self {
        self.choice = Box::new(choice);
        self
    }

    /// Replace the narrator.
    pub fn with_narrator(mut self, narrator: impl Narrator + 'static) -> Self {
        self.narrator = Box::new(narrator);
        self
    }

    /// Throw the player's hand. Only accepted in janken while unlocked.
    ///
    /// The CPU draws its hand at once. Equal hands are a tie: the round
    /// restarts immediately with both hands cleared. Otherwise the janken
    /// winner becomes the pointer, the CPU's direction is drawn and kept
    /// hidden, and the pointing round opens after the reveal delay.
    pub fn submit_hand(&mut self, hand: Hand) {
        if self.locked || self.phase != Phase::Janken {
            debug!(%hand, phase = %self.phase, locked = self.locked, "hand ignored");
            return;
        }
        self.locked = true;

        let cpu: Hand = choose(&mut *self.choice);
        self.player_hand = Some(hand);
        self.cpu_hand = Some(cpu);
        self.narrate(Phrase::Chant(hand));

        if hand == cpu {
            info!(%hand, "tie");
            self.record(RoundEvent::Tie { hand });
            self.set_status(Phrase::Tie);
            self.player_hand = None;
            self.cpu_hand = None;
            self.locked = false;
            return;
        }

        let pointer = if hand.beats(cpu) {
            Pointer::PlayerPoints
        } else {
            Pointer::CpuPoints
        };
        self.pointer = Some(pointer);
        self.preselected_cpu_direction = Some(choose(&mut *self.choice));
        info!(player = %hand, cpu = %cpu, %pointer, "janken decided");

        self.record(RoundEvent::HandResult {
            pointer,
            player_hand: hand,
            cpu_hand: cpu,
        });
        self.set_status(match pointer {
            Pointer::PlayerPoints => Phrase::PlayerPoints,
            Pointer::CpuPoints => Phrase::CpuPoints,
        });
        self.schedule(self.config.reveal_delay, Step::EnterPointing);
    }

    /// Commit the player's direction. Only accepted while pointing and unlocked.
    ///
    /// Reveals the CPU's preselected direction at once; the round resolves
    /// after the resolve delay.
    pub fn submit_direction(&mut self, direction: Direction) {
        if self.locked || self.phase != Phase::Pointing {
            debug!(%direction, phase = %self.phase, locked = self.locked, "direction ignored");
            return;
        }
        self.locked = true;

        self.player_direction = Some(direction);
        let cpu = match self.preselected_cpu_direction.take() {
            Some(preselected) => preselected,
            None => {
                debug!("no preselected cpu direction, drawing a fresh one");
                choose(&mut *self.choice)
            }
        };
        self.cpu_direction = Some(cpu);

        self.record(RoundEvent::DirectionsRevealed {
            player: direction,
            cpu,
        });
        self.narrate(Phrase::Hoi);
        self.schedule(self.config.resolve_delay, Step::Resolve);
    }

    /// Clear the round and return to janken. Scores are kept.
    ///
    /// Also unlocks the engine; any continuation still pending from the
    /// abandoned round is dropped when it comes due.
    pub fn start_new_round(&mut self) {
        self.generation += 1;
        self.player_hand = None;
        self.cpu_hand = None;
        self.player_direction = None;
        self.cpu_direction = None;
        self.preselected_cpu_direction = None;
        self.pointer = None;
        self.locked = false;
        self.enter(Phase::Janken);
        self.set_status(Phrase::RoundPrompt);
    }

    /// Zero both scores and start a new round.
    pub fn reset_match(&mut self) {
        self.scores.reset();
        self.record(RoundEvent::ScoresReset);
        self.start_new_round();
    }

    /// Run every continuation that has come due. Returns how many were
    /// applied; stale ones are dropped and not counted.
    pub fn tick(&mut self) -> usize {
        let mut fired = 0;
        for continuation in self.scheduler.take_due() {
            if self.fire(continuation) {
                fired += 1;
            }
        }
        fired
    }

    fn fire(&mut self, continuation: Continuation) -> bool {
        if continuation.generation != self.generation {
            debug!(
                step = ?continuation.step,
                scheduled = continuation.generation,
                current = self.generation,
                "stale continuation dropped"
            );
            return false;
        }
        match continuation.step {
            Step::EnterPointing => {
                if self.phase != Phase::Janken || !self.locked || self.pointer.is_none() {
                    debug!(phase = %self.phase, "enter-pointing no longer applies");
                    return false;
                }
                self.cpu_direction = None;
                self.enter(Phase::Pointing);
                self.locked = false;
                self.narrate(Phrase::PointingPrompt);
                true
            }
            Step::Resolve => {
                if self.phase != Phase::Pointing || !self.locked {
                    debug!(phase = %self.phase, "resolve no longer applies");
                    return false;
                }
                self.resolve();
                true
            }
        }
    }

    fn resolve(&mut self) {
        let matched =
            self.player_direction.is_some() && self.player_direction == self.cpu_direction;
        let (event, phrase) = match (self.pointer.take(), matched) {
            (Some(Pointer::PlayerPoints), true) => {
                self.scores.increment(Side::Player);
                (RoundEvent::PlayerWins, Phrase::PlayerWins)
            }
            (Some(Pointer::CpuPoints), true) => {
                self.scores.increment(Side::Cpu);
                (RoundEvent::PlayerLoses, Phrase::PlayerLoses)
            }
            _ => (RoundEvent::NoDecision, Phrase::NoDecision),
        };
        info!(result = %event, scores = %self.scores, "round decided");

        self.record(event);
        self.set_status(phrase);
        self.enter(Phase::Deciding);
        self.locked = false;
    }

    fn enter(&mut self, to: Phase) {
        let from = self.phase;
        if from == to {
            return;
        }
        self.phase = to;
        self.record(RoundEvent::PhaseChanged { from, to });
    }

    fn schedule(&mut self, delay: Duration, step: Step) {
        trace!(?step, ?delay, generation = self.generation, "continuation scheduled");
        self.scheduler
            .schedule(delay, Continuation::new(step, self.generation));
    }

    fn record(&mut self, event: RoundEvent) {
        let now = self.scheduler.now();
        self.events.push(now, event);
    }

    fn set_status(&mut self, phrase: Phrase) {
        self.status = phrase;
        self.narrate(phrase);
    }

    fn narrate(&mut self, phrase: Phrase) {
        if !self.config.narrator.enabled {
            return;
        }
        let line = phrase.text(self.config.narrator.locale);
        trace!(key = phrase.key(), %line, "narrate");
        self.narrator.say(&line);
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The player's hand, if thrown this round.
    pub fn player_hand(&self) -> Option<Hand> {
        self.player_hand
    }

    /// The CPU's hand, if thrown this round.
    pub fn cpu_hand(&self) -> Option<Hand> {
        self.cpu_hand
    }

    /// The player's direction, if chosen this round.
    pub fn player_direction(&self) -> Option<Direction> {
        self.player_direction
    }

    /// The CPU's direction. Absent until the player's direction is in.
    pub fn cpu_direction(&self) -> Option<Direction> {
        self.cpu_direction
    }

    /// The player's wins.
    pub fn player_score(&self) -> u32 {
        self.scores.player()
    }

    /// The CPU's wins.
    pub fn cpu_score(&self) -> u32 {
        self.scores.cpu()
    }

    /// Both scores.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scores
    }

    /// Whether input is currently refused.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// The phrase shown on the status line.
    pub fn status(&self) -> Phrase {
        self.status
    }

    /// The status line rendered in the configured locale.
    pub fn status_text(&self) -> String {
        self.status.text(self.config.narrator.locale)
    }

    /// Snapshot of all observable state.
    pub fn view(&self) -> RoundView {
        RoundView {
            phase: self.phase,
            player_hand: self.player_hand,
            cpu_hand: self.cpu_hand,
            player_direction: self.player_direction,
            cpu_direction: self.cpu_direction,
            player_score: self.scores.player(),
            cpu_score: self.scores.cpu(),
            locked: self.locked,
            status: self.status_text(),
        }
    }

    /// Events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<RoundEvent> {
        self.events.drain_new()
    }

    /// Every retained event record.
    pub fn events(&self) -> &[EventRecord] {
        self.events.records()
    }

    /// Number of events recorded since construction, trimmed ones included.
    pub fn events_recorded(&self) -> u64 {
        self.events.total()
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The scheduler holding pending continuations.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the scheduler, e.g. to advance a manual clock.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

impl RoundEngine<ManualScheduler> {
    /// Advance the virtual clock and fire whatever came due.
    pub fn advance(&mut self, by: Duration) -> usize {
        self.scheduler.advance(by);
        self.tick()
    }

    /// Advance the virtual clock until nothing is pending.
    pub fn settle(&mut self) -> usize {
        let mut fired = 0;
        while let Some(wait) = self.scheduler.next_due_in() {
            fired += self.advance(wait);
        }
        fired
    }
}
