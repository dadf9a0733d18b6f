use std::time::Duration;

use hoi_core::{Direction, Hand};
use serde::Serialize;

use crate::phase::{Phase, Pointer};

/// Something the presentation layer should narrate or animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum RoundEvent {
    /// Both sides threw the same hand. The round restarts at janken.
    Tie {
        /// The hand both sides threw.
        hand: Hand,
    },
    /// The hands differed and a pointer was designated.
    HandResult {
        /// Which side points in the coming pointing round.
        pointer: Pointer,
        /// The player's hand.
        player_hand: Hand,
        /// The CPU's hand.
        cpu_hand: Hand,
    },
    /// The round moved to a new phase.
    PhaseChanged {
        /// The phase that was left.
        from: Phase,
        /// The phase that was entered.
        to: Phase,
    },
    /// Both directions are now visible.
    DirectionsRevealed {
        /// The player's direction.
        player: Direction,
        /// The CPU's direction, fixed since the pointer was designated.
        cpu: Direction,
    },
    /// The player pointed where the CPU looked. The player scores.
    PlayerWins,
    /// The CPU pointed where the player looked. The CPU scores.
    PlayerLoses,
    /// The directions differed. Nobody scores.
    NoDecision,
    /// Both scores were cleared.
    ScoresReset,
}

impl RoundEvent {
    /// `true` for the three events that end a pointing round.
    pub fn is_decision(&self) -> bool {
        matches!(self, Self::PlayerWins | Self::PlayerLoses | Self::NoDecision)
    }
}

impl std::fmt::Display for RoundEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tie { hand } => write!(f, "tie ({hand})"),
            Self::HandResult {
                pointer,
                player_hand,
                cpu_hand,
            } => write!(f, "{player_hand} vs {cpu_hand}: {pointer}"),
            Self::PhaseChanged { from, to } => write!(f, "{from} -> {to}"),
            Self::DirectionsRevealed { player, cpu } => {
                write!(f, "player {player}, cpu {cpu}")
            }
            Self::PlayerWins => write!(f, "player wins"),
            Self::PlayerLoses => write!(f, "player loses"),
            Self::NoDecision => write!(f, "no decision"),
            Self::ScoresReset => write!(f, "scores reset"),
        }
    }
}

/// A logged event with its position and scheduler time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    /// Monotonic sequence number, starting at 0.
    pub seq: u64,
    /// Scheduler time when the event was recorded.
    pub at: Duration,
    /// What happened.
    pub event: RoundEvent,
}

/// Accumulates events over a session.
///
/// Keeps a read cursor so the presentation can drain only what is new.
#[derive(Debug, Default)]
pub struct EventLog {
    records: Vec<EventRecord>,
    max_events: usize,
    next_seq: u64,
    read_seq: u64,
}

impl EventLog {
    /// Create a new event log with the given maximum capacity (0 = unlimited).
    pub fn new(max_events: usize) -> Self {
        Self {
            max_events,
            ..Self::default()
        }
    }

    /// Append an event, dropping the oldest records if the log exceeds its capacity.
    pub fn push(&mut self, at: Duration, event: RoundEvent) {
        self.records.push(EventRecord {
            seq: self.next_seq,
            at,
            event,
        });
        self.next_seq += 1;
        if self.max_events > 0 && self.records.len() > self.max_events {
            let drain_count = self.records.len() - self.max_events;
            self.records.drain(..drain_count);
        }
    }

    /// Return every record still retained.
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    /// Return records not yet drained and advance the read cursor.
    ///
    /// Records trimmed by the capacity limit before being drained are lost.
    pub fn drain_new(&mut self) -> Vec<RoundEvent> {
        let fresh = self
            .records
            .iter()
            .filter(|r| r.seq >= self.read_seq)
            .map(|r| r.event)
            .collect();
        self.read_seq = self.next_seq;
        fresh
    }

    /// Total number of events ever recorded, trimmed ones included.
    pub fn total(&self) -> u64 {
        self.next_seq
    }

    /// Return the number of retained records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Return `true` if no records are retained.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    #[test]
    fn event_log_push_and_query() {
        let mut log = EventLog::new(0);
        log.push(at(0), RoundEvent::Tie { hand: Hand::Rock });
        log.push(at(10), RoundEvent::NoDecision);
        assert_eq!(log.len(), 2);
        assert_eq!(log.records()[1].seq, 1);
        assert_eq!(log.records()[1].at, at(10));
        assert!(log.records()[1].event.is_decision());
    }

    #[test]
    fn event_log_max_events_trims() {
        let mut log = EventLog::new(2);
        for i in 0..5 {
            log.push(at(i), RoundEvent::PlayerWins);
        }
        assert_eq!(log.len(), 2);
        assert_eq!(log.total(), 5);
        // Oldest events were dropped, newest remain
        assert_eq!(log.records()[0].seq, 3);
        assert_eq!(log.records()[1].seq, 4);
    }

    #[test]
    fn drain_returns_only_new_events() {
        let mut log = EventLog::new(0);
        log.push(at(0), RoundEvent::PlayerWins);
        assert_eq!(log.drain_new(), vec![RoundEvent::PlayerWins]);
        assert!(log.drain_new().is_empty());
        log.push(at(1), RoundEvent::ScoresReset);
        assert_eq!(log.drain_new(), vec![RoundEvent::ScoresReset]);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn decision_events() {
        assert!(RoundEvent::PlayerWins.is_decision());
        assert!(RoundEvent::PlayerLoses.is_decision());
        assert!(RoundEvent::NoDecision.is_decision());
        assert!(!RoundEvent::ScoresReset.is_decision());
    }

    #[test]
    fn serializes_with_event_tag() {
        let json = serde_json::to_value(RoundEvent::HandResult {
            pointer: Pointer::PlayerPoints,
            player_hand: Hand::Rock,
            cpu_hand: Hand::Scissors,
        })
        .unwrap();
        assert_eq!(json["event"], "hand-result");
        assert_eq!(json["pointer"], "player_points");
        assert_eq!(json["cpu_hand"], "scissors");
    }
}
