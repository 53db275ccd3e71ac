//! Structured game events for an external logger.
//!
//! The rules core never writes output itself. A [`Session`](crate::session::Session)
//! reports what happened through an [`EventSink`], and the host decides where
//! the events go.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, GameError, Move, Status};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameEvent {
    SessionStarted { side_to_move: Color, status: Status },
    MoveApplied { mv: Move, status: Status },
    MoveRejected { error: GameError },
    MoveUndone { mv: Move },
    UndoRejected { error: GameError },
    /// Emitted once when a move ends the game.
    SessionEnded { status: Status },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::SessionStarted {
                side_to_move,
                status,
            } => write!(f, "session started, {side_to_move} to move ({status})"),
            GameEvent::MoveApplied { mv, status } => write!(f, "applied {mv} ({status})"),
            GameEvent::MoveRejected { error } => write!(f, "rejected move: {error}"),
            GameEvent::MoveUndone { mv } => write!(f, "undid {mv}"),
            GameEvent::UndoRejected { error } => write!(f, "rejected undo: {error}"),
            GameEvent::SessionEnded { status } => write!(f, "session ended by {status}"),
        }
    }
}

/// Receiver of game events.
pub trait EventSink {
    fn record(&mut self, event: &GameEvent);
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&mut self, _event: &GameEvent) {}
}

/// Keeps every event in memory, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    #[must_use]
    pub fn last(&self) -> Option<&GameEvent> {
        self.events.last()
    }

    /// Hand over the recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for EventLog {
    fn record(&mut self, event: &GameEvent) {
        self.events.push(*event);
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn record(&mut self, event: &GameEvent) {
        (**self).record(event);
    }
}

/// Forwards events to the `log` facade under the `chess_rules` target.
///
/// Rejections are logged at `warn`, everything else at `info`.
#[cfg(feature = "logging")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

#[cfg(feature = "logging")]
impl EventSink for LogSink {
    fn record(&mut self, event: &GameEvent) {
        match event {
            GameEvent::MoveRejected { .. } | GameEvent::UndoRejected { .. } => {
                log::warn!(target: "chess_rules", "{event}");
            }
            _ => log::info!(target: "chess_rules", "{event}"),
        }
    }
}
