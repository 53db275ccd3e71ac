//! Synchronization primitives for hosting games across threads.
//!
//! [`GameState`] itself has no interior locking; hosts that touch one game
//! from several threads share it through [`SharedSession`].

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::board::{GameError, GameState, Move, MoveList, Square, Status};
use crate::events::{EventSink, NullSink};
use crate::session::Session;

/// A cloneable handle to one session behind a lock.
///
/// Each operation takes the lock once, so an apply or undo is never observed
/// half done. Separate sessions never contend.
#[derive(Debug)]
pub struct SharedSession<S: EventSink = NullSink>(Arc<Mutex<Session<S>>>);

impl<S: EventSink> Clone for SharedSession<S> {
    fn clone(&self) -> Self {
        SharedSession(Arc::clone(&self.0))
    }
}

impl Default for SharedSession<NullSink> {
    fn default() -> Self {
        SharedSession::new(Session::default())
    }
}

impl<S: EventSink> SharedSession<S> {
    #[must_use]
    pub fn new(session: Session<S>) -> Self {
        SharedSession(Arc::new(Mutex::new(session)))
    }

    /// Apply a move under the lock.
    ///
    /// # Errors
    /// Whatever [`GameState::apply`] returns.
    pub fn apply(&self, mv: Move) -> Result<Status, GameError> {
        self.0.lock().apply(mv)
    }

    /// Undo under the lock.
    ///
    /// # Errors
    /// Whatever [`GameState::undo`] returns.
    pub fn undo(&self) -> Result<Move, GameError> {
        self.0.lock().undo()
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.0.lock().game().status()
    }

    #[must_use]
    pub fn legal_moves_from(&self, from: Square) -> MoveList {
        self.0.lock().game().legal_moves_from(from)
    }

    /// A copy of the game as it stands now.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.0.lock().game().clone()
    }

    /// Run `f` with the session locked, for compound operations.
    pub fn with<R>(&self, f: impl FnOnce(&mut Session<S>) -> R) -> R {
        f(&mut self.0.lock())
    }

    /// Hold the lock directly.
    pub fn lock(&self) -> MutexGuard<'_, Session<S>> {
        self.0.lock()
    }
}
