//! An event-emitting wrapper around [`GameState`].

use crate::board::{GameError, GameState, Move, Status};
use crate::events::{EventSink, GameEvent, NullSink};

/// One game plus the sink that hears about it.
///
/// Every mutation goes through the wrapped [`GameState`] unchanged; the
/// session only reports the outcome. Exactly one `SessionEnded` closes the
/// log: on checkmate or stalemate, or from [`Session::into_parts`] with
/// whatever status the game had when the host gave up on it.
///
/// # Example
/// ```
/// use chess_rules::events::{EventLog, GameEvent};
/// use chess_rules::session::Session;
///
/// let mut session = Session::new(EventLog::new());
/// let mv = session.game().parse_move("e2e4").unwrap();
/// session.apply(mv).unwrap();
/// assert!(matches!(session.sink().last(), Some(GameEvent::MoveApplied { .. })));
/// ```
#[derive(Clone, Debug)]
pub struct Session<S: EventSink = NullSink> {
    game: GameState,
    sink: S,
    ended: bool,
}

impl Default for Session<NullSink> {
    fn default() -> Self {
        Session::new(NullSink)
    }
}

impl<S: EventSink> Session<S> {
    /// Start a standard game.
    pub fn new(sink: S) -> Self {
        Self::with_game(GameState::new(), sink)
    }

    /// Start from an existing position or a restored game.
    ///
    /// A game that is already over is reported as ended straight away.
    pub fn with_game(game: GameState, sink: S) -> Self {
        let mut session = Session {
            game,
            sink,
            ended: false,
        };
        let status = session.game.status();
        session.sink.record(&GameEvent::SessionStarted {
            side_to_move: session.game.side_to_move(),
            status,
        });
        if status.is_terminal() {
            session.end(status);
        }
        session
    }

    #[must_use]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Apply `mv`, reporting the outcome.
    ///
    /// # Errors
    /// Whatever [`GameState::apply`] returns.
    pub fn apply(&mut self, mv: Move) -> Result<Status, GameError> {
        match self.game.apply(mv) {
            Ok(status) => {
                self.sink.record(&GameEvent::MoveApplied { mv, status });
                if status.is_terminal() {
                    self.end(status);
                }
                Ok(status)
            }
            Err(error) => {
                self.sink.record(&GameEvent::MoveRejected { error });
                Err(error)
            }
        }
    }

    /// Undo the last move, reporting the outcome.
    ///
    /// # Errors
    /// Whatever [`GameState::undo`] returns.
    pub fn undo(&mut self) -> Result<Move, GameError> {
        match self.game.undo() {
            Ok(mv) => {
                // Taking back a mate reopens the game.
                self.ended = false;
                self.sink.record(&GameEvent::MoveUndone { mv });
                Ok(mv)
            }
            Err(error) => {
                self.sink.record(&GameEvent::UndoRejected { error });
                Err(error)
            }
        }
    }

    /// Close the session and hand back its parts.
    ///
    /// Emits `SessionEnded` with the current status unless the game already
    /// ended on the board.
    pub fn into_parts(mut self) -> (GameState, S) {
        if !self.ended {
            let status = self.game.status();
            self.end(status);
        }
        (self.game, self.sink)
    }

    fn end(&mut self, status: Status) {
        self.sink.record(&GameEvent::SessionEnded { status });
        self.ended = true;
    }
}
