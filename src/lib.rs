//! Chess rules core: move generation, legality, check and terminal detection,
//! and a game state with exact apply and undo.
//!
//! The crate does no I/O. Hosts drive a [`GameState`] directly, or wrap it in
//! a [`session::Session`] to receive [`events::GameEvent`]s, or share one
//! across threads with [`sync::SharedSession`].

pub mod board;
pub mod events;
pub mod session;
pub mod sync;
pub mod zobrist;

pub use board::{Board, Color, GameError, GameState, Move, Piece, PieceKind, Square, Status};
pub use events::{EventLog, EventSink, GameEvent, NullSink};
pub use session::Session;
pub use sync::SharedSession;

#[cfg(feature = "logging")]
pub use events::LogSink;
