//! Chess board representation and game rules.
//!
//! A mailbox board with lazy move generation, legality by simulate-and-discard,
//! and a game state that applies and exactly undoes moves. Supports full chess
//! rules including castling, en passant, and promotions.
//!
//! # Example
//! ```
//! use chess_rules::board::{GameState, Square};
//!
//! let game = GameState::new();
//! let knight: Square = "g1".parse().unwrap();
//! let targets = game.legal_destinations(knight);
//! assert_eq!(targets.len(), 2);
//! println!("Starting position has {} legal moves", game.legal_moves().len());
//! ```

mod attacks;
mod builder;
mod draw;
mod error;
mod game;
mod history;
mod legality;
mod make_unmake;
mod movegen;
mod notation;
pub mod prelude;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::PositionBuilder;
pub use draw::{is_insufficient_material, DrawReason, FIFTY_MOVE_HALFMOVES, REPETITION_LIMIT};
pub use error::{GameError, MoveParseError, PositionError, SquareError};
pub use game::GameState;
pub use history::HistoryEntry;
pub use state::Board;
pub use status::{Phase, Status};
pub use types::{
    CastleSide, CastlingRights, Color, Move, MoveKind, MoveList, MoveListIntoIter, Piece,
    PieceKind, Square,
};

// Rule primitives for hosts that drive the pieces themselves
pub use attacks::{attackers_of, is_in_check, is_square_attacked};
pub use legality::{filter_legal, filter_legal_from};
pub use make_unmake::{apply_to_board, Capture, UndoInfo};
pub use movegen::generate_pseudo_legal;
pub use status::status;

pub(crate) use types::PROMOTION_PIECES;
