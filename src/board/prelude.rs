//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let game = GameState::new();
//! assert_eq!(game.status(), Status::Normal);
//! ```

pub use super::{
    Board, CastleSide, CastlingRights, Color, GameError, GameState, Move, MoveKind, MoveList,
    MoveParseError, Phase, Piece, PieceKind, PositionBuilder, Square, Status,
};
