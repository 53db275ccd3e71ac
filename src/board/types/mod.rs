//! Core chess types.
//!
//! This module contains the value types used throughout the crate:
//! - `Piece`, `PieceKind` and `Color`
//! - `Square` - board coordinate (rank, file)
//! - `Move`, `MoveKind` and `MoveList` - move representation
//! - `CastlingRights` and `CastleSide` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastleSide, CastlingRights};
pub use moves::{Move, MoveKind, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
