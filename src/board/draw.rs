//! Claimable draws.
//!
//! None of these end the game: `apply` keeps accepting moves, and it is up to
//! the host to offer or enforce the draw.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::game::GameState;
use super::{Board, PieceKind, Square};

/// Half-moves without a pawn move or capture after which a draw may be claimed.
pub const FIFTY_MOVE_HALFMOVES: u32 = 100;

/// Occurrences of one position that allow a repetition claim.
pub const REPETITION_LIMIT: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DrawReason {
    FiftyMoveRule,
    ThreefoldRepetition,
    InsufficientMaterial,
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DrawReason::FiftyMoveRule => "fifty-move rule",
            DrawReason::ThreefoldRepetition => "threefold repetition",
            DrawReason::InsufficientMaterial => "insufficient material",
        };
        write!(f, "{text}")
    }
}

impl GameState {
    /// The first draw condition that holds in the current position, if any.
    #[must_use]
    pub fn draw_reason(&self) -> Option<DrawReason> {
        if self.halfmove_clock() >= FIFTY_MOVE_HALFMOVES {
            Some(DrawReason::FiftyMoveRule)
        } else if self.repetition_count() >= REPETITION_LIMIT {
            Some(DrawReason::ThreefoldRepetition)
        } else if is_insufficient_material(self.board()) {
            Some(DrawReason::InsufficientMaterial)
        } else {
            None
        }
    }
}

/// True if neither side can possibly deliver mate.
///
/// Covers bare kings, a single minor piece, and any number of bishops all
/// standing on one square colour.
#[must_use]
pub fn is_insufficient_material(board: &Board) -> bool {
    let mut minors: Vec<(Square, PieceKind)> = Vec::new();
    for (square, piece) in board.pieces() {
        match piece.kind {
            PieceKind::King => {}
            PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
            PieceKind::Knight | PieceKind::Bishop => minors.push((square, piece.kind)),
        }
    }

    if minors.len() <= 1 {
        return true;
    }

    if minors.iter().any(|&(_, kind)| kind == PieceKind::Knight) {
        return false;
    }
    let first_is_dark = minors[0].0.is_dark();
    minors
        .iter()
        .all(|&(square, _)| square.is_dark() == first_is_dark)
}
