//! Check and terminal-state classification.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::attacks::is_in_check;
use super::legality::filter_legal;
use super::{Board, CastlingRights, Color, Square};

/// Where the side to move stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    Normal,
    Check,
    Checkmate,
    Stalemate,
}

impl Status {
    /// True for checkmate and stalemate.
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Status::Checkmate | Status::Stalemate)
    }

    /// The game phase this status puts the session in.
    #[inline]
    #[must_use]
    pub const fn phase(self) -> Phase {
        match self {
            Status::Normal | Status::Check => Phase::InProgress,
            Status::Checkmate => Phase::Checkmate,
            Status::Stalemate => Phase::Stalemate,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Normal => "normal",
            Status::Check => "check",
            Status::Checkmate => "checkmate",
            Status::Stalemate => "stalemate",
        };
        write!(f, "{name}")
    }
}

/// Session phase; `Checkmate` and `Stalemate` accept no further moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phase {
    InProgress,
    Checkmate,
    Stalemate,
}

/// Classify the position for `side`.
///
/// Only the first legal move is ever generated: its existence is all the
/// classification needs.
#[must_use]
pub fn status(
    board: &Board,
    side: Color,
    rights: CastlingRights,
    en_passant: Option<Square>,
) -> Status {
    let in_check = is_in_check(board, side);
    let has_moves = filter_legal(board, side, rights, en_passant)
        .next()
        .is_some();

    match (in_check, has_moves) {
        (true, false) => Status::Checkmate,
        (false, false) => Status::Stalemate,
        (true, true) => Status::Check,
        (false, true) => Status::Normal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, PieceKind};

    fn board_with(pieces: &[(&str, Color, PieceKind)]) -> Board {
        let mut board = Board::empty();
        for &(name, color, kind) in pieces {
            board.set_piece(name.parse().unwrap(), Piece::new(color, kind));
        }
        board
    }

    #[test]
    fn test_starting_position_is_normal() {
        let board = Board::new();
        assert_eq!(
            status(&board, Color::White, CastlingRights::all(), None),
            Status::Normal
        );
    }

    #[test]
    fn test_back_rank_mate() {
        let board = board_with(&[
            ("h8", Color::Black, PieceKind::King),
            ("g7", Color::Black, PieceKind::Pawn),
            ("h7", Color::Black, PieceKind::Pawn),
            ("a8", Color::White, PieceKind::Rook),
            ("g1", Color::White, PieceKind::King),
        ]);
        let result = status(&board, Color::Black, CastlingRights::none(), None);
        assert_eq!(result, Status::Checkmate);
        assert!(result.is_terminal());
        assert_eq!(result.phase(), Phase::Checkmate);
    }

    #[test]
    fn test_queen_stalemate() {
        let board = board_with(&[
            ("h8", Color::Black, PieceKind::King),
            ("f7", Color::White, PieceKind::Queen),
            ("g6", Color::White, PieceKind::King),
        ]);
        let result = status(&board, Color::Black, CastlingRights::none(), None);
        assert_eq!(result, Status::Stalemate);
        assert_eq!(result.phase(), Phase::Stalemate);
    }

    #[test]
    fn test_check_with_escape() {
        let board = board_with(&[
            ("e8", Color::Black, PieceKind::King),
            ("e1", Color::White, PieceKind::Rook),
            ("a1", Color::White, PieceKind::King),
        ]);
        let result = status(&board, Color::Black, CastlingRights::none(), None);
        assert_eq!(result, Status::Check);
        assert!(!result.is_terminal());
        assert_eq!(result.phase(), Phase::InProgress);
    }
}
