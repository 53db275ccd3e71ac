//! Applying moves to boards, and taking them back.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, CastlingRights, Color, Move, MoveKind, Piece, Square};

/// A piece removed from the board by a move, and where it stood.
///
/// For en passant `square` is beside the destination, not the destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Capture {
    pub piece: Piece,
    pub square: Square,
}

/// Everything needed to take a move back that the board alone cannot tell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UndoInfo {
    pub captured: Option<Capture>,
    pub previous_castling_rights: CastlingRights,
    pub previous_en_passant_target: Option<Square>,
    pub previous_halfmove_clock: u32,
    pub previous_fullmove_number: u32,
    pub(crate) previous_key: u64,
    pub(crate) previous_repetition_count: u32,
}

/// Apply `mv` to a copy of `board`.
///
/// The input is left untouched. `mv` is trusted to describe the piece that
/// actually stands on `mv.from`; legality is the caller's concern.
#[must_use]
pub fn apply_to_board(board: &Board, mv: &Move) -> (Board, Option<Capture>) {
    let mut next = *board;
    let captured = make_on_board(&mut next, mv);
    (next, captured)
}

pub(crate) fn make_on_board(board: &mut Board, mv: &Move) -> Option<Capture> {
    let captured = mv.capture_square().and_then(|square| {
        board
            .remove_piece(square)
            .map(|piece| Capture { piece, square })
    });

    board.remove_piece(mv.from);
    match mv.kind {
        MoveKind::Castle(side) => {
            board.set_piece(mv.to, mv.piece);
            let (rook_from, rook_to) = side.rook_squares(mv.piece.color);
            if let Some(rook) = board.remove_piece(rook_from) {
                board.set_piece(rook_to, rook);
            }
        }
        MoveKind::Promotion(kind) => {
            board.set_piece(mv.to, Piece::new(mv.piece.color, kind));
        }
        MoveKind::Normal | MoveKind::DoublePush | MoveKind::EnPassant => {
            board.set_piece(mv.to, mv.piece);
        }
    }

    captured
}

/// Reverse [`make_on_board`]: put `mv.piece` (a pawn again after a
/// promotion) back on its origin, restore the castling rook and the captured
/// piece.
pub(crate) fn unmake_on_board(board: &mut Board, mv: &Move, captured: Option<Capture>) {
    board.remove_piece(mv.to);
    board.set_piece(mv.from, mv.piece);

    if let MoveKind::Castle(side) = mv.kind {
        let (rook_from, rook_to) = side.rook_squares(mv.piece.color);
        if let Some(rook) = board.remove_piece(rook_to) {
            board.set_piece(rook_from, rook);
        }
    }

    if let Some(Capture { piece, square }) = captured {
        board.set_piece(square, piece);
    }
}

/// Castling rights after `mv`: anything leaving or landing on a king home
/// square or rook corner clears the rights tied to it.
#[must_use]
pub(crate) fn castling_rights_after(rights: CastlingRights, mv: &Move) -> CastlingRights {
    rights.without_square(mv.from).without_square(mv.to)
}

/// En-passant target after `mv`: the skipped square of a double push.
#[must_use]
pub(crate) fn en_passant_after(mv: &Move) -> Option<Square> {
    if mv.is_double_pawn_push() {
        Some(Square((mv.from.0 + mv.to.0) / 2, mv.from.1))
    } else {
        None
    }
}

/// Half-move clock after `mv`: reset by pawn moves and captures.
#[must_use]
pub(crate) const fn halfmove_clock_after(clock: u32, mv: &Move) -> u32 {
    if mv.is_irreversible() {
        0
    } else {
        clock.saturating_add(1)
    }
}

/// Full-move number after `mover` moved: advances once Black has replied.
#[must_use]
pub(crate) const fn fullmove_number_after(number: u32, mover: Color) -> u32 {
    match mover {
        Color::White => number,
        Color::Black => number.saturating_add(1),
    }
}
