//! Legal move filtering by simulate-and-discard.
//!
//! Every pseudo-legal move is played on a copy of the board; the move is kept
//! if the mover's king is not attacked afterwards. Pins, discovered checks and
//! the en-passant rank pin all fall out of this without a separate pass.

use super::attacks::is_in_check;
use super::make_unmake::apply_to_board;
use super::movegen::{generate_pseudo_legal, MoveGen};
use super::{Board, CastlingRights, Color, Move, Square};

/// True if playing `mv` leaves `side`'s king safe.
#[inline]
fn keeps_king_safe(board: &Board, side: Color, mv: &Move) -> bool {
    let (after, _) = apply_to_board(board, mv);
    !is_in_check(&after, side)
}

/// Lazily yield the legal moves for `side`.
///
/// Consumers that need more than one pass must collect the iterator.
pub fn filter_legal<'a>(
    board: &'a Board,
    side: Color,
    rights: CastlingRights,
    en_passant: Option<Square>,
) -> impl Iterator<Item = Move> + 'a {
    generate_pseudo_legal(board, side, rights, en_passant)
        .filter(move |mv| keeps_king_safe(board, side, mv))
}

/// Legal moves of the piece on `from`; empty for empty or opponent squares.
pub fn filter_legal_from<'a>(
    board: &'a Board,
    from: Square,
    side: Color,
    rights: CastlingRights,
    en_passant: Option<Square>,
) -> impl Iterator<Item = Move> + 'a {
    MoveGen::new(board, side, rights, en_passant)
        .moves_from(from)
        .into_iter()
        .filter(move |mv| keeps_king_safe(board, side, mv))
}
