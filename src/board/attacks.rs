//! Offset and ray tables shared by move generation and attack detection.
//!
//! "Is this square attacked" walks the same tables outward from the target
//! square: a knight on any knight-offset attacks it, the first piece found
//! along a rook ray attacks it if it is a rook or queen, and so on.

use super::{Board, Color, Piece, PieceKind, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Squares reached by single steps from `from`, clipped to the board.
pub(crate) fn leaper_targets(
    from: Square,
    offsets: &'static [(isize, isize)],
) -> impl Iterator<Item = Square> {
    offsets
        .iter()
        .filter_map(move |&(dr, df)| from.offset(dr, df))
}

/// Squares along one direction from `from` (exclusive), up to and including
/// the first occupied square.
pub(crate) fn ray(
    board: &Board,
    from: Square,
    (dr, df): (isize, isize),
) -> impl Iterator<Item = Square> + '_ {
    let mut next = from.offset(dr, df);
    let mut blocked = false;
    std::iter::from_fn(move || {
        if blocked {
            return None;
        }
        let sq = next?;
        blocked = !board.is_empty(sq);
        next = sq.offset(dr, df);
        Some(sq)
    })
}

/// Returns true if any piece of `attacker` attacks `square`.
///
/// `square` itself may be empty or occupied by either color.
#[must_use]
pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    let holds = |sq: Square, kinds: &[PieceKind]| {
        board
            .piece_at(sq)
            .is_some_and(|p| p.color == attacker && kinds.contains(&p.kind))
    };

    // A pawn attacks diagonally forward, so look one rank "behind" the target
    // from the attacker's point of view.
    let pawn_rank = -attacker.pawn_direction();
    if [-1, 1]
        .into_iter()
        .filter_map(|df| square.offset(pawn_rank, df))
        .any(|sq| holds(sq, &[PieceKind::Pawn]))
    {
        return true;
    }

    if leaper_targets(square, &KNIGHT_OFFSETS).any(|sq| holds(sq, &[PieceKind::Knight])) {
        return true;
    }

    if leaper_targets(square, &KING_OFFSETS).any(|sq| holds(sq, &[PieceKind::King])) {
        return true;
    }

    let slider_hit = |directions: &[(isize, isize)], kinds: &[PieceKind]| {
        directions
            .iter()
            .any(|&dir| ray(board, square, dir).last().is_some_and(|sq| holds(sq, kinds)))
    };

    slider_hit(&ROOK_DIRECTIONS, &[PieceKind::Rook, PieceKind::Queen])
        || slider_hit(&BISHOP_DIRECTIONS, &[PieceKind::Bishop, PieceKind::Queen])
}

/// Returns true if `color`'s king is attacked.
///
/// A board without a king for `color` is never in check.
#[must_use]
pub fn is_in_check(board: &Board, color: Color) -> bool {
    board
        .find_king(color)
        .is_some_and(|king| is_square_attacked(board, king, color.opponent()))
}

/// Every piece of `attacker` that attacks `square`, in scan order.
#[must_use]
pub fn attackers_of(board: &Board, square: Square, attacker: Color) -> Vec<(Square, Piece)> {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == attacker)
        .filter(|&(from, piece)| attacks(board, from, piece, square))
        .collect()
}

fn attacks(board: &Board, from: Square, piece: Piece, target: Square) -> bool {
    match piece.kind {
        PieceKind::Pawn => {
            from.offset(piece.color.pawn_direction(), -1) == Some(target)
                || from.offset(piece.color.pawn_direction(), 1) == Some(target)
        }
        PieceKind::Knight => leaper_targets(from, &KNIGHT_OFFSETS).any(|sq| sq == target),
        PieceKind::King => leaper_targets(from, &KING_OFFSETS).any(|sq| sq == target),
        PieceKind::Bishop => BISHOP_DIRECTIONS
            .iter()
            .any(|&dir| ray(board, from, dir).any(|sq| sq == target)),
        PieceKind::Rook => ROOK_DIRECTIONS
            .iter()
            .any(|&dir| ray(board, from, dir).any(|sq| sq == target)),
        PieceKind::Queen => ROOK_DIRECTIONS
            .iter()
            .chain(BISHOP_DIRECTIONS.iter())
            .any(|&dir| ray(board, from, dir).any(|sq| sq == target)),
    }
}
