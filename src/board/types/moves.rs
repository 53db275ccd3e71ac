//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::piece::{Color, Piece, PieceKind};
use super::square::Square;

/// What makes a move more than "piece goes from A to B".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    Normal,
    DoublePush,
    EnPassant,
    Castle(CastleSide),
    Promotion(PieceKind),
}

/// A chess move as a value: describing it never changes any position.
///
/// `captured` is the piece removed by the move (for en passant, the pawn
/// beside the destination). A promotion that captures carries both
/// `captured` and [`MoveKind::Promotion`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub kind: MoveKind,
}

impl Move {
    /// Create a move with no special behaviour
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, piece: Piece, captured: Option<Piece>) -> Self {
        Move {
            from,
            to,
            piece,
            captured,
            kind: MoveKind::Normal,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn with_kind(mut self, kind: MoveKind) -> Self {
        self.kind = kind;
        self
    }

    /// The color making the move
    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.piece.color
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    /// Returns true if this move is en passant
    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    /// Returns true if this move is castling (kingside or queenside)
    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        matches!(self.kind, MoveKind::Castle(_))
    }

    /// Returns true if this move is a double pawn push
    #[inline]
    #[must_use]
    pub const fn is_double_pawn_push(self) -> bool {
        matches!(self.kind, MoveKind::DoublePush)
    }

    /// Returns true if this move is a pawn promotion
    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        matches!(self.kind, MoveKind::Promotion(_))
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<PieceKind> {
        match self.kind {
            MoveKind::Promotion(kind) => Some(kind),
            _ => None,
        }
    }

    /// The same promotion move with a different promotion choice.
    ///
    /// Returns `None` if this is not a promotion or `kind` is not a piece a
    /// pawn may promote to. This is how a caller turns any of the generated
    /// promotion moves into the one the player picked.
    #[must_use]
    pub const fn with_promotion(self, kind: PieceKind) -> Option<Self> {
        if self.is_promotion() && kind.is_promotion_choice() {
            Some(self.with_kind(MoveKind::Promotion(kind)))
        } else {
            None
        }
    }

    /// Square of the piece removed by this move, if any.
    #[must_use]
    pub fn capture_square(self) -> Option<Square> {
        self.captured?;
        if self.is_en_passant() {
            Some(Square(self.from.0, self.to.1))
        } else {
            Some(self.to)
        }
    }

    /// True if this move resets the half-move clock.
    #[inline]
    #[must_use]
    pub const fn is_irreversible(self) -> bool {
        matches!(self.piece.kind, PieceKind::Pawn) || self.is_capture()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

pub(crate) const MAX_MOVES: usize = 256;

const EMPTY_MOVE: Move = Move::new(
    Square(0, 0),
    Square(0, 0),
    Piece::new(Color::White, PieceKind::Pawn),
    None,
);

/// List of moves with fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.as_slice().get(idx).copied()
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.as_slice().contains(mv)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut list = MoveList::new();
        for mv in iter {
            list.push(mv);
        }
        list
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let mv = self.list.moves[self.idx];
            self.idx += 1;
            Some(mv)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pawn_promotion(kind: PieceKind) -> Move {
        Move::new(
            Square(6, 4),
            Square(7, 4),
            Piece::new(Color::White, PieceKind::Pawn),
            None,
        )
        .with_kind(MoveKind::Promotion(kind))
    }

    #[test]
    fn test_coordinate_notation() {
        let mv = Move::new(
            Square(1, 4),
            Square(3, 4),
            Piece::new(Color::White, PieceKind::Pawn),
            None,
        );
        assert_eq!(mv.to_string(), "e2e4");
        assert_eq!(pawn_promotion(PieceKind::Knight).to_string(), "e7e8n");
    }

    #[test]
    fn test_with_promotion() {
        let queen = pawn_promotion(PieceKind::Queen);
        let rook = queen.with_promotion(PieceKind::Rook).unwrap();
        assert_eq!(rook.promotion(), Some(PieceKind::Rook));
        assert_eq!(rook.from, queen.from);
        assert_eq!(queen.with_promotion(PieceKind::King), None);

        let quiet = Move::new(
            Square(0, 1),
            Square(2, 2),
            Piece::new(Color::White, PieceKind::Knight),
            None,
        );
        assert_eq!(quiet.with_promotion(PieceKind::Queen), None);
    }

    #[test]
    fn test_en_passant_capture_square() {
        let ep = Move::new(
            Square(4, 4),
            Square(5, 3),
            Piece::new(Color::White, PieceKind::Pawn),
            Some(Piece::new(Color::Black, PieceKind::Pawn)),
        )
        .with_kind(MoveKind::EnPassant);
        assert_eq!(ep.capture_square(), Some(Square(4, 3)));
        assert!(ep.is_irreversible());
    }

    #[test]
    fn test_move_list_collect_and_iterate() {
        let list: MoveList = (0..3)
            .map(|file| {
                Move::new(
                    Square(1, file),
                    Square(2, file),
                    Piece::new(Color::White, PieceKind::Pawn),
                    None,
                )
            })
            .collect();
        assert_eq!(list.len(), 3);
        assert_eq!(list[2].to, Square(2, 2));
        assert_eq!(list.get(3), None);
        assert_eq!(list.into_iter().count(), 3);
    }
}
