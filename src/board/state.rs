use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 8x8 grid of square contents.
///
/// Pure data: it knows nothing about whose turn it is or which moves are
/// legal. Indexed as `squares[rank][file]`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, kind) in BACK_RANK.iter().enumerate() {
            board.set_piece(Square(0, file), Piece::new(Color::White, *kind));
            board.set_piece(Square(7, file), Piece::new(Color::Black, *kind));
            board.set_piece(Square(1, file), Piece::new(Color::White, PieceKind::Pawn));
            board.set_piece(Square(6, file), Piece::new(Color::Black, PieceKind::Pawn));
        }
        board
    }

    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    #[inline]
    #[must_use]
    pub const fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.0][sq.1]
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.0][sq.1].is_none()
    }

    #[inline]
    pub fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.0][sq.1] = Some(piece);
    }

    /// Empty a square, returning whatever stood on it.
    #[inline]
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.0][sq.1].take()
    }

    /// Occupied squares with their pieces, in scan order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Squares holding `color`'s pieces of `kind`, in scan order.
    pub fn squares_of(&self, color: Color, kind: PieceKind) -> impl Iterator<Item = Square> + '_ {
        let wanted = Piece::new(color, kind);
        self.pieces()
            .filter(move |(_, piece)| *piece == wanted)
            .map(|(sq, _)| sq)
    }

    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.squares_of(color, PieceKind::King).next()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        write!(f, "{self}")
    }
}

/// Text diagram from White's side, rank 8 at the top.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = self
                    .piece_at(Square(rank, file))
                    .map_or('.', Piece::to_fen_char);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh")
    }
}
