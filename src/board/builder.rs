//! Fluent builder for constructing game positions.
//!
//! Allows setting up positions piece by piece, for puzzles, tests and
//! resumed games.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, Piece, PieceKind, PositionBuilder};
//!
//! let game = PositionBuilder::new()
//!     .piece("e1".parse().unwrap(), Piece::new(Color::White, PieceKind::King))
//!     .piece("e8".parse().unwrap(), Piece::new(Color::Black, PieceKind::King))
//!     .piece("a2".parse().unwrap(), Piece::new(Color::White, PieceKind::Pawn))
//!     .side_to_move(Color::White)
//!     .try_build()
//!     .unwrap();
//! assert_eq!(game.legal_moves().len(), 7);
//! ```

use super::attacks::is_in_check;
use super::error::PositionError;
use super::game::GameState;
use super::{Board, CastleSide, CastlingRights, Color, Piece, PieceKind, Square};

/// A fluent builder for `GameState` positions.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Square, Piece)>,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new builder over an empty board.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        builder.pieces = Board::new().pieces().collect();
        builder.castling_rights = CastlingRights::all();
        builder
    }

    /// Place a piece, replacing whatever stood on `square`.
    #[must_use]
    pub fn piece(mut self, square: Square, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Enable one castling right.
    #[must_use]
    pub fn castle(mut self, color: Color, side: CastleSide) -> Self {
        self.castling_rights.set(color, side);
        self
    }

    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::none();
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Set the halfmove clock (for 50-move rule).
    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number;
        self
    }

    fn board(&self) -> Board {
        let mut board = Board::empty();
        for &(square, piece) in &self.pieces {
            board.set_piece(square, piece);
        }
        board
    }

    /// Build the game without validation.
    ///
    /// The caller vouches for the position; use [`PositionBuilder::try_build`]
    /// for untrusted input.
    #[must_use]
    pub fn build(self) -> GameState {
        GameState::from_parts(
            self.board(),
            self.side_to_move,
            self.castling_rights,
            self.en_passant_target,
            self.halfmove_clock,
            self.fullmove_number,
        )
    }

    /// Build the game, rejecting positions that cannot arise in play.
    ///
    /// Checks run in order: one king per side, material (at most sixteen
    /// men and eight pawns, promoted pieces covered by missing pawns), pawns
    /// off the back ranks, a plausible en-passant target, and the side not
    /// on move out of check.
    ///
    /// # Errors
    /// A [`PositionError`] naming the first problem found.
    pub fn try_build(self) -> Result<GameState, PositionError> {
        let board = self.board();

        for color in Color::BOTH {
            let count = board.squares_of(color, PieceKind::King).count();
            match count {
                0 => return Err(PositionError::MissingKing { color }),
                1 => {}
                _ => return Err(PositionError::ExtraKing { color, count }),
            }
            check_material(&board, color)?;
        }

        let misplaced_pawn = board.pieces().find(|(square, piece)| {
            piece.kind == PieceKind::Pawn && matches!(square.rank(), 0 | 7)
        });
        if let Some((square, _)) = misplaced_pawn {
            return Err(PositionError::PawnOnBackRank { square });
        }

        if let Some(target) = self.en_passant_target {
            if !plausible_en_passant(&board, target, self.side_to_move) {
                return Err(PositionError::InvalidEnPassant { square: target });
            }
        }

        let waiting = self.side_to_move.opponent();
        if is_in_check(&board, waiting) {
            return Err(PositionError::OpponentInCheck { color: waiting });
        }

        Ok(self.build())
    }
}

/// Rejects material that no sequence of moves could produce: more than
/// sixteen men, more than eight pawns, or more promoted pieces than pawns
/// missing.
fn check_material(board: &Board, color: Color) -> Result<(), PositionError> {
    let count = board.pieces().filter(|(_, p)| p.color == color).count();
    if count > 16 {
        return Err(PositionError::TooManyPieces { color, count });
    }

    let pawns = board.squares_of(color, PieceKind::Pawn).count();
    if pawns > 8 {
        return Err(PositionError::TooManyPawns { color, count: pawns });
    }

    let promoted: usize = [
        (PieceKind::Queen, 1),
        (PieceKind::Rook, 2),
        (PieceKind::Bishop, 2),
        (PieceKind::Knight, 2),
    ]
    .into_iter()
    .map(|(kind, initial)| {
        board
            .squares_of(color, kind)
            .count()
            .saturating_sub(initial)
    })
    .sum();
    if promoted > 8 - pawns {
        return Err(PositionError::ExcessPromotions { color, promoted });
    }
    Ok(())
}

/// True if the opponent's last move could have been a double push over
/// `target`: the square and the one behind it are empty and the pawn stands
/// just beyond.
fn plausible_en_passant(board: &Board, target: Square, side_to_move: Color) -> bool {
    let pusher = side_to_move.opponent();
    let direction = pusher.pawn_direction();
    let expected_rank = match pusher {
        Color::White => 2,
        Color::Black => 5,
    };
    if target.rank() != expected_rank || !board.is_empty(target) {
        return false;
    }

    let origin = target.offset(-direction, 0);
    let landing = target.offset(direction, 0);
    match (origin, landing) {
        (Some(origin), Some(landing)) => {
            board.is_empty(origin)
                && board.piece_at(landing) == Some(Piece::new(pusher, PieceKind::Pawn))
        }
        _ => false,
    }
}
