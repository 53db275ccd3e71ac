//! Error types for game and board operations.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Move, Square, Status};

/// Error type for rejected game mutations.
///
/// Every variant is recoverable: the game state is unchanged when one is
/// returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameError {
    /// The move is not in the current legal set
    InvalidMove { attempted: Move },
    /// Undo requested with an empty history
    NoHistory,
    /// Mutation attempted after checkmate or stalemate
    GameOver { status: Status },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidMove { attempted } => {
                write!(f, "Move {attempted} is not legal in this position")
            }
            GameError::NoHistory => write!(f, "No move to undo"),
            GameError::GameOver { status } => {
                write!(f, "Game is over ({status})")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for positions rejected by `PositionBuilder::try_build`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// A side has no king
    MissingKing { color: Color },
    /// A side has more than one king
    ExtraKing { color: Color, count: usize },
    /// A side has more than sixteen pieces
    TooManyPieces { color: Color, count: usize },
    /// A side has more than eight pawns
    TooManyPawns { color: Color, count: usize },
    /// A side has more promoted pieces than it has missing pawns
    ExcessPromotions { color: Color, promoted: usize },
    /// A pawn stands on the first or last rank
    PawnOnBackRank { square: Square },
    /// The side that just moved is still in check
    OpponentInCheck { color: Color },
    /// En-passant target that no double push could have produced
    InvalidEnPassant { square: Square },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::MissingKing { color } => write!(f, "{color} has no king"),
            PositionError::ExtraKing { color, count } => {
                write!(f, "{color} has {count} kings, expected 1")
            }
            PositionError::TooManyPieces { color, count } => {
                write!(f, "{color} has {count} pieces, at most 16 allowed")
            }
            PositionError::TooManyPawns { color, count } => {
                write!(f, "{color} has {count} pawns, at most 8 allowed")
            }
            PositionError::ExcessPromotions { color, promoted } => {
                write!(f, "{color} has {promoted} promoted pieces but too few missing pawns")
            }
            PositionError::PawnOnBackRank { square } => {
                write!(f, "Pawn on back rank at {square}")
            }
            PositionError::OpponentInCheck { color } => {
                write!(f, "{color} is in check but not on move")
            }
            PositionError::InvalidEnPassant { square } => {
                write!(f, "Invalid en passant target {square}")
            }
        }
    }
}

impl std::error::Error for PositionError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, PieceKind};

    fn e2e4() -> Move {
        Move::new(
            Square(1, 4),
            Square(3, 4),
            Piece::new(Color::White, PieceKind::Pawn),
            None,
        )
    }

    // GameError tests
    #[test]
    fn test_game_error_invalid_move() {
        let err = GameError::InvalidMove { attempted: e2e4() };
        assert!(err.to_string().contains("e2e4"));
    }

    #[test]
    fn test_game_error_no_history() {
        assert!(GameError::NoHistory.to_string().contains("undo"));
    }

    #[test]
    fn test_game_error_game_over() {
        let err = GameError::GameOver {
            status: Status::Checkmate,
        };
        assert!(err.to_string().contains("checkmate"));
    }

    // MoveParseError tests
    #[test]
    fn test_move_error_invalid_length() {
        let err = MoveParseError::InvalidLength { len: 3 };
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_move_error_invalid_square() {
        let err = MoveParseError::InvalidSquare {
            notation: "z9z9".to_string(),
        };
        assert!(err.to_string().contains("z9z9"));
    }

    #[test]
    fn test_move_error_illegal_move() {
        let err = MoveParseError::IllegalMove {
            notation: "e2e5".to_string(),
        };
        assert!(err.to_string().contains("e2e5"));
    }

    // SquareError tests
    #[test]
    fn test_square_error_rank_bounds() {
        let err = SquareError::RankOutOfBounds { rank: 9 };
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    // PositionError tests
    #[test]
    fn test_position_error_missing_king() {
        let err = PositionError::MissingKing {
            color: Color::Black,
        };
        assert_eq!(err.to_string(), "Black has no king");
    }

    #[test]
    fn test_position_error_pawn_square() {
        let err = PositionError::PawnOnBackRank {
            square: Square(7, 0),
        };
        assert!(err.to_string().contains("a8"));
    }

    #[test]
    fn test_position_error_material() {
        let err = PositionError::TooManyPieces {
            color: Color::White,
            count: 34,
        };
        assert_eq!(err.to_string(), "White has 34 pieces, at most 16 allowed");

        let err = PositionError::ExcessPromotions {
            color: Color::Black,
            promoted: 3,
        };
        assert!(err.to_string().contains("3 promoted"));
    }

    #[test]
    fn test_error_clone() {
        let err = GameError::NoHistory;
        let cloned = err;
        assert_eq!(err, cloned);
    }
}
