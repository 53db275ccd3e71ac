//! Coordinate move notation (`e2e4`, `e7e8q`).

use super::error::MoveParseError;
use super::game::GameState;
use super::{Move, PieceKind, Square};

impl GameState {
    /// Parse a move in coordinate notation against the current legal set.
    ///
    /// Returns the matching legal move if found, or an error describing why
    /// parsing failed. A promotion without a piece letter does not match.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::GameState;
    ///
    /// let game = GameState::new();
    /// let mv = game.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    ///
    /// # Errors
    /// [`MoveParseError`] for malformed text or a move that is not legal.
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveParseError> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() < 4 || chars.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: chars.len() });
        }

        let square = |start: usize| -> Result<Square, MoveParseError> {
            let name: String = chars[start..start + 2].iter().collect();
            name.parse().map_err(|_| MoveParseError::InvalidSquare {
                notation: text.to_string(),
            })
        };
        let from = square(0)?;
        let to = square(2)?;

        let promotion = match chars.get(4) {
            Some(&c) => {
                let kind = PieceKind::from_char(c)
                    .filter(|kind| kind.is_promotion_choice())
                    .ok_or(MoveParseError::InvalidPromotion { char: c })?;
                Some(kind)
            }
            None => None,
        };

        self.legal_moves_from(from)
            .iter()
            .find(|mv| mv.to == to && mv.promotion() == promotion)
            .copied()
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{CastleSide, Color, MoveKind, Piece, PositionBuilder};

    #[test]
    fn test_parse_simple_move() {
        let game = GameState::new();
        let mv = game.parse_move("g1f3").unwrap();
        assert_eq!(mv.piece, Piece::new(Color::White, PieceKind::Knight));
        assert_eq!(mv.to_string(), "g1f3");
    }

    #[test]
    fn test_parse_errors() {
        let game = GameState::new();
        assert_eq!(
            game.parse_move("e2"),
            Err(MoveParseError::InvalidLength { len: 2 })
        );
        assert_eq!(
            game.parse_move("i2e4"),
            Err(MoveParseError::InvalidSquare {
                notation: "i2e4".to_string()
            })
        );
        assert_eq!(
            game.parse_move("e2e4k"),
            Err(MoveParseError::InvalidPromotion { char: 'k' })
        );
        assert_eq!(
            game.parse_move("e2e5"),
            Err(MoveParseError::IllegalMove {
                notation: "e2e5".to_string()
            })
        );
    }

    #[test]
    fn test_parse_promotion_and_castle() {
        let game = PositionBuilder::new()
            .piece("e1".parse().unwrap(), Piece::new(Color::White, PieceKind::King))
            .piece("h1".parse().unwrap(), Piece::new(Color::White, PieceKind::Rook))
            .piece("b7".parse().unwrap(), Piece::new(Color::White, PieceKind::Pawn))
            .piece("h8".parse().unwrap(), Piece::new(Color::Black, PieceKind::King))
            .castle(Color::White, CastleSide::Kingside)
            .build();

        let promo = game.parse_move("b7b8n").unwrap();
        assert_eq!(promo.kind, MoveKind::Promotion(PieceKind::Knight));
        assert!(game.parse_move("b7b8").is_err());

        let castle = game.parse_move("e1g1").unwrap();
        assert_eq!(castle.kind, MoveKind::Castle(CastleSide::Kingside));
    }
}
