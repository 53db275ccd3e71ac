use super::super::attacks::{ray, BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use super::super::{Move, Square};
use super::MoveGen;

impl MoveGen<'_> {
    pub(super) fn bishop_moves(&self, from: Square, moves: &mut Vec<Move>) {
        self.slide(from, &BISHOP_DIRECTIONS, moves);
    }

    pub(super) fn rook_moves(&self, from: Square, moves: &mut Vec<Move>) {
        self.slide(from, &ROOK_DIRECTIONS, moves);
    }

    pub(super) fn queen_moves(&self, from: Square, moves: &mut Vec<Move>) {
        self.slide(from, &ROOK_DIRECTIONS, moves);
        self.slide(from, &BISHOP_DIRECTIONS, moves);
    }

    /// Walk each direction until the edge or the first piece; an enemy piece
    /// ends the ray as a capture, an own piece ends it exclusively.
    fn slide(&self, from: Square, directions: &[(isize, isize)], moves: &mut Vec<Move>) {
        for &dir in directions {
            moves.extend(ray(self.board, from, dir).filter_map(|to| self.step(from, to)));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::movegen::MoveGen;
    use crate::board::{Board, CastlingRights, Color, Piece, PieceKind, Square};

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_queen_on_open_board() {
        let mut board = Board::empty();
        board.set_piece(sq("d4"), Piece::new(Color::White, PieceKind::Queen));
        let generator = MoveGen::new(&board, Color::White, CastlingRights::none(), None);
        assert_eq!(generator.moves_from(sq("d4")).len(), 27);
    }

    #[test]
    fn test_rook_ray_stops_at_pieces() {
        let mut board = Board::empty();
        board.set_piece(sq("a1"), Piece::new(Color::White, PieceKind::Rook));
        board.set_piece(sq("a3"), Piece::new(Color::White, PieceKind::Pawn));
        board.set_piece(sq("c1"), Piece::new(Color::Black, PieceKind::Bishop));
        let generator = MoveGen::new(&board, Color::White, CastlingRights::none(), None);
        let mut targets: Vec<Square> = generator
            .moves_from(sq("a1"))
            .iter()
            .map(|m| m.to)
            .collect();
        targets.sort();
        assert_eq!(targets, vec![sq("b1"), sq("c1"), sq("a2")]);
    }

    #[test]
    fn test_bishop_in_corner_behind_own_pawn() {
        let board = Board::new();
        let generator = MoveGen::new(&board, Color::White, CastlingRights::all(), None);
        assert!(generator.moves_from(sq("c1")).is_empty());
    }
}
