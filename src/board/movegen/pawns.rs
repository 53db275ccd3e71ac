use super::super::{Move, MoveKind, Piece, PieceKind, Square, PROMOTION_PIECES};
use super::MoveGen;

impl MoveGen<'_> {
    pub(super) fn pawn_moves(&self, from: Square, moves: &mut Vec<Move>) {
        let color = self.side;
        let pawn = Piece::new(color, PieceKind::Pawn);
        let dir = color.pawn_direction();

        if let Some(forward_sq) = from.offset(dir, 0) {
            if self.board.is_empty(forward_sq) {
                self.push_pawn_move(Move::new(from, forward_sq, pawn, None), moves);

                if from.0 == color.pawn_start_rank() {
                    if let Some(double_sq) = forward_sq.offset(dir, 0) {
                        if self.board.is_empty(double_sq) {
                            moves.push(
                                Move::new(from, double_sq, pawn, None)
                                    .with_kind(MoveKind::DoublePush),
                            );
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target_sq) = from.offset(dir, df) else {
                continue;
            };
            match self.board.piece_at(target_sq) {
                Some(target) if target.color != color => {
                    self.push_pawn_move(Move::new(from, target_sq, pawn, Some(target)), moves);
                }
                Some(_) => {}
                None if Some(target_sq) == self.en_passant => {
                    // The passed pawn stands beside us, on the target's file.
                    let victim_sq = Square(from.0, target_sq.1);
                    let victim = Piece::new(color.opponent(), PieceKind::Pawn);
                    if self.board.piece_at(victim_sq) == Some(victim) {
                        moves.push(
                            Move::new(from, target_sq, pawn, Some(victim))
                                .with_kind(MoveKind::EnPassant),
                        );
                    }
                }
                None => {}
            }
        }
    }

    /// Push `mv`, expanding it into one move per promotion choice when it
    /// reaches the far rank.
    fn push_pawn_move(&self, mv: Move, moves: &mut Vec<Move>) {
        if mv.to.0 == self.side.pawn_promotion_rank() {
            for promo in PROMOTION_PIECES {
                moves.push(mv.with_kind(MoveKind::Promotion(promo)));
            }
        } else {
            moves.push(mv);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::movegen::MoveGen;
    use crate::board::{Board, CastlingRights, Color, MoveKind, Piece, PieceKind, Square};

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    fn put(board: &mut Board, name: &str, color: Color, kind: PieceKind) {
        board.set_piece(sq(name), Piece::new(color, kind));
    }

    #[test]
    fn test_blocked_pawn_has_no_pushes() {
        let mut board = Board::empty();
        put(&mut board, "e2", Color::White, PieceKind::Pawn);
        put(&mut board, "e3", Color::Black, PieceKind::Knight);
        let generator = MoveGen::new(&board, Color::White, CastlingRights::none(), None);
        assert!(generator.moves_from(sq("e2")).is_empty());
    }

    #[test]
    fn test_double_push_needs_both_squares_empty() {
        let mut board = Board::empty();
        put(&mut board, "d7", Color::Black, PieceKind::Pawn);
        put(&mut board, "d5", Color::White, PieceKind::Bishop);
        let generator = MoveGen::new(&board, Color::Black, CastlingRights::none(), None);
        let moves = generator.moves_from(sq("d7"));
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, sq("d6"));
        assert_eq!(moves[0].kind, MoveKind::Normal);
    }

    #[test]
    fn test_captures_only_enemy_pieces() {
        let mut board = Board::empty();
        put(&mut board, "e4", Color::White, PieceKind::Pawn);
        put(&mut board, "d5", Color::Black, PieceKind::Rook);
        put(&mut board, "f5", Color::White, PieceKind::Knight);
        let generator = MoveGen::new(&board, Color::White, CastlingRights::none(), None);
        let moves = generator.moves_from(sq("e4"));
        let captures: Vec<_> = moves.iter().filter(|m| m.is_capture()).collect();
        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].to, sq("d5"));
        assert_eq!(
            captures[0].captured,
            Some(Piece::new(Color::Black, PieceKind::Rook))
        );
    }

    #[test]
    fn test_en_passant_requires_target_and_victim() {
        let mut board = Board::empty();
        put(&mut board, "e5", Color::White, PieceKind::Pawn);
        put(&mut board, "d5", Color::Black, PieceKind::Pawn);

        let without = MoveGen::new(&board, Color::White, CastlingRights::none(), None);
        assert!(!without.moves_from(sq("e5")).iter().any(|m| m.is_en_passant()));

        let with = MoveGen::new(&board, Color::White, CastlingRights::none(), Some(sq("d6")));
        let ep: Vec<_> = with
            .moves_from(sq("e5"))
            .into_iter()
            .filter(|m| m.is_en_passant())
            .collect();
        assert_eq!(ep.len(), 1);
        assert_eq!(ep[0].to, sq("d6"));
        assert_eq!(ep[0].capture_square(), Some(sq("d5")));
    }

    #[test]
    fn test_capture_promotion_keeps_victim() {
        let mut board = Board::empty();
        put(&mut board, "b2", Color::Black, PieceKind::Pawn);
        put(&mut board, "a1", Color::White, PieceKind::Rook);
        put(&mut board, "b1", Color::White, PieceKind::Knight);
        let generator = MoveGen::new(&board, Color::Black, CastlingRights::none(), None);
        let moves = generator.moves_from(sq("b2"));
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|m| m.to == sq("a1") && m.is_promotion()));
        assert!(moves
            .iter()
            .all(|m| m.captured == Some(Piece::new(Color::White, PieceKind::Rook))));
    }
}
