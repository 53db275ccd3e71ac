use super::super::attacks::{is_square_attacked, leaper_targets, KING_OFFSETS};
use super::super::{CastleSide, Move, MoveKind, Piece, PieceKind, Square};
use super::MoveGen;

impl MoveGen<'_> {
    pub(super) fn king_moves(&self, from: Square, moves: &mut Vec<Move>) {
        moves.extend(leaper_targets(from, &KING_OFFSETS).filter_map(|to| self.step(from, to)));

        for side in CastleSide::BOTH {
            if let Some(castle) = self.castle_move(from, side) {
                moves.push(castle);
            }
        }
    }

    /// The castling move towards `side`, if every precondition holds.
    ///
    /// Attack checks use the attack primitive directly rather than the
    /// legality filter, so castling never recurses into full legality.
    fn castle_move(&self, from: Square, side: CastleSide) -> Option<Move> {
        let color = self.side;
        let back_rank = color.back_rank();
        let king = Piece::new(color, PieceKind::King);
        if !self.rights.has(color, side) || from != Square(back_rank, 4) {
            return None;
        }
        if self.board.piece_at(from) != Some(king) {
            return None;
        }

        let (rook_from, _) = side.rook_squares(color);
        if self.board.piece_at(rook_from) != Some(Piece::new(color, PieceKind::Rook)) {
            return None;
        }

        let (low, high) = if rook_from.1 < from.1 {
            (rook_from.1 + 1, from.1)
        } else {
            (from.1 + 1, rook_from.1)
        };
        if (low..high).any(|file| !self.board.is_empty(Square(back_rank, file))) {
            return None;
        }

        // The king may not castle out of, through or into check.
        let to = Square(back_rank, side.king_to_file());
        let (path_low, path_high) = if to.1 < from.1 {
            (to.1, from.1)
        } else {
            (from.1, to.1)
        };
        let opponent = color.opponent();
        if (path_low..=path_high)
            .any(|file| is_square_attacked(self.board, Square(back_rank, file), opponent))
        {
            return None;
        }

        Some(Move::new(from, to, king, None).with_kind(MoveKind::Castle(side)))
    }
}
