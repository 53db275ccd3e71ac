//! Pseudo-legal move generation.
//!
//! Moves produced here follow each piece's movement rule but may leave the
//! mover's own king in check; see [`crate::board::filter_legal`] for the
//! legal subset.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, CastlingRights, Color, Move, PieceKind, Square};

/// Everything besides piece placement that decides which moves exist.
#[derive(Clone, Copy)]
pub(crate) struct MoveGen<'a> {
    pub(crate) board: &'a Board,
    pub(crate) side: Color,
    pub(crate) rights: CastlingRights,
    pub(crate) en_passant: Option<Square>,
}

impl<'a> MoveGen<'a> {
    pub(crate) const fn new(
        board: &'a Board,
        side: Color,
        rights: CastlingRights,
        en_passant: Option<Square>,
    ) -> Self {
        MoveGen {
            board,
            side,
            rights,
            en_passant,
        }
    }

    /// Pseudo-legal moves of the piece on `from`.
    ///
    /// Empty if `from` is empty or holds an opponent piece.
    pub(crate) fn moves_from(&self, from: Square) -> Vec<Move> {
        let mut moves = Vec::new();
        let Some(piece) = self.board.piece_at(from) else {
            return moves;
        };
        if piece.color != self.side {
            return moves;
        }

        match piece.kind {
            PieceKind::Pawn => self.pawn_moves(from, &mut moves),
            PieceKind::Knight => self.knight_moves(from, &mut moves),
            PieceKind::Bishop => self.bishop_moves(from, &mut moves),
            PieceKind::Rook => self.rook_moves(from, &mut moves),
            PieceKind::Queen => self.queen_moves(from, &mut moves),
            PieceKind::King => self.king_moves(from, &mut moves),
        }
        moves
    }

    /// A plain move or capture of the piece on `from` to `to`.
    ///
    /// Returns `None` when `to` holds one of the mover's own pieces.
    fn step(&self, from: Square, to: Square) -> Option<Move> {
        let piece = self.board.piece_at(from)?;
        match self.board.piece_at(to) {
            Some(target) if target.color == self.side => None,
            captured => Some(Move::new(from, to, piece, captured)),
        }
    }
}

/// Lazily generate every pseudo-legal move for `side`.
///
/// Origin squares are visited in scan order (a1, b1, ..., h8); within a
/// square the order follows the piece's offset tables. The order carries no
/// meaning beyond being deterministic.
pub fn generate_pseudo_legal<'a>(
    board: &'a Board,
    side: Color,
    rights: CastlingRights,
    en_passant: Option<Square>,
) -> impl Iterator<Item = Move> + 'a {
    let generator = MoveGen::new(board, side, rights, en_passant);
    board
        .pieces()
        .filter(move |(_, piece)| piece.color == side)
        .flat_map(move |(from, _)| generator.moves_from(from))
}
