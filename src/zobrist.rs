//! Zobrist hashing for chess positions.
//!
//! Keys identify positions for repetition counting: two positions share a key
//! when piece placement, side to move, castling rights and en-passant target
//! all agree.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Board, CastleSide, CastlingRights, Color, Piece, Square};

pub(crate) struct ZobristKeys {
    // piece_keys[piece_kind][color][square_index]
    pub(crate) piece_keys: [[[u64; 64]; 2]; 6],
    pub(crate) black_to_move_key: u64,
    // castling_keys[color][side] : 0=White, 1=Black; 0=Kingside, 1=Queenside
    pub(crate) castling_keys: [[u64; 2]; 2],
    // en_passant_keys[file_index] (only file matters for EP target)
    pub(crate) en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64);
        let mut piece_keys = [[[0; 64]; 2]; 6];
        let mut castling_keys = [[0; 2]; 2];
        let mut en_passant_keys = [0; 8];

        for kind in &mut piece_keys {
            for color in kind.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        for color in &mut castling_keys {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
        }

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }

    #[inline]
    fn piece(&self, piece: Piece, square: Square) -> u64 {
        self.piece_keys[piece.kind.index()][piece.color.index()][square.as_index()]
    }

    #[inline]
    fn castling(&self, rights: CastlingRights) -> u64 {
        let mut key = 0;
        for color in Color::BOTH {
            for (side_index, side) in CastleSide::BOTH.into_iter().enumerate() {
                if rights.has(color, side) {
                    key ^= self.castling_keys[color.index()][side_index];
                }
            }
        }
        key
    }
}

static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

/// Compute the key of a position from scratch.
#[must_use]
pub fn position_key(
    board: &Board,
    side_to_move: Color,
    rights: CastlingRights,
    en_passant: Option<Square>,
) -> u64 {
    let keys = &*ZOBRIST;
    let mut key = board
        .pieces()
        .fold(0, |acc, (square, piece)| acc ^ keys.piece(piece, square));

    if side_to_move == Color::Black {
        key ^= keys.black_to_move_key;
    }
    key ^= keys.castling(rights);
    if let Some(target) = en_passant {
        key ^= keys.en_passant_keys[target.file()];
    }
    key
}
