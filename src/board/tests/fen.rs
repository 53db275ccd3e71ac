//! Minimal FEN loader for tests. Panics on malformed input.

use crate::board::{CastleSide, Color, GameState, Piece, PositionBuilder, Square};

pub(super) fn game(fen: &str) -> GameState {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    assert!(fields.len() >= 4, "FEN needs at least four fields: {fen}");

    let mut builder = PositionBuilder::new();
    for (row, rank_text) in fields[0].split('/').enumerate() {
        let rank = 7 - row;
        let mut file = 0;
        for c in rank_text.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip as usize;
            } else {
                let piece = Piece::from_fen_char(c).expect("bad piece letter");
                let square = Square::new(rank, file).expect("square off board");
                builder = builder.piece(square, piece);
                file += 1;
            }
        }
    }

    builder = builder.side_to_move(if fields[1] == "w" {
        Color::White
    } else {
        Color::Black
    });

    for c in fields[2].chars() {
        builder = match c {
            'K' => builder.castle(Color::White, CastleSide::Kingside),
            'Q' => builder.castle(Color::White, CastleSide::Queenside),
            'k' => builder.castle(Color::Black, CastleSide::Kingside),
            'q' => builder.castle(Color::Black, CastleSide::Queenside),
            _ => builder,
        };
    }

    if fields[3] != "-" {
        builder = builder.en_passant(fields[3].parse().expect("bad en passant square"));
    }
    if let Some(clock) = fields.get(4) {
        builder = builder.halfmove_clock(clock.parse().expect("bad halfmove clock"));
    }
    if let Some(number) = fields.get(5) {
        builder = builder.fullmove_number(number.parse().expect("bad fullmove number"));
    }

    builder.build()
}

pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("bad square")
}

/// Parse and apply a coordinate move, panicking if it is not legal.
pub(super) fn play(game: &mut GameState, text: &str) {
    let mv = game.parse_move(text).expect("move not legal");
    game.apply(mv).expect("apply failed");
}
