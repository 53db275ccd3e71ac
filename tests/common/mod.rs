//! Shared helpers for integration tests.

use chess_rules::board::{CastleSide, Color, GameState, Piece, PositionBuilder, Square};

/// Load a FEN position through the public builder. Panics on malformed input.
pub fn game(fen: &str) -> GameState {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let mut builder = PositionBuilder::new();

    for (row, rank_text) in fields[0].split('/').enumerate() {
        let mut file = 0;
        for c in rank_text.chars() {
            match c.to_digit(10) {
                Some(skip) => file += skip as usize,
                None => {
                    let piece = Piece::from_fen_char(c).expect("bad piece letter");
                    let square = Square::new(7 - row, file).expect("square off board");
                    builder = builder.piece(square, piece);
                    file += 1;
                }
            }
        }
    }

    let side = if fields[1] == "w" { Color::White } else { Color::Black };
    builder = builder.side_to_move(side);
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

    builder.try_build().expect("position rejected")
}
