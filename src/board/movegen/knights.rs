use super::super::attacks::{leaper_targets, KNIGHT_OFFSETS};
use super::super::{Move, Square};
use super::MoveGen;

impl MoveGen<'_> {
    pub(super) fn knight_moves(&self, from: Square, moves: &mut Vec<Move>) {
        moves.extend(leaper_targets(from, &KNIGHT_OFFSETS).filter_map(|to| self.step(from, to)));
    }
}
