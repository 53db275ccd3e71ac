//! Game state: the board plus everything the rules remember between plies.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::attacks::attackers_of;
use super::builder::PositionBuilder;
use super::error::GameError;
use super::history::{HistoryEntry, RepetitionTable};
use super::legality::{filter_legal, filter_legal_from};
use super::make_unmake::{
    castling_rights_after, en_passant_after, fullmove_number_after, halfmove_clock_after,
    make_on_board, unmake_on_board, UndoInfo,
};
use super::status::{status, Phase, Status};
use super::{Board, CastlingRights, Color, Move, MoveList, Square};
use crate::zobrist::position_key;

/// A game in progress.
///
/// Mutated only through [`GameState::apply`] and [`GameState::undo`]; every
/// other method is a read-only query. A failed mutation leaves the state
/// untouched.
///
/// # Example
/// ```
/// use chess_rules::board::{GameState, Status};
///
/// let mut game = GameState::new();
/// let mv = game.parse_move("e2e4").unwrap();
/// assert_eq!(game.apply(mv), Ok(Status::Normal));
/// assert_eq!(game.undo(), Ok(mv));
/// assert_eq!(game, GameState::new());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
    key: u64,
    repetitions: RepetitionTable,
    history: Vec<HistoryEntry>,
    status: Status,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// The standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(
            Board::new(),
            Color::White,
            CastlingRights::all(),
            None,
            0,
            1,
        )
    }

    /// Start configuring a custom position from an empty board.
    #[must_use]
    pub fn builder() -> PositionBuilder {
        PositionBuilder::new()
    }

    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> Self {
        let key = position_key(&board, side_to_move, castling_rights, en_passant_target);
        let mut repetitions = RepetitionTable::new();
        repetitions.set(key, 1);
        let status = status(&board, side_to_move, castling_rights, en_passant_target);

        GameState {
            board,
            side_to_move,
            castling_rights,
            en_passant_target,
            halfmove_clock,
            fullmove_number,
            key,
            repetitions,
            history: Vec::new(),
            status,
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Half-moves since the last pawn move or capture.
    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Starts at 1 and increments after each Black move.
    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Zobrist key of the current position.
    #[inline]
    #[must_use]
    pub fn key(&self) -> u64 {
        self.key
    }

    /// Cached status of the side to move, refreshed by every apply and undo.
    #[inline]
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.status.phase()
    }

    #[inline]
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        matches!(self.status, Status::Check | Status::Checkmate)
    }

    /// Applied moves, oldest first.
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|entry| entry.mv)
    }

    /// How many times the current position has occurred, this one included.
    #[must_use]
    pub fn repetition_count(&self) -> u32 {
        self.repetitions.get(self.key)
    }

    /// Squares of the pieces giving check to the side to move.
    #[must_use]
    pub fn checkers(&self) -> Vec<Square> {
        self.board
            .find_king(self.side_to_move)
            .map(|king| {
                attackers_of(&self.board, king, self.side_to_move.opponent())
                    .into_iter()
                    .map(|(square, _)| square)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// All legal moves for the side to move, in board scan order.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        filter_legal(
            &self.board,
            self.side_to_move,
            self.castling_rights,
            self.en_passant_target,
        )
        .collect()
    }

    /// Legal moves of the piece on `from`.
    ///
    /// Empty for an empty square, an opponent's piece or a piece that cannot
    /// move; never an error.
    #[must_use]
    pub fn legal_moves_from(&self, from: Square) -> MoveList {
        filter_legal_from(
            &self.board,
            from,
            self.side_to_move,
            self.castling_rights,
            self.en_passant_target,
        )
        .collect()
    }

    /// Distinct destination squares of the piece on `from`.
    ///
    /// The four promotion choices to one square collapse into one entry.
    #[must_use]
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        let mut targets: Vec<Square> = self
            .legal_moves_from(from)
            .iter()
            .map(|mv| mv.to)
            .collect();
        targets.dedup();
        targets
    }

    /// True if `mv` is exactly one of the current legal moves.
    #[must_use]
    pub fn is_legal(&self, mv: &Move) -> bool {
        mv.color() == self.side_to_move
            && filter_legal_from(
                &self.board,
                mv.from,
                self.side_to_move,
                self.castling_rights,
                self.en_passant_target,
            )
            .any(|legal| legal == *mv)
    }

    /// Play `mv` and return the status of the side now to move.
    ///
    /// # Errors
    /// [`GameError::GameOver`] once the game has ended, and
    /// [`GameError::InvalidMove`] if `mv` is not in the current legal set.
    pub fn apply(&mut self, mv: Move) -> Result<Status, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver {
                status: self.status,
            });
        }
        if !self.is_legal(&mv) {
            return Err(GameError::InvalidMove { attempted: mv });
        }

        self.play(mv);
        Ok(self.status)
    }

    /// Take back the last move and return it.
    ///
    /// # Errors
    /// [`GameError::NoHistory`] if no move has been applied.
    pub fn undo(&mut self) -> Result<Move, GameError> {
        self.take_back().ok_or(GameError::NoHistory)
    }

    /// Play a move already known to be legal.
    pub(crate) fn play(&mut self, mv: Move) {
        let mover = self.side_to_move;
        let captured = make_on_board(&mut self.board, &mv);
        let mut undo = UndoInfo {
            captured,
            previous_castling_rights: self.castling_rights,
            previous_en_passant_target: self.en_passant_target,
            previous_halfmove_clock: self.halfmove_clock,
            previous_fullmove_number: self.fullmove_number,
            previous_key: self.key,
            previous_repetition_count: 0,
        };

        self.castling_rights = castling_rights_after(self.castling_rights, &mv);
        self.en_passant_target = en_passant_after(&mv);
        self.halfmove_clock = halfmove_clock_after(self.halfmove_clock, &mv);
        self.fullmove_number = fullmove_number_after(self.fullmove_number, mover);
        self.side_to_move = mover.opponent();

        self.key = position_key(
            &self.board,
            self.side_to_move,
            self.castling_rights,
            self.en_passant_target,
        );
        undo.previous_repetition_count = self.repetitions.get(self.key);
        self.repetitions.increment(self.key);

        self.history.push(HistoryEntry { mv, undo });
        self.refresh_status();
    }

    fn take_back(&mut self) -> Option<Move> {
        let HistoryEntry { mv, undo } = self.history.pop()?;

        self.repetitions.set(self.key, undo.previous_repetition_count);
        unmake_on_board(&mut self.board, &mv, undo.captured);

        self.side_to_move = mv.color();
        self.castling_rights = undo.previous_castling_rights;
        self.en_passant_target = undo.previous_en_passant_target;
        self.halfmove_clock = undo.previous_halfmove_clock;
        self.fullmove_number = undo.previous_fullmove_number;
        self.key = undo.previous_key;
        self.refresh_status();

        Some(mv)
    }

    fn refresh_status(&mut self) {
        self.status = status(
            &self.board,
            self.side_to_move,
            self.castling_rights,
            self.en_passant_target,
        );
    }

    /// Count the leaf nodes of the legal move tree `depth` plies deep.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in &moves {
            self.play(*mv);
            nodes += self.perft(depth - 1);
            self.take_back();
        }

        nodes
    }
}
