use super::board::Board;
use super::score::ScoreTally;
use super::types::{CELL_COUNT, Mark, Outcome};
use super::win_detector::check_win;

/// Board, player to move and the session's score tally.
///
/// Created once per session. The board is reset after every finished game
/// while the tally keeps counting.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    tally: ScoreTally,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            tally: ScoreTally::new(),
        }
    }

    /// Writes the current mark into `position` if that cell is empty.
    ///
    /// # Panics
    ///
    /// Panics if `position` is not in `0..9`.
    pub fn make_move(&mut self, position: usize) -> bool {
        assert!(position < CELL_COUNT, "position {} is out of range", position);

        if !self.board.is_empty_at(position) {
            return false;
        }

        self.board.set(position, self.current_mark);
        true
    }

    pub fn check_winner(&self) -> Outcome {
        check_win(&self.board)
    }

    pub fn switch_player(&mut self) {
        self.current_mark = self.current_mark.opponent();
    }

    pub fn record_outcome(&mut self, outcome: Outcome) {
        self.tally.record(outcome);
    }

    pub fn reset_board(&mut self) {
        self.board.clear();
        self.current_mark = Mark::X;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn tally(&self) -> &ScoreTally {
        &self.tally
    }

    #[cfg(test)]
    pub(crate) fn set_board(&mut self, board: Board) {
        self.board = board;
    }
}
