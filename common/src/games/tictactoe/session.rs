use serde::{Deserialize, Serialize};

use crate::log;
use super::board::Board;
use super::bot_controller::select_move;
use super::game_state::TicTacToeGameState;
use super::score::ScoreTally;
use super::types::{Mark, Outcome, Position, WinningLine};
use super::win_detector::check_win_with_line;

/// The computer always plays this side; the human always opens as X.
pub const COMPUTER_MARK: Mark = Mark::O;

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, Default)]
pub enum OpponentMode {
    #[default]
    Computer,
    Human,
}

/// A finished game, captured before the board was reset.
#[derive(Debug, Clone, PartialEq)]
pub struct GameResult {
    pub outcome: Outcome,
    pub final_board: Board,
    pub winning_line: Option<WinningLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MoveResult {
    Rejected,
    Continue,
    Finished(GameResult),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComputerMove {
    pub position: usize,
    pub result: MoveResult,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TurnReport {
    pub player: MoveResult,
    pub computer: Option<ComputerMove>,
}

impl TurnReport {
    /// The game that ended during this turn, if any.
    pub fn finished(&self) -> Option<&GameResult> {
        if let MoveResult::Finished(result) = &self.player {
            return Some(result);
        }
        match &self.computer {
            Some(ComputerMove { result: MoveResult::Finished(result), .. }) => Some(result),
            _ => None,
        }
    }
}

/// Drives turns: move, winner check, then either tally-and-reset or
/// switch player and let the computer answer.
#[derive(Debug, Clone, Default)]
pub struct TicTacToeSession {
    state: TicTacToeGameState,
    opponent: OpponentMode,
}

impl TicTacToeSession {
    pub fn new(opponent: OpponentMode) -> Self {
        log!("New session against {:?}", opponent);
        Self {
            state: TicTacToeGameState::new(),
            opponent,
        }
    }

    pub fn board(&self) -> &Board {
        self.state.board()
    }

    pub fn current_mark(&self) -> Mark {
        self.state.current_mark()
    }

    pub fn tally(&self) -> &ScoreTally {
        self.state.tally()
    }

    pub fn opponent(&self) -> OpponentMode {
        self.opponent
    }

    /// Changing the opponent abandons the game in progress; the tally stays.
    pub fn set_opponent(&mut self, opponent: OpponentMode) {
        if opponent == self.opponent {
            return;
        }
        log!("Opponent changed to {:?}, starting a new game", opponent);
        self.opponent = opponent;
        self.state.reset_board();
    }

    pub fn new_game(&mut self) {
        self.state.reset_board();
    }

    pub fn is_computer_turn(&self) -> bool {
        self.opponent == OpponentMode::Computer && self.state.current_mark() == COMPUTER_MARK
    }

    /// Places the current player's mark.
    ///
    /// On a finished game the outcome is recorded and the board reset before
    /// returning.
    pub fn place_mark(&mut self, position: usize) -> MoveResult {
        if !self.state.make_move(position) {
            log!("Cell {} is already marked", position);
            return MoveResult::Rejected;
        }

        let outcome = self.state.check_winner();
        if !outcome.is_terminal() {
            self.state.switch_player();
            return MoveResult::Continue;
        }

        let result = GameResult {
            outcome,
            final_board: *self.state.board(),
            winning_line: check_win_with_line(self.state.board()),
        };

        self.state.record_outcome(outcome);
        self.state.reset_board();

        let tally = self.state.tally();
        log!(
            "Game over: {} (X: {}, O: {}, ties: {})",
            outcome,
            tally.wins(Mark::X),
            tally.wins(Mark::O),
            tally.ties()
        );

        MoveResult::Finished(result)
    }

    pub fn place_mark_at(&mut self, position: Position) -> MoveResult {
        match position.index() {
            Some(index) => self.place_mark(index),
            None => {
                log!("Ignoring click outside the board at {:?}", position);
                MoveResult::Rejected
            }
        }
    }

    /// Searches and plays the computer's move. `None` when it is not the
    /// computer's turn.
    pub fn play_computer_turn(&mut self) -> Option<ComputerMove> {
        if !self.is_computer_turn() {
            return None;
        }

        let position = select_move(self.state.board(), COMPUTER_MARK)?;
        log!("Computer plays {}", position);
        let result = self.place_mark(position);
        Some(ComputerMove { position, result })
    }

    /// A human move followed by the computer's reply when one is due.
    pub fn handle_player_move(&mut self, position: Position) -> TurnReport {
        if self.is_computer_turn() {
            log!("Ignoring move at {:?} while the computer is to play", position);
            return TurnReport {
                player: MoveResult::Rejected,
                computer: None,
            };
        }

        let player = self.place_mark_at(position);
        let computer = match player {
            MoveResult::Continue => self.play_computer_turn(),
            MoveResult::Rejected | MoveResult::Finished(_) => None,
        };

        TurnReport { player, computer }
    }
}
