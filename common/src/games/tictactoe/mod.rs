mod board;
mod bot_controller;
mod game_state;
mod score;
mod session;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves};
pub use bot_controller::select_move;
pub use game_state::TicTacToeGameState;
pub use score::ScoreTally;
pub use session::{
    COMPUTER_MARK, ComputerMove, GameResult, MoveResult, OpponentMode, TicTacToeSession,
    TurnReport,
};
pub use types::{BOARD_SIZE, CELL_COUNT, Cell, Mark, Outcome, Position, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line};
