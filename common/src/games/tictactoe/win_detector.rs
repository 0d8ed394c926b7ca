use super::board::Board;
use super::types::{Outcome, WinningLine};

/// Rows, then columns, then diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for line in WINNING_LINES {
        let first = board.get(line[0]);
        let Some(mark) = first.mark() else {
            continue;
        };
        if board.get(line[1]) == first && board.get(line[2]) == first {
            return Some(WinningLine::new(mark, line));
        }
    }
    None
}

pub fn check_win(board: &Board) -> Outcome {
    if let Some(line) = check_win_with_line(board) {
        return Outcome::win_for(line.mark);
    }

    if board.is_full() {
        Outcome::Tie
    } else {
        Outcome::InProgress
    }
}
