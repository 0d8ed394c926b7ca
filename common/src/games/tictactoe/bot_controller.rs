use super::board::Board;
use super::types::{CELL_COUNT, Mark, Outcome};
use super::win_detector::check_win;

const WIN_SCORE: i32 = 10;

/// Picks the best cell for `bot_mark` with a full-depth minimax search.
///
/// Faster wins and slower losses score better. Ties between cells go to the
/// lowest index. Returns `None` only when the board has no empty cell. The
/// caller's board is never modified.
pub fn select_move(board: &Board, bot_mark: Mark) -> Option<usize> {
    let mut board = *board;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for position in 0..CELL_COUNT {
        if !board.is_empty_at(position) {
            continue;
        }

        board.set(position, bot_mark);
        let score = minimax(&mut board, 0, false, bot_mark);
        board.clear_cell(position);

        if score > best_score {
            best_score = score;
            best_move = Some(position);
        }
    }

    best_move
}

/// Score of the finished game on `board` from `bot_mark`'s point of view.
fn terminal_score(outcome: Outcome, depth: i32, bot_mark: Mark) -> Option<i32> {
    match outcome {
        Outcome::InProgress => None,
        Outcome::Tie => Some(0),
        Outcome::XWins | Outcome::OWins => {
            if outcome.winner() == Some(bot_mark) {
                Some(WIN_SCORE - depth)
            } else {
                Some(depth - WIN_SCORE)
            }
        }
    }
}

fn minimax(board: &mut Board, depth: i32, is_maximizing: bool, bot_mark: Mark) -> i32 {
    if let Some(score) = terminal_score(check_win(board), depth, bot_mark) {
        return score;
    }

    let (mark, mut best) = if is_maximizing {
        (bot_mark, i32::MIN)
    } else {
        (bot_mark.opponent(), i32::MAX)
    };

    for position in 0..CELL_COUNT {
        if !board.is_empty_at(position) {
            continue;
        }

        board.set(position, mark);
        let score = minimax(board, depth + 1, !is_maximizing, bot_mark);
        board.clear_cell(position);

        best = if is_maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}
