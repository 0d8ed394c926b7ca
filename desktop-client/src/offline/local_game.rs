use tictactoe_common::games::tictactoe::{Position, TicTacToeSession};
use tictactoe_common::log;
use tokio::sync::mpsc;

use crate::state::{ClientCommand, SharedState};

/// Owns the session and applies UI commands one at a time, so a human move
/// is never accepted before the computer's reply has been played. Moves are
/// dropped while a finished game's result has not been dismissed.
pub async fn local_game_task(
    mut session: TicTacToeSession,
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
) {
    log!("Local game task started");
    shared_state.publish(&session);

    let mut result_pending = false;

    while let Some(command) = command_rx.recv().await {
        match command {
            ClientCommand::PlaceMark { row, col } => {
                if result_pending {
                    log!("Ignoring move ({}, {}) until the result is dismissed", row, col);
                    continue;
                }
                let report = session.handle_player_move(Position::new(row, col));
                if let Some(result) = report.finished() {
                    shared_state.set_last_result(result.clone());
                    result_pending = true;
                }
            }
            ClientCommand::SetOpponent(opponent) => {
                session.set_opponent(opponent);
            }
            ClientCommand::NewGame => {
                result_pending = false;
                shared_state.clear_last_result();
                session.new_game();
            }
            ClientCommand::DismissResult => {
                result_pending = false;
                shared_state.clear_last_result();
            }
            ClientCommand::Shutdown => {
                break;
            }
        }

        shared_state.publish(&session);
    }

    log!("Local game task stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GameView;
    use tictactoe_common::games::tictactoe::{Board, Cell, Mark, OpponentMode, Outcome};

    fn start(opponent: OpponentMode) -> (
        SharedState,
        mpsc::UnboundedSender<ClientCommand>,
        tokio::task::JoinHandle<()>,
    ) {
        let session = TicTacToeSession::new(opponent);
        let shared_state = SharedState::new(GameView::from_session(&session));
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(local_game_task(session, shared_state.clone(), command_rx));
        (shared_state, command_tx, handle)
    }

    #[tokio::test]
    async fn test_player_move_is_answered_by_computer() {
        let (shared_state, command_tx, handle) = start(OpponentMode::Computer);

        command_tx.send(ClientCommand::PlaceMark { row: 1, col: 1 }).unwrap();
        drop(command_tx);
        handle.await.unwrap();

        let view = shared_state.get_view();
        assert_eq!(view.board.get(4), Cell::X);
        assert_eq!(view.board.get(0), Cell::O);
        assert_eq!(view.current_mark, Mark::X);
        assert!(shared_state.get_last_result().is_none());
    }

    #[tokio::test]
    async fn test_finished_game_publishes_result_and_tally() {
        let (shared_state, command_tx, handle) = start(OpponentMode::Human);

        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            command_tx.send(ClientCommand::PlaceMark { row, col }).unwrap();
        }
        drop(command_tx);
        handle.await.unwrap();

        let result = shared_state.get_last_result().unwrap();
        assert_eq!(result.outcome, Outcome::XWins);
        assert_eq!(result.winning_line.unwrap().cells, [0, 1, 2]);

        let view = shared_state.get_view();
        assert_eq!(view.board, Board::new());
        assert_eq!(view.tally.wins(Mark::X), 1);
    }

    #[tokio::test]
    async fn test_moves_queued_behind_finished_game_are_dropped() {
        let (shared_state, command_tx, handle) = start(OpponentMode::Human);

        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (2, 2)] {
            command_tx.send(ClientCommand::PlaceMark { row, col }).unwrap();
        }
        drop(command_tx);
        handle.await.unwrap();

        assert!(shared_state.get_last_result().is_some());
        let view = shared_state.get_view();
        assert_eq!(view.board.get(8), Cell::Empty);
        assert_eq!(view.board, Board::new());
        assert_eq!(view.current_mark, Mark::X);
    }

    #[tokio::test]
    async fn test_computer_does_not_reply_to_stale_move() {
        let (shared_state, command_tx, handle) = start(OpponentMode::Computer);

        // X 1, O 0, X 2, O 3, X 5, O 6 wins down the left column.
        for (row, col) in [(0, 1), (0, 2), (1, 2), (2, 2)] {
            command_tx.send(ClientCommand::PlaceMark { row, col }).unwrap();
        }
        drop(command_tx);
        handle.await.unwrap();

        let result = shared_state.get_last_result().unwrap();
        assert_eq!(result.outcome, Outcome::OWins);
        assert_eq!(shared_state.get_view().board, Board::new());
    }

    #[tokio::test]
    async fn test_moves_resume_after_result_is_dismissed() {
        let (shared_state, command_tx, handle) = start(OpponentMode::Human);

        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            command_tx.send(ClientCommand::PlaceMark { row, col }).unwrap();
        }
        command_tx.send(ClientCommand::DismissResult).unwrap();
        command_tx.send(ClientCommand::PlaceMark { row: 2, col: 2 }).unwrap();
        drop(command_tx);
        handle.await.unwrap();

        assert!(shared_state.get_last_result().is_none());
        let view = shared_state.get_view();
        assert_eq!(view.board.get(8), Cell::X);
        assert_eq!(view.current_mark, Mark::O);
        assert_eq!(view.tally.wins(Mark::X), 1);
    }

    #[tokio::test]
    async fn test_new_game_also_unblocks_moves() {
        let (shared_state, command_tx, handle) = start(OpponentMode::Human);

        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            command_tx.send(ClientCommand::PlaceMark { row, col }).unwrap();
        }
        command_tx.send(ClientCommand::NewGame).unwrap();
        command_tx.send(ClientCommand::PlaceMark { row: 1, col: 1 }).unwrap();
        drop(command_tx);
        handle.await.unwrap();

        assert!(shared_state.get_last_result().is_none());
        assert_eq!(shared_state.get_view().board.get(4), Cell::X);
    }

    #[tokio::test]
    async fn test_set_opponent_and_new_game() {
        let (shared_state, command_tx, handle) = start(OpponentMode::Computer);

        command_tx.send(ClientCommand::SetOpponent(OpponentMode::Human)).unwrap();
        command_tx.send(ClientCommand::PlaceMark { row: 0, col: 0 }).unwrap();
        command_tx.send(ClientCommand::PlaceMark { row: 0, col: 1 }).unwrap();
        drop(command_tx);
        handle.await.unwrap();

        let view = shared_state.get_view();
        assert_eq!(view.opponent, OpponentMode::Human);
        assert_eq!(view.board.get(0), Cell::X);
        assert_eq!(view.board.get(1), Cell::O);
        assert_eq!(view.board.mark_count(), 2);
    }

    #[tokio::test]
    async fn test_new_game_clears_board() {
        let (shared_state, command_tx, handle) = start(OpponentMode::Computer);

        command_tx.send(ClientCommand::PlaceMark { row: 2, col: 2 }).unwrap();
        command_tx.send(ClientCommand::NewGame).unwrap();
        drop(command_tx);
        handle.await.unwrap();

        let view = shared_state.get_view();
        assert_eq!(view.board, Board::new());
        assert_eq!(view.current_mark, Mark::X);
        assert_eq!(view.tally.games_played(), 0);
    }

    #[tokio::test]
    async fn test_shutdown_stops_task_before_later_commands() {
        let (shared_state, command_tx, handle) = start(OpponentMode::Human);

        command_tx.send(ClientCommand::Shutdown).unwrap();
        command_tx.send(ClientCommand::PlaceMark { row: 0, col: 0 }).unwrap();
        handle.await.unwrap();

        assert_eq!(shared_state.get_view().board, Board::new());
    }
}
