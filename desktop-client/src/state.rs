use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use eframe::egui;
use tictactoe_common::games::tictactoe::{
    Board, GameResult, Mark, OpponentMode, ScoreTally, TicTacToeSession,
};

#[derive(Debug, Clone, PartialEq)]
pub enum ClientCommand {
    PlaceMark { row: usize, col: usize },
    SetOpponent(OpponentMode),
    NewGame,
    /// The player closed the result dialog.
    DismissResult,
    Shutdown,
}

/// Snapshot of the session for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct GameView {
    pub board: Board,
    pub current_mark: Mark,
    pub tally: ScoreTally,
    pub opponent: OpponentMode,
}

impl GameView {
    pub fn from_session(session: &TicTacToeSession) -> Self {
        Self {
            board: *session.board(),
            current_mark: session.current_mark(),
            tally: *session.tally(),
            opponent: session.opponent(),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Clone)]
pub struct SharedState {
    view: Arc<Mutex<GameView>>,
    last_result: Arc<Mutex<Option<GameResult>>>,
    error: Arc<Mutex<Option<String>>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

impl SharedState {
    pub fn new(view: GameView) -> Self {
        Self {
            view: Arc::new(Mutex::new(view)),
            last_result: Arc::new(Mutex::new(None)),
            error: Arc::new(Mutex::new(None)),
            context: Arc::new(Mutex::new(None)),
        }
    }

    pub fn has_context(&self) -> bool {
        lock(&self.context).is_some()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *lock(&self.context) = Some(ctx);
    }

    fn request_repaint(&self) {
        if let Some(ctx) = lock(&self.context).as_ref() {
            ctx.request_repaint();
        }
    }

    pub fn publish(&self, session: &TicTacToeSession) {
        *lock(&self.view) = GameView::from_session(session);
        self.request_repaint();
    }

    pub fn get_view(&self) -> GameView {
        lock(&self.view).clone()
    }

    pub fn set_last_result(&self, result: GameResult) {
        *lock(&self.last_result) = Some(result);
        self.request_repaint();
    }

    pub fn get_last_result(&self) -> Option<GameResult> {
        lock(&self.last_result).clone()
    }

    pub fn clear_last_result(&self) {
        *lock(&self.last_result) = None;
    }

    pub fn set_error(&self, error: String) {
        *lock(&self.error) = Some(error);
        self.request_repaint();
    }

    pub fn get_error(&self) -> Option<String> {
        lock(&self.error).clone()
    }

    pub fn clear_error(&self) {
        *lock(&self.error) = None;
    }
}
