mod app;
mod board_ui;

pub use app::TicTacToeApp;
