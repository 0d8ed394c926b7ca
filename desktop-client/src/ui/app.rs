use eframe::egui;
use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};
use tictactoe_common::games::tictactoe::{GameResult, Mark, OpponentMode, ScoreTally};
use tictactoe_common::log;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::state::{ClientCommand, GameView, SharedState};
use super::board_ui::TicTacToeBoardUi;

pub struct TicTacToeApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<ClientCommand>,
    config_manager: ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>,
    config: Config,
    board_ui: TicTacToeBoardUi,
}

impl TicTacToeApp {
    pub fn new(
        shared_state: SharedState,
        command_tx: mpsc::UnboundedSender<ClientCommand>,
        config_manager: ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>,
        config: Config,
    ) -> Self {
        Self {
            shared_state,
            command_tx,
            config_manager,
            config,
            board_ui: TicTacToeBoardUi::new(),
        }
    }

    fn send(&self, command: ClientCommand) {
        if self.command_tx.send(command).is_err() {
            self.shared_state
                .set_error("The game worker has stopped".to_string());
        }
    }

    fn change_opponent(&mut self, opponent: OpponentMode) {
        self.send(ClientCommand::SetOpponent(opponent));

        self.config.opponent = opponent;
        if let Err(e) = self.config_manager.set_config(&self.config) {
            log!("Failed to save config: {}", e);
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui, view: &GameView) {
        ui.horizontal(|ui| {
            ui.label("Opponent:");
            let mut selected = view.opponent;
            ui.radio_value(&mut selected, OpponentMode::Computer, "Computer (O)");
            ui.radio_value(&mut selected, OpponentMode::Human, "Human");
            if selected != view.opponent {
                self.change_opponent(selected);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("New game").clicked() {
                    self.shared_state.clear_last_result();
                    self.send(ClientCommand::NewGame);
                }
            });
        });

        let status = match view.opponent {
            OpponentMode::Computer if view.current_mark == Mark::O => "Computer is thinking...".to_string(),
            _ => format!("Player {} to move", view.current_mark),
        };
        ui.label(status);
    }

    fn render_scores(&self, ui: &mut egui::Ui, tally: &ScoreTally) {
        ui.horizontal(|ui| {
            ui.label(format!("Player X: {}", tally.wins(Mark::X)));
            ui.separator();
            ui.label(format!("Player O: {}", tally.wins(Mark::O)));
            ui.separator();
            ui.label(format!("Ties: {}", tally.ties()));
        });
    }

    fn render_result_dialog(&self, ctx: &egui::Context, result: &GameResult) {
        egui::Window::new("Result")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.heading(result.outcome.to_string());
                if ui.button("OK").clicked() {
                    self.shared_state.clear_last_result();
                    self.send(ClientCommand::DismissResult);
                }
            });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        if let Some(error) = self.shared_state.get_error() {
            egui::Window::new("Error")
                .collapsible(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.shared_state.clear_error();
                    }
                });
        }

        let view = self.shared_state.get_view();
        let last_result = self.shared_state.get_last_result();

        egui::TopBottomPanel::bottom("score_panel").show(ctx, |ui| {
            self.render_scores(ui, &view.tally);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_controls(ui, &view);
            ui.separator();

            // The finished board stays visible until the result is dismissed.
            let (board, winning_line) = match &last_result {
                Some(result) => (result.final_board, result.winning_line),
                None => (view.board, None),
            };

            ui.vertical_centered(|ui| {
                let clicked = self
                    .board_ui
                    .render(ui, &board, winning_line, last_result.is_none());
                if let Some(position) = clicked {
                    self.send(ClientCommand::PlaceMark {
                        row: position.row,
                        col: position.col,
                    });
                }
            });
        });

        if let Some(result) = last_result {
            self.render_result_dialog(ctx, &result);
        }
    }
}
