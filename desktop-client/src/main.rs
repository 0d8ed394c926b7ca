mod config;
mod offline;
mod state;
mod ui;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use eframe::egui;
use tictactoe_common::games::tictactoe::{OpponentMode, TicTacToeSession};
use tictactoe_common::{log, logger};
use tokio::sync::mpsc;

use config::{Config, get_config_manager};
use offline::local_game_task;
use state::{ClientCommand, GameView, SharedState};
use ui::TicTacToeApp;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OpponentArg {
    Computer,
    Human,
}

impl From<OpponentArg> for OpponentMode {
    fn from(arg: OpponentArg) -> Self {
        match arg {
            OpponentArg::Computer => OpponentMode::Computer,
            OpponentArg::Human => OpponentMode::Human,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_desktop")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Settings file; defaults to tictactoe_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides the opponent stored in the settings file
    #[arg(long, value_enum)]
    opponent: Option<OpponentArg>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config);
    let mut config = config_manager.get_config().unwrap_or_else(|e| {
        log!("Failed to load config, using defaults: {}", e);
        Config::default()
    });
    if let Some(opponent) = args.opponent {
        config.opponent = opponent.into();
    }

    let session = TicTacToeSession::new(config.opponent);
    let shared_state = SharedState::new(GameView::from_session(&session));
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let worker_state = shared_state.clone();
    let worker = std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                log!("Failed to start game runtime: {}", e);
                worker_state.set_error(format!("Failed to start game runtime: {}", e));
                return;
            }
        };
        runtime.block_on(local_game_task(session, worker_state, command_rx));
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([240.0, 240.0])
            .with_title("Tic Tac Toe"),
        ..Default::default()
    };

    let shutdown_tx = command_tx.clone();
    let run_result = eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(|_cc| {
            Ok(Box::new(TicTacToeApp::new(
                shared_state,
                command_tx,
                config_manager,
                config,
            )))
        }),
    );

    let _ = shutdown_tx.send(ClientCommand::Shutdown);
    if worker.join().is_err() {
        log!("Game worker panicked");
    }

    run_result?;

    log!("Client shut down");
    Ok(())
}
