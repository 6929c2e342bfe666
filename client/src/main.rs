mod command;
mod config;
mod render;
mod terminal;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use common::games::SessionRng;
use common::games::tictactoe::{GameMode, SessionDriver, TicTacToeSession};
use common::logger::{self, LogLevel};
use common::log;

use config::{get_config_manager, load_config_with_mode};
use terminal::{TerminalObserver, run_terminal};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    /// Two humans share the terminal
    Pvp,
    /// Human plays X against the bot
    Pvb,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Pvp => GameMode::HumanVsHuman,
            ModeArg::Pvb => GameMode::HumanVsBot,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    /// Game mode; defaults to the last mode played
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    #[arg(long)]
    player_x: Option<String>,

    #[arg(long)]
    player_o: Option<String>,

    /// Config file path; defaults to tictactoe_client_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Also print debug log lines
    #[arg(long)]
    verbose: bool,

    /// Seed for thinking delays and bot remarks
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    let min_level = if args.verbose { LogLevel::Debug } else { LogLevel::Info };
    logger::init_logger(prefix, min_level);

    let config_manager = get_config_manager(args.config.clone());
    let (config, mode) = load_config_with_mode(&config_manager, args.mode.map(GameMode::from));

    let player_x = args.player_x.or_else(|| Some(config.players.player_x.clone()));
    let player_o = match mode {
        GameMode::HumanVsHuman => args.player_o.or_else(|| Some(config.players.player_o.clone())),
        GameMode::HumanVsBot => args.player_o,
    };
    let session = TicTacToeSession::start_with_bot_label(mode, player_x, player_o, &config.players.bot_label);

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session rng seed: {}", rng.seed());

    let observer = TerminalObserver::new();
    let driver = SessionDriver::new(session, config.to_driver_settings(), rng, observer.clone());
    run_terminal(driver, observer).await?;

    Ok(())
}
