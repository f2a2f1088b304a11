mod analyze;
mod config;
mod play;
mod selfplay;

use clap::{Parser, Subcommand};
use tictactoe_engine::config::{ConfigManager, Validate};
use tictactoe_engine::logger;

use config::{Config, OpponentKind, get_config_manager};

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against an engine that never loses")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Path to a YAML config file; defaults to one next to the executable.
    #[arg(long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play interactively in the terminal (default).
    Play,
    /// Evaluate a board such as "XX./.O./..." and show the engine's move.
    Analyze { board: String },
    /// Pit an opponent against the engine for a number of games.
    Selfplay {
        #[arg(long)]
        games: Option<u32>,
        #[arg(long, value_enum)]
        opponent: Option<OpponentKind>,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn load_config(path: Option<String>) -> Result<Config, String> {
    match path {
        Some(path) => ConfigManager::<_, Config, _>::from_yaml_file(path).get_config(),
        None => get_config_manager().get_config(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = load_config(args.config)?;

    match args.command.unwrap_or(Command::Play) {
        Command::Play => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            play::run(&config, stdin.lock(), &mut stdout)?;
        }
        Command::Analyze { board } => {
            analyze::run(&board, &mut std::io::stdout())?;
        }
        Command::Selfplay {
            games,
            opponent,
            seed,
        } => {
            let settings = config.selfplay.with_overrides(games, opponent, seed);
            settings.validate()?;
            selfplay::run(&settings)?;
        }
    }

    Ok(())
}
