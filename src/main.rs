//! Wordle Game - CLI
//!
//! Word-guessing game with TUI and line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wordle_game::{
    commands::{run_reset, run_simple, run_stats},
    config::Config,
    game::GameSetup,
    interactive::{App, run_tui},
    storage::Persistence,
    wordlists::PendingDictionary,
};

const LOG_FILE: &str = "wordle_game.log";

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: <config dir>/wordle_game/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Dictionary file: JSON `{"valid": [...], "answers": [...]}` or one word per line
    /// (default: the bundled dictionary)
    #[arg(short = 'w', long, global = true)]
    dictionary: Option<PathBuf>,

    /// Directory for the saved game, statistics and log file
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    /// Seed for target selection (same seed, same words)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Guesses allowed per game
    #[arg(short = 'm', long, global = true)]
    max_attempts: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line mode: type whole words, no TUI
    Simple,

    /// Show saved statistics
    Stats,

    /// Delete the saved game and statistics
    Reset,
}

/// Defaults, then the config file, then command-line flags
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref()).context("failed to load config")?;

    if let Some(dictionary) = &cli.dictionary {
        config.dictionary = Some(dictionary.clone());
    }
    if let Some(state_dir) = &cli.state_dir {
        config.state_dir = Some(state_dir.clone());
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(max_attempts) = cli.max_attempts {
        config.max_attempts = max_attempts;
    }

    config.validate()?;
    Ok(config)
}

/// `RUST_LOG` wins over the configured level
fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Log to stderr
fn init_stderr_logging(config: &Config) {
    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Log to a file in the state directory so the TUI stays clean
///
/// When the file cannot be opened, logging is discarded.
fn init_file_logging(config: &Config, state_dir: &Path) {
    let file = fs::create_dir_all(state_dir).and_then(|()| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(state_dir.join(LOG_FILE))
    });

    let registry = tracing_subscriber::registry().with(env_filter(config));
    match file {
        Ok(file) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        Err(_) => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::sink))
            .init(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let state_dir = config.state_dir();

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            init_file_logging(&config, &state_dir);
            debug!(state_dir = %state_dir.display(), "Starting TUI");
            run_play_command(&config, state_dir)
        }
        Commands::Simple => {
            init_stderr_logging(&config);
            run_simple_command(&config, state_dir)
        }
        Commands::Stats => {
            init_stderr_logging(&config);
            run_stats(&Persistence::in_dir(state_dir), config.max_attempts);
            Ok(())
        }
        Commands::Reset => {
            init_stderr_logging(&config);
            run_reset(&mut Persistence::in_dir(state_dir))
        }
    }
}

fn game_setup(config: &Config, state_dir: PathBuf) -> GameSetup {
    if let Err(err) = fs::create_dir_all(&state_dir) {
        warn!(dir = %state_dir.display(), error = %err, "Cannot create state directory");
    }
    GameSetup::new(
        Persistence::in_dir(state_dir),
        config.max_attempts,
        config.seed,
    )
}

fn run_play_command(config: &Config, state_dir: PathBuf) -> Result<()> {
    // The board comes up while the dictionary loads in the background
    let pending = PendingDictionary::spawn(config.dictionary.clone());
    let app = App::new(pending, game_setup(config, state_dir));
    run_tui(app)
}

fn run_simple_command(config: &Config, state_dir: PathBuf) -> Result<()> {
    let (dictionary, status) = PendingDictionary::spawn(config.dictionary.clone()).wait();
    let mut game = game_setup(config, state_dir).start(dictionary);
    run_simple(&mut game, &status)
}
