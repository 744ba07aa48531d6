use std::path::PathBuf;
use std::sync::Arc;

use chesstrain::commands::{self, feedback::{PanelOptions, PanelState}};
use chesstrain::config;
use chesstrain::data_provider::{FileProvider, TrainingDataProvider};
use chesstrain::tui;
use chesstrain::types::Color;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "chesstrain")]
#[command(about = "Chess puzzle trainer and game sample viewer", long_about = "Chess puzzle trainer and game sample viewer\n\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// No move played yet
    Init,
    /// Last move was correct
    Good,
    /// Last move was wrong
    Fail,
    /// Last move won, still in play mode
    Win,
    /// Puzzle over
    View,
}

impl Mode {
    fn to_panel_state(self) -> PanelState {
        match self {
            Mode::Init => PanelState::Init,
            Mode::Good => PanelState::Good,
            Mode::Fail => PanelState::Fail,
            Mode::Win => PanelState::Win,
            Mode::View => PanelState::View,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    White,
    Black,
}

impl Side {
    fn to_color(self) -> Color {
        match self {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sampled games as HTML markup
    Insight {
        /// JSON file with the insight answer (defaults to the configured file)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Print the puzzle feedback panel as HTML markup
    Feedback {
        /// Puzzle state to render the panel for
        #[arg(short, long, default_value = "init")]
        mode: Mode,

        /// Side the solver plays
        #[arg(short, long, default_value = "white")]
        pov: Side,

        /// Show the view solution button
        #[arg(short, long)]
        can_view_solution: bool,

        /// Show the after view of a failed puzzle
        #[arg(long)]
        failed: bool,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(built-in)".to_string())
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("language: {} ({:?})", cfg.language, cfg.lang());
    println!("puzzles_file: {}", display_path(&cfg.puzzles_file));
    println!("games_file: {}", display_path(&cfg.games_file));
    println!();
    println!("[theme]");
    println!("selection_fg: {:?}", cfg.theme.selection_fg);
    println!("good_fg: {:?}", cfg.theme.good_fg);
    println!("fail_fg: {:?}", cfg.theme.fail_fg);
    println!("last_move_bg: {:?}", cfg.theme.last_move_bg);
    println!("light_square_bg: {:?}", cfg.theme.light_square_bg);
    println!("dark_square_bg: {:?}{}",
        cfg.theme.dark_square_bg(),
        if cfg.theme.dark_square_bg.is_none() { " (auto: 30% darker)" } else { "" }
    );
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

fn create_provider(config: &config::Config) -> Arc<dyn TrainingDataProvider> {
    Arc::new(FileProvider::new(
        config.puzzles_file.clone(),
        config.games_file.clone(),
    ))
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(config: &config::Config, command: Commands) -> anyhow::Result<()> {
    let trans = commands::trans_for(config);
    match command {
        Commands::Config => {
            handle_config_command();
            Ok(())
        }
        Commands::Insight { file } => {
            let games_file = file.or_else(|| config.games_file.clone());
            let provider = FileProvider::new(None, games_file);
            commands::insight::run(&provider, &trans).await
        }
        Commands::Feedback {
            mode,
            pov,
            can_view_solution,
            failed,
        } => {
            let options = PanelOptions {
                state: mode.to_panel_state(),
                pov: pov.to_color(),
                can_view_solution,
                failed,
            };
            commands::feedback::run(options, &trans)
        }
    }
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    // If no subcommand, run TUI
    let Some(command) = cli.command else {
        let provider = create_provider(&config);
        if let Err(e) = tui::run(config, provider).await {
            eprintln!("Error running TUI: {}", e);
            std::process::exit(1);
        }
        return;
    };

    if let Err(e) = execute_command(&config, command).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
