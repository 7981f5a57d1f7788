use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::io;
use std::path::PathBuf;

use trainlog::config::AppConfig;
use trainlog::input::Console;
use trainlog::logging::{init_logging, LogLevel};
use trainlog::session::Session;

/// trainlog - Workout Logging CLI
///
/// Enter today's workouts, mark them completed one by one and review the
/// day's table and running statistics. Nothing is saved between runs.
#[derive(Parser)]
#[command(name = "trainlog")]
#[command(author = "trainlog Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Interactive workout logging CLI", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of log output (stderr)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored category accents
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => AppConfig::default(),
    };

    if cli.verbose > 0 {
        config.logging.level = config.logging.level.max(LogLevel::from_verbosity(cli.verbose));
    }
    if cli.no_color {
        config.display.use_color = false;
        colored::control::set_override(false);
    }

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("{}", format!("Logging disabled: {}", e).dimmed());
    }

    let mut session = Session::from_config(&config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    match session.run(&mut console) {
        Ok(summary) => {
            tracing::debug!(?summary, "Session summary");
            Ok(())
        }
        Err(e) => {
            let level = e.severity().to_tracing_level();
            if level == tracing::Level::ERROR {
                tracing::error!(error = %e, "Session failed");
            } else {
                tracing::warn!(error = %e, "Session ended early");
            }
            eprintln!("{}", e.user_message().red());
            if e.is_end_of_input() {
                Ok(())
            } else {
                Err(e.into())
            }
        }
    }
}
