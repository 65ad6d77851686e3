//! Mailroster CLI - email account management in your terminal

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mailroster_core::adapters::{OsRandom, SeededRandom};
use mailroster_core::config::Config;
use mailroster_core::ports::RandomSource;
use mailroster_core::{LoggingService, PasswordGenerator, SessionController};

mod output;
mod prompt;

use output::ConsolePresenter;
use prompt::ConsolePrompter;

/// Mailroster - manage email accounts from an interactive menu
#[derive(Parser)]
#[command(name = "mailroster", version, about, long_about = None)]
struct Cli {
    /// Do not clear the screen between menus
    #[arg(long)]
    no_clear: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log session events to stderr at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Seed for reproducible passwords (demos and testing only)
    #[arg(long, env = "MAILROSTER_SEED")]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

/// Install the stderr subscriber
///
/// `MAILROSTER_LOG` takes an `EnvFilter` directive; without it only warnings
/// are shown, or everything from debug up with `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("MAILROSTER_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be set; logging must never stop the app
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load config from the mailroster directory, falling back to defaults
fn load_config() -> Result<Config> {
    match Config::config_dir() {
        Some(dir) => Config::load(&dir)
            .with_context(|| format!("Failed to load settings from {}", dir.display())),
        None => Ok(Config::default()),
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = load_config()?;
    if cli.no_clear {
        config.clear_screen = false;
    }
    if cli.no_color {
        config.color = false;
    }
    if !config.color {
        colored::control::set_override(false);
    }

    let rng: Box<dyn RandomSource> = match cli.seed {
        Some(seed) => {
            tracing::debug!(seed, "using seeded password generator");
            Box::new(SeededRandom::new(seed))
        }
        None => Box::new(OsRandom),
    };

    let mut session = SessionController::with_demo_accounts(PasswordGenerator::new(rng))
        .context("Failed to seed demo accounts")?
        .with_logger(LoggingService::new(env!("CARGO_PKG_VERSION")));

    let mut prompter = ConsolePrompter::new();
    let mut presenter = ConsolePresenter::new(config.clear_screen);

    session
        .run(&mut prompter, &mut presenter)
        .context("Session ended unexpectedly")
}
