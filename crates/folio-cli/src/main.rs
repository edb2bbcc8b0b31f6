use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio_core::{AppConfig, Portfolio};

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "A terminal portfolio with a circular project carousel")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Portfolio content file (TOML or JSON), overrides the configured one
    #[arg(short = 'c', long = "content", global = true)]
    content: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// List projects with their carousel placement
    Projects {
        /// Index of the active project
        #[arg(short = 'a', long, default_value_t = 0)]
        active: usize,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Inspect or create the configuration file
    Config {
        /// Write the default configuration if none exists
        #[arg(long)]
        init: bool,
        /// Print the configuration file path
        #[arg(long)]
        path: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Arc::new(AppConfig::load()?);
    let runs_tui = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(&config, runs_tui)?;

    let content_path = cli.content.clone().or_else(|| config.content_path());

    match cli.command {
        Some(Commands::Run) | None => {
            let portfolio = Portfolio::load_or_default(content_path.as_deref())?;
            commands::run::run(config, portfolio).await
        }
        Some(Commands::Projects { active, json }) => {
            let portfolio = Portfolio::load_or_default(content_path.as_deref())?;
            commands::projects::run(&config, &portfolio, active, json)
        }
        Some(Commands::Config { init, path }) => commands::config::run(&config, init, path),
    }
}

/// The TUI owns the terminal, so its logs go to a file
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    if to_file {
        let log_path = config.log_path();
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("opening log file {}", log_path.display()))?;

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}
