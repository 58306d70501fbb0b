mod commands;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clubcal_core::config::ClubcalConfig;
use clubcal_core::grid::FillerPolicy;
use clubcal_core::month::MonthCursor;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "clubcal")]
#[command(about = "Show the club's events in a month calendar")]
struct Cli {
    /// Events file URL or path (overrides the config file)
    #[arg(long, global = true)]
    source: Option<String>,

    /// Cells outside the month: "empty" or "adjacent"
    #[arg(long, global = true)]
    filler: Option<FillerPolicy>,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a month, or write it as an HTML page
    Show {
        /// Year to show (defaults to the current one)
        #[arg(long)]
        year: Option<i32>,

        /// Month to show, 1-12 (defaults to the current one)
        #[arg(long)]
        month: Option<u32>,

        /// Write an HTML page to this file instead of printing
        #[arg(long)]
        html: Option<PathBuf>,
    },
    /// List the events of one day
    Day {
        /// Date as YYYY-MM-DD
        date: String,
    },
    /// Step through months interactively
    Browse {
        #[arg(long)]
        year: Option<i32>,

        /// 1-12
        #[arg(long)]
        month: Option<u32>,
    },
    /// Show config paths and effective settings
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = resolve_config(cli.source, cli.filler)?;

    match cli.command {
        Commands::Show { year, month, html } => {
            let cursor = resolve_cursor(year, month)?;
            let session = commands::load_session(&config, cursor).await?;
            commands::show::run(&session, html, config.html_template_path())
        }
        Commands::Day { date } => commands::day::run(&config, &date).await,
        Commands::Browse { year, month } => {
            let cursor = resolve_cursor(year, month)?;
            let session = commands::load_session(&config, cursor).await?;
            commands::browse::run(session)
        }
        Commands::Config => commands::config::run(&config),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Config file and environment, then command-line overrides.
fn resolve_config(source: Option<String>, filler: Option<FillerPolicy>) -> Result<ClubcalConfig> {
    let mut config = ClubcalConfig::load()?;

    if let Some(source) = source {
        config.events_source = source;
    }
    if let Some(filler) = filler {
        config.filler = filler;
    }

    tracing::debug!(
        source = %config.events_source,
        filler = %config.filler,
        "Resolved configuration"
    );

    Ok(config)
}

/// `month` is 1-12 on the command line and zero-based in the cursor.
fn resolve_cursor(year: Option<i32>, month: Option<u32>) -> Result<MonthCursor> {
    let current = MonthCursor::current();
    let year = year.unwrap_or(current.year());

    let month = match month {
        Some(m) if (1..=12).contains(&m) => m - 1,
        Some(m) => anyhow::bail!("Invalid month {}. Expected a number from 1 to 12", m),
        None => current.month(),
    };

    Ok(MonthCursor::new(year, month)?)
}
