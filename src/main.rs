mod cli;
mod config;
mod db;
mod event;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use event::types::EventType;

#[derive(Parser)]
#[command(name = "chronicle", version, about = "Personal life-event journal with significance scoring")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a single event
    Add {
        /// Event category (residence, job, vacation, photo, ...)
        #[arg(long = "type")]
        event_type: String,
        /// Short title
        title: String,
        /// When it happened (RFC 3339 or YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// User weight in [0.0, 1.0]
        #[arg(long, default_value_t = 0.0)]
        weight: f64,
        /// Mark as favorite
        #[arg(long)]
        favorite: bool,
    },
    /// List events on the timeline
    List {
        /// Only this category
        #[arg(long = "type")]
        event_type: Option<String>,
        /// Only favorites
        #[arg(long)]
        favorites: bool,
        /// Maximum rows
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show one event in full
    Show { id: String },
    /// Set or clear the favorite flag
    Favorite {
        id: String,
        /// Clear instead of set
        #[arg(long)]
        off: bool,
    },
    /// Set the user weight
    Weight { id: String, value: f64 },
    /// Record one interaction with an event
    Touch { id: String },
    /// Delete an event
    Delete { id: String },
    /// Bulk-import events from a JSON file
    Import { file: PathBuf },
    /// Export all events as JSON to stdout
    Export,
    /// Recompute all significance scores
    Rescore,
    /// Show journal statistics
    Stats,
    /// Delete all events (asks for confirmation)
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level)
    let config = config::ChronicleConfig::load()?;

    // Initialize tracing with the configured log level.
    // Log to stderr so stdout stays clean for export output.
    let filter = EnvFilter::try_new(&config.logging.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Add { event_type, title, date, weight, favorite } => {
            let event_type = parse_type(&event_type)?;
            cli::add::add(&config, event_type, &title, &date, weight, favorite)?;
        }
        Command::List { event_type, favorites, limit } => {
            let event_type = event_type.as_deref().map(parse_type).transpose()?;
            cli::list::list(&config, event_type, favorites, limit)?;
        }
        Command::Show { id } => cli::show::show(&config, &id)?,
        Command::Favorite { id, off } => cli::edit::favorite(&config, &id, !off)?,
        Command::Weight { id, value } => cli::edit::weight(&config, &id, value)?,
        Command::Touch { id } => cli::edit::touch(&config, &id)?,
        Command::Delete { id } => cli::edit::delete(&config, &id)?,
        Command::Import { file } => cli::import::import(&config, &file)?,
        Command::Export => cli::export::export(&config)?,
        Command::Rescore => cli::rescore::rescore(&config)?,
        Command::Stats => cli::stats::stats(&config)?,
        Command::Reset => cli::reset::reset(&config)?,
    }

    Ok(())
}

fn parse_type(s: &str) -> Result<EventType> {
    s.parse().map_err(anyhow::Error::msg)
}
