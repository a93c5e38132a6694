//! `slots` CLI — weekly and single-day availability from a JSON event file.
//!
//! ## Usage
//!
//! ```sh
//! # Seven days of free slots starting 2014-08-10
//! slots week --date 2014-08-10 -i events.json
//!
//! # Same, as JSON, reading events from stdin
//! cat events.json | slots week --date 2014-08-10 --json
//!
//! # One day only, with 15-minute slots
//! slots day --date 2014-08-10 -i events.json --slot-minutes 15
//!
//! # Load and validate an event file
//! slots check -i events.json
//! ```
//!
//! The event file is a JSON array:
//!
//! ```json
//! [{"kind": "opening", "starts_at": "2014-08-04T09:30:00",
//!   "ends_at": "2014-08-04T12:30:00", "weekly_recurring": true}]
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use slot_engine::{AvailabilityCalculator, AvailabilityConfig, DayAvailability, InMemoryEventRepository};
use std::io::{self, Read};
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "slots", version, about = "Weekly availability slots from opening and appointment events")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Free slots for consecutive days starting at --date
    Week {
        /// Reference date (YYYY-MM-DD)
        #[arg(short, long)]
        date: NaiveDate,
        /// Events file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Slot length in minutes
        #[arg(long, default_value_t = 30)]
        slot_minutes: i64,
        /// Number of days to report
        #[arg(long, default_value_t = 7)]
        days: u32,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Free slots for a single day
    Day {
        /// Day to inspect (YYYY-MM-DD)
        #[arg(short, long)]
        date: NaiveDate,
        /// Events file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Slot length in minutes
        #[arg(long, default_value_t = 30)]
        slot_minutes: i64,
        /// Print the slots as JSON
        #[arg(long)]
        json: bool,
    },
    /// Load an events file and report what it contains
    Check {
        /// Events file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Week {
            date,
            input,
            slot_minutes,
            days,
            json,
        } => {
            let repo = load_events(input.as_deref())?;
            let config = AvailabilityConfig {
                slot_minutes,
                horizon_days: days,
            };
            let calculator =
                AvailabilityCalculator::with_config(&repo, config).context("Invalid slot settings")?;
            let report = calculator
                .availabilities(date)
                .context("Failed to compute availabilities")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for day in &report {
                    println!("{}", render_day(day));
                }
            }
        }
        Commands::Day {
            date,
            input,
            slot_minutes,
            json,
        } => {
            let repo = load_events(input.as_deref())?;
            let config = AvailabilityConfig {
                slot_minutes,
                ..Default::default()
            };
            let calculator =
                AvailabilityCalculator::with_config(&repo, config).context("Invalid slot settings")?;
            let slots = calculator
                .available_slots(date)
                .context("Failed to compute available slots")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&slots)?);
            } else {
                println!("{}", render_day(&DayAvailability { date, slots }));
            }
        }
        Commands::Check { input } => {
            let repo = load_events(input.as_deref())?;
            let openings = repo.events().iter().filter(|e| e.is_opening()).count();
            let recurring = repo
                .events()
                .iter()
                .filter(|e| e.is_opening() && e.weekly_recurring)
                .count();
            println!("Openings:      {} ({} weekly)", openings, recurring);
            println!("Appointments:  {}", repo.len() - openings);
        }
    }

    Ok(())
}

/// Install a stderr subscriber: `RUST_LOG` wins, else `debug` with
/// `--verbose` and `warn` without.
fn init_logging(verbose: bool) {
    let default_level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str().to_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// `2014-08-11: 9:30, 10:00` or `2014-08-10: -` when nothing is free.
fn render_day(day: &DayAvailability) -> String {
    if day.slots.is_empty() {
        format!("{}: -", day.date)
    } else {
        format!("{}: {}", day.date, day.slots.join(", "))
    }
}

fn load_events(path: Option<&str>) -> Result<InMemoryEventRepository> {
    let json = read_input(path)?;
    let repo = InMemoryEventRepository::from_json(&json).context("Failed to load events")?;
    debug!(events = repo.len(), "events loaded");
    Ok(repo)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
