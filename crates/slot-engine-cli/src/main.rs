//! `slots` CLI — cut, merge and reconcile availability slots from JSON files.
//!
//! ## Usage
//!
//! ```sh
//! # Remove blocked time from slots
//! slots cut --slots slots.json --blocks blocks.json
//!
//! # Merge two slot lists, joining touching slots of equal discount
//! slots merge --first a.json --second b.json -o merged.json
//!
//! # Fold declared schedules into existing slots
//! slots reconcile --slots existing.json --schedules schedules.json
//!
//! # Turn bookings into blocking ranges (stdin → stdout)
//! cat bookings.json | slots blocks
//!
//! # What a client can still book
//! slots bookable --slots slots.json --bookings bookings.json --blackouts off.json
//!
//! # Expand recurring schedule templates into concrete windows
//! slots expand -i templates.json
//! ```
//!
//! Every input file holds a JSON array. Logs go to stderr; set `RUST_LOG`
//! (e.g. `RUST_LOG=debug`) to see what the engine did.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{self, Read};
use tracing::info;
use tracing_subscriber::EnvFilter;

use slot_engine::{BlockingRange, Booking, RecurringSchedule, Schedule, Slot};

#[derive(Parser)]
#[command(name = "slots", version, about = "Compute bookable availability slots")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cut blocking ranges out of slots
    Cut {
        /// JSON array of slots
        #[arg(long)]
        slots: String,
        /// JSON array of blocking ranges
        #[arg(long)]
        blocks: String,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Merge two slot lists, joining touching slots with equal discount
    Merge {
        #[arg(long)]
        first: String,
        #[arg(long)]
        second: String,
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Fold declared schedules into existing slots
    Reconcile {
        /// JSON array of existing slots
        #[arg(long)]
        slots: String,
        /// JSON array of schedules
        #[arg(long)]
        schedules: String,
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Convert bookings into blocking ranges
    Blocks {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Slots left bookable after bookings and blackouts
    Bookable {
        #[arg(long)]
        slots: String,
        /// JSON array of bookings
        #[arg(long)]
        bookings: Option<String>,
        /// JSON array of blocking ranges declared as blackouts
        #[arg(long)]
        blackouts: Option<String>,
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Expand recurring schedule templates into schedules
    Expand {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Cut {
            slots,
            blocks,
            output,
        } => {
            let slots: Vec<Slot> = read_json(Some(&slots))?;
            let blocks: Vec<BlockingRange> = read_json(Some(&blocks))?;
            let result = slot_engine::cut_slots(&slots, &blocks).context("Failed to cut slots")?;
            info!(kept = result.len(), "cut complete");
            write_json(output.as_deref(), &result)?;
        }
        Commands::Merge {
            first,
            second,
            output,
        } => {
            let first: Vec<Slot> = read_json(Some(&first))?;
            let second: Vec<Slot> = read_json(Some(&second))?;
            let result = slot_engine::merge_slots(first, second);
            info!(slots = result.len(), "merge complete");
            write_json(output.as_deref(), &result)?;
        }
        Commands::Reconcile {
            slots,
            schedules,
            output,
        } => {
            let existing: Vec<Slot> = read_json(Some(&slots))?;
            let schedules: Vec<Schedule> = read_json(Some(&schedules))?;
            let result = slot_engine::reconcile(&existing, &schedules)
                .context("Failed to reconcile schedules")?;
            info!(slots = result.len(), "reconcile complete");
            write_json(output.as_deref(), &result)?;
        }
        Commands::Blocks { input, output } => {
            let bookings: Vec<Booking> = read_json(input.as_deref())?;
            let blocks = slot_engine::blocking_ranges_from_bookings(&bookings)
                .context("Failed to convert bookings")?;
            write_json(output.as_deref(), &blocks)?;
        }
        Commands::Bookable {
            slots,
            bookings,
            blackouts,
            output,
        } => {
            let slots: Vec<Slot> = read_json(Some(&slots))?;
            let bookings: Vec<Booking> = read_optional_json(bookings.as_deref())?;
            let blackouts: Vec<BlockingRange> = read_optional_json(blackouts.as_deref())?;
            let result = slot_engine::bookable_slots(&slots, &bookings, &blackouts)
                .context("Failed to compute bookable slots")?;
            info!(slots = result.len(), "bookable slots computed");
            write_json(output.as_deref(), &result)?;
        }
        Commands::Expand { input, output } => {
            let templates: Vec<RecurringSchedule> = read_json(input.as_deref())?;
            let mut schedules = Vec::new();
            for template in &templates {
                let expanded = slot_engine::expand_schedule(template).with_context(|| {
                    format!(
                        "Failed to expand schedule '{}' for professional {}",
                        template.rrule, template.professional_id
                    )
                })?;
                schedules.extend(expanded);
            }
            write_json(output.as_deref(), &schedules)?;
        }
    }

    Ok(())
}

fn read_json<T: DeserializeOwned>(path: Option<&str>) -> Result<T> {
    let raw = read_input(path)?;
    let source = path.unwrap_or("stdin");
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", source))
}

/// An omitted file stands for an empty list.
fn read_optional_json<T: DeserializeOwned>(path: Option<&str>) -> Result<Vec<T>> {
    match path {
        Some(_) => read_json(path),
        None => Ok(Vec::new()),
    }
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

fn write_json<T: Serialize + ?Sized>(path: Option<&str>, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
