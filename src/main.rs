mod client;
mod commands;
mod render;

use anyhow::{Context, Result};
use calgrid_core::config::CalgridConfig;
use calgrid_core::{Clock, MonthCursor, parse_date_key};
use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use client::Client;
use commands::new::NewEvent;
use commands::update::EventChanges;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "calgrid")]
#[command(about = "Browse and edit your calendar as a month grid")]
struct Cli {
    /// Refuse events whose date is not a real YYYY-MM-DD day
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month grid with event dots
    Month {
        /// Year to show (defaults to the current year)
        #[arg(short, long, allow_hyphen_values = true)]
        year: Option<i32>,

        /// Month to show, 1-12 (defaults to the current month)
        #[arg(short, long, allow_hyphen_values = true)]
        month: Option<i32>,

        /// Months to move from the chosen month, e.g. -1 for the previous one
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i32,

        /// Step one month back (repeatable)
        #[arg(short, long, action = ArgAction::Count)]
        prev: u8,

        /// Step one month forward (repeatable)
        #[arg(short, long, action = ArgAction::Count)]
        next: u8,
    },
    /// List the events on one day
    Day {
        /// Day to list (YYYY-MM-DD, defaults to today)
        #[arg(value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
    },
    /// Show the details of one event
    Show { id: i64 },
    /// Create a new event
    New {
        title: String,

        /// Day of the event (YYYY-MM-DD)
        #[arg(short, long, value_parser = parse_date_arg)]
        date: NaiveDate,

        /// Start time (HH:MM)
        #[arg(short, long)]
        start: Option<String>,

        /// End time (HH:MM)
        #[arg(short, long)]
        end: Option<String>,

        #[arg(short, long)]
        location: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Label to attach (repeatable)
        #[arg(long = "label")]
        labels: Vec<String>,
    },
    /// Change fields of an existing event
    Update {
        id: i64,

        #[arg(short, long)]
        title: Option<String>,

        /// Move the event to another day (YYYY-MM-DD)
        #[arg(short, long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,

        #[arg(short, long)]
        start: Option<String>,

        #[arg(short, long)]
        end: Option<String>,

        #[arg(short, long)]
        location: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Label to attach (repeatable)
        #[arg(long = "label")]
        add_labels: Vec<String>,

        /// Position of a label to drop, starting at 0 (repeatable)
        #[arg(long = "remove-label")]
        remove_labels: Vec<usize>,
    },
    /// Delete an event
    Delete { id: i64 },
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_date_key(s.trim()).map_err(|e| e.to_string())
}

/// Month picked by `calgrid month`; `month` is 1-based, as typed.
fn resolve_month(
    today: MonthCursor,
    year: Option<i32>,
    month: Option<i32>,
    offset: i32,
    prev: u8,
    next: u8,
) -> MonthCursor {
    MonthCursor::new(
        year.unwrap_or(today.year()),
        month.map(|m| m - 1).unwrap_or(today.month() as i32),
    )
    .offset(offset + i32::from(next) - i32::from(prev))
}

/// Log to stderr, filtered by CALGRID_LOG (or RUST_LOG), warnings by default.
fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_env("CALGRID_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("Failed to set up logging")
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    let config = CalgridConfig::load()?;
    let clock = config.clock()?;
    let strict = cli.strict || config.strict_dates;
    let client = Client::new(&config)?;

    tracing::debug!(api = %config.api_base_url, strict, "loaded config");

    match cli.command {
        Commands::Month {
            year,
            month,
            offset,
            prev,
            next,
        } => {
            let cursor = resolve_month(MonthCursor::today(&clock), year, month, offset, prev, next);
            commands::month::run(&client, cursor, strict, &clock).await
        }
        Commands::Day { date } => {
            let date = date.unwrap_or_else(|| clock.today());
            commands::day::run(&client, date, strict).await
        }
        Commands::Show { id } => commands::show::run(&client, id).await,
        Commands::New {
            title,
            date,
            start,
            end,
            location,
            description,
            labels,
        } => {
            let new_event = NewEvent {
                title,
                date,
                start,
                end,
                location,
                description,
                labels,
            };
            commands::new::run(&client, new_event).await
        }
        Commands::Update {
            id,
            title,
            date,
            start,
            end,
            location,
            description,
            add_labels,
            remove_labels,
        } => {
            let changes = EventChanges {
                title,
                date,
                start,
                end,
                location,
                description,
                add_labels,
                remove_labels,
            };
            commands::update::run(&client, id, changes).await
        }
        Commands::Delete { id } => commands::delete::run(&client, id).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> MonthCursor {
        MonthCursor::new(2026, 9)
    }

    #[test]
    fn month_flags_parse() {
        let cli =
            Cli::try_parse_from(["calgrid", "month", "--prev", "-p", "--offset", "-1"]).unwrap();
        let Commands::Month { prev, next, offset, .. } = cli.command else {
            panic!("expected month command");
        };
        assert_eq!((prev, next, offset), (2, 0, -1));
    }

    #[test]
    fn prev_and_next_step_from_the_chosen_month() {
        assert_eq!(resolve_month(today(), None, None, 0, 1, 0).title(), "September 2026");
        assert_eq!(resolve_month(today(), None, None, 0, 0, 3).title(), "January 2027");
        assert_eq!(
            resolve_month(today(), Some(2026), Some(1), 0, 1, 0).title(),
            "December 2025"
        );
        assert_eq!(
            resolve_month(today(), Some(2026), Some(13), -2, 0, 1).title(),
            "December 2026"
        );
    }

    #[test]
    fn date_arguments_are_trimmed() {
        assert_eq!(
            parse_date_arg(" 2026-01-12 "),
            Ok(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap())
        );
        assert!(parse_date_arg("+026-01-12").is_err());
    }
}
