use std::fmt::Display;

use ansi_term::Colour;
use anyhow::Result;
use chrono::{DateTime, Duration, Local, NaiveDateTime};
use chrono_english::parse_date_string;
use clap::{CommandFactory, Parser, ValueEnum};
use now::DateTimeNow;

use crate::{
    tracker::{
        entities::{EventEntity, EventKind},
        store::StateStore,
    },
    utils::time::next_day_start,
};

use super::Args;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DateStyle {
    Uk,
    Us,
}

impl From<DateStyle> for chrono_english::Dialect {
    fn from(value: DateStyle) -> Self {
        match value {
            DateStyle::Uk => Self::Uk,
            DateStyle::Us => Self::Us,
        }
    }
}

impl Display for DateStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateStyle::Uk => write!(f, "uk"),
            DateStyle::Us => write!(f, "us"),
        }
    }
}

#[derive(Debug, Parser)]
pub struct HistoryCommand {
    #[arg(
        long = "start",
        short,
        help = "Start of the range. Examples are \"yesterday\", \"3 days ago\", \"15/03/2025\", \"12:00 16/03/2025\""
    )]
    start_date: Option<String>,
    #[arg(
        long = "end",
        short,
        help = "End of the range. Examples are \"yesterday\", \"3 days ago\", \"15/03/2025\", \"12:00 16/03/2025\""
    )]
    end_date: Option<String>,
    #[arg(long, default_value_t = DateStyle::Uk, help = "Style of dates used during parsing. For Uk it's day/month/year. For Us it's month/day/year")]
    date_style: DateStyle,
    #[arg(
        long = "days",
        default_value_t = false,
        help = "Take inputs as whole days. For example if start and end are both 15/03/2025 this option allows to extract the whole day"
    )]
    treat_as_days: bool,
    #[arg(short, long = "relapses", help = "Only show relapse events")]
    relapses_only: bool,
}

const DEFAULT_HISTORY_DAYS: i64 = 30;

/// Command to list logged events between `start_date` and `end_date`,
/// defaulting to the last 30 days.
pub async fn process_history_command(
    store: &impl StateStore,
    HistoryCommand {
        start_date,
        end_date,
        date_style,
        treat_as_days,
        relapses_only,
    }: HistoryCommand,
) -> Result<()> {
    let (start, end) = parse_range(start_date, end_date, date_style, treat_as_days)?;

    let state = store.load().await?;
    let events = events_between(&state.logs, start, end, relapses_only);

    let mut urges = 0usize;
    let mut relapses = 0usize;
    for event in &events {
        let (label, colour) = match event.kind {
            EventKind::Urge => {
                urges += 1;
                ("urge overcome", Colour::Green)
            }
            EventKind::Relapse => {
                relapses += 1;
                ("relapse", Colour::Red)
            }
        };
        println!(
            "{}\t{}",
            event.timestamp.format("%x %H:%M:%S"),
            colour.paint(label)
        );
    }

    if events.is_empty() {
        println!("No events in this range.");
    } else {
        println!();
        println!(
            "{} event(s): {urges} urge(s) overcome, {relapses} relapse(s)",
            events.len()
        );
    }
    Ok(())
}

/// Also provides sensible defaults for the `history` command.
fn parse_range(
    start_date: Option<String>,
    end_date: Option<String>,
    date_style: DateStyle,
    treat_as_days: bool,
) -> Result<(NaiveDateTime, NaiveDateTime)> {
    let now = Local::now();
    let dialect: chrono_english::Dialect = date_style.into();

    let mut start: DateTime<Local> = match start_date.map(|s| parse_date_string(&s, now, dialect)) {
        Some(Ok(v)) => v.with_timezone(&Local),
        Some(Err(e)) => {
            return Err(Args::command()
                .error(
                    clap::error::ErrorKind::ValueValidation,
                    format!("Failed to validate start date {e}"),
                )
                .into());
        }
        None => now - Duration::days(DEFAULT_HISTORY_DAYS),
    };
    let mut end: DateTime<Local> = match end_date.map(|s| parse_date_string(&s, now, dialect)) {
        Some(Ok(v)) => v.with_timezone(&Local),
        Some(Err(e)) => {
            return Err(Args::command()
                .error(
                    clap::error::ErrorKind::ValueValidation,
                    format!("Failed to validate end date {e}"),
                )
                .into());
        }
        None => now,
    };
    if treat_as_days {
        start = start.beginning_of_day();
        end = next_day_start(end);
    }

    Ok((start.naive_local(), end.naive_local()))
}

/// Events falling inside `[start, end)`, in the order they were appended.
fn events_between(
    logs: &[EventEntity],
    start: NaiveDateTime,
    end: NaiveDateTime,
    relapses_only: bool,
) -> Vec<&EventEntity> {
    logs.iter()
        .filter(|v| v.timestamp >= start && v.timestamp < end)
        .filter(|v| !relapses_only || v.kind == EventKind::Relapse)
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

    use crate::tracker::entities::{EventKind, TrackerState};

    use super::events_between;

    const DAY0: NaiveDateTime =
        NaiveDateTime::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), NaiveTime::MIN);

    fn sample_state() -> TrackerState {
        let mut state = TrackerState::default();
        state.append_event(EventKind::Urge, DAY0);
        state.append_event(EventKind::Relapse, DAY0 + Duration::days(1));
        state.append_event(EventKind::Urge, DAY0 + Duration::days(2));
        state
    }

    #[test]
    fn test_events_between_is_half_open() {
        let state = sample_state();

        let events = events_between(&state.logs, DAY0, DAY0 + Duration::days(2), false);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, EventKind::Urge);
        assert_eq!(events[1].kind, EventKind::Relapse);
    }

    #[test]
    fn test_events_between_relapse_filter() {
        let state = sample_state();

        let events = events_between(&state.logs, DAY0, DAY0 + Duration::days(10), true);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].timestamp, DAY0 + Duration::days(1));
    }

    #[test]
    fn test_events_between_empty_range() {
        let state = sample_state();

        let events = events_between(&state.logs, DAY0 + Duration::days(10), DAY0, false);
        assert!(events.is_empty());
    }
}
