//! Message timestamp formatting
//!
//! Accepts the common ISO-like shapes chat messages carry and renders a short
//! local clock time such as `3:45 PM`. Unparseable input never fails; it
//! renders as [`INVALID_DATE`].

use chrono::{
    DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc,
};

use crate::config::ClockStyle;

/// Shown in place of a timestamp that is missing or cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

impl ClockStyle {
    fn format_str(self) -> &'static str {
        match self {
            ClockStyle::TwelveHour => "%-I:%M %p",
            ClockStyle::TwentyFourHour => "%H:%M",
        }
    }
}

/// Parse a timestamp into local time
///
/// Offset-aware input (RFC 3339) is converted to the local zone, naive
/// date-times are taken as local, and a bare date is UTC midnight.
pub fn parse_timestamp(input: &str) -> Option<DateTime<Local>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Local));
    }

    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
    {
        return local_from_naive(&naive);
    }

    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).with_timezone(&Local))
}

/// Resolve a wall-clock time in the local zone
///
/// Ambiguous times (clocks turned back) take the earlier instant. Times inside
/// a skipped hour (clocks turned forward) keep the offset from before the
/// transition, so `02:30` in a gap from 02:00 to 03:00 becomes `03:30`.
fn local_from_naive(naive: &NaiveDateTime) -> Option<DateTime<Local>> {
    match Local.from_local_datetime(naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => {
            let day_before = naive.checked_sub_signed(TimeDelta::days(1))?;
            let offset = Local.offset_from_local_datetime(&day_before).earliest()?.fix();
            let utc = naive.checked_sub_signed(TimeDelta::seconds(i64::from(
                offset.local_minus_utc(),
            )))?;
            Some(Local.from_utc_datetime(&utc))
        }
    }
}

/// Format a timestamp for the bubble header
pub fn format_timestamp(input: Option<&str>, clock: ClockStyle) -> String {
    match input.and_then(parse_timestamp) {
        Some(dt) => dt.format(clock.format_str()).to_string(),
        None => {
            log::debug!("Unparseable timestamp: {:?}", input);
            INVALID_DATE.to_string()
        }
    }
}

#[cfg(test)]
#[path = "timestamp_tests.rs"]
mod timestamp_tests;
