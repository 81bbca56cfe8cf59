// crates/domain/src/codec.rs
use std::{
    ops::RangeInclusive,
    time::{SystemTime, UNIX_EPOCH},
};

use chrono::{DateTime, Datelike, Local, NaiveDateTime, TimeZone, Timelike, Utc};
use file_times_shared_kernel::{DomainError, DomainResult, FormattedDate};

/// `chrono` layout of the fixed text format (24-hour clock).
pub const DATE_PATTERN: &str = "%d/%m/%Y %H:%M:%S";

/// Human-readable hint for the same layout, shown next to input fields.
pub const DISPLAY_PATTERN: &str = "dd/mm/yyyy hh:mm:ss";

// "dd/mm/yyyy hh:mm:ss"
const FORMATTED_LEN: usize = 19;
const SEPARATORS: [(usize, u8); 5] = [(2, b'/'), (5, b'/'), (10, b' '), (13, b':'), (16, b':')];
// Years that fit the four-digit field.
const YEARS: RangeInclusive<i32> = 0..=9999;
const NANOS_PER_SEC: u32 = 1_000_000_000;

/// Converts between instants and their fixed-format text in local time.
///
/// Formatting truncates to whole seconds. Parsing is strict about the layout:
/// every field is zero padded and nothing may surround the text, so a value
/// that parses also formats back to exactly the same characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateCodec;

impl DateCodec {
    /// Render `instant` in the host's local calendar.
    ///
    /// Every value produced by [`DateCodec::parse`] fits the pattern. Use
    /// [`DateCodec::try_format`] for instants read from the filesystem.
    pub fn format(instant: DateTime<Local>) -> FormattedDate {
        FormattedDate::new(instant.format(DATE_PATTERN).to_string())
    }

    /// Render a filesystem instant, or fail if its local year has no
    /// four-digit form.
    pub fn try_format(instant: SystemTime) -> DomainResult<FormattedDate> {
        let (seconds, nanos) = unix_parts(instant);
        DateTime::<Utc>::from_timestamp(seconds, nanos)
            // Bound the UTC year before the zone lookup.
            .filter(|utc| (YEARS.start() - 1..=YEARS.end() + 1).contains(&utc.year()))
            .map(|utc| utc.with_timezone(&Local))
            .filter(|local| YEARS.contains(&local.year()))
            .map(Self::format)
            .ok_or(DomainError::OutOfRange { seconds, expected: DISPLAY_PATTERN })
    }

    /// Parse `text` as a local date and time.
    ///
    /// A local time skipped by a DST transition is rejected; a repeated one
    /// resolves to its earlier occurrence.
    pub fn parse(text: &str) -> DomainResult<DateTime<Local>> {
        check_layout(text)?;

        let naive = NaiveDateTime::parse_from_str(text, DATE_PATTERN).map_err(|e| parse_error(text, e))?;
        // chrono accepts ":60" as a leap second; the format has no room for it.
        if naive.nanosecond() >= NANOS_PER_SEC {
            return Err(parse_error(text, "leap seconds are not supported"));
        }

        Local
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| DomainError::NonexistentLocalTime { input: text.to_string() })
    }

    /// Same as [`DateCodec::parse`], converted to the filesystem's time type.
    pub fn parse_system_time(text: &str) -> DomainResult<SystemTime> {
        Self::parse(text).map(SystemTime::from)
    }

    /// Whether two instants fall into the same whole second.
    pub fn same_second(a: SystemTime, b: SystemTime) -> bool {
        unix_parts(a).0 == unix_parts(b).0
    }
}

/// Whole seconds (floored) and sub-second nanos relative to the Unix epoch.
/// Seconds saturate at the `i64` bounds.
fn unix_parts(instant: SystemTime) -> (i64, u32) {
    match instant.duration_since(UNIX_EPOCH) {
        Ok(after) => (i64::try_from(after.as_secs()).unwrap_or(i64::MAX), after.subsec_nanos()),
        Err(err) => {
            let before = err.duration();
            let seconds = i64::try_from(before.as_secs()).map_or(i64::MIN, |s| -s);
            match before.subsec_nanos() {
                0 => (seconds, 0),
                nanos => (seconds.saturating_sub(1), NANOS_PER_SEC - nanos),
            }
        }
    }
}

fn check_layout(text: &str) -> DomainResult<()> {
    let bytes = text.as_bytes();
    if bytes.len() != FORMATTED_LEN {
        return Err(parse_error(text, format!("expected {FORMATTED_LEN} characters, found {}", text.chars().count())));
    }
    for (idx, byte) in bytes.iter().enumerate() {
        let valid = match SEPARATORS.iter().find(|(pos, _)| *pos == idx) {
            Some((_, sep)) => byte == sep,
            None => byte.is_ascii_digit(),
        };
        if !valid {
            return Err(parse_error(text, format!("unexpected character at position {}", idx + 1)));
        }
    }
    Ok(())
}

fn parse_error(text: &str, details: impl ToString) -> DomainError {
    DomainError::Parse { input: text.to_string(), expected: DISPLAY_PATTERN, details: details.to_string() }
}
