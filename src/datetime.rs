//! Date and time normalization utilities
//!
//! This module reconciles the timestamp representations the rest of the system
//! hands us (ISO strings, local-format strings, epoch seconds) into a single
//! local-zone instant, and computes calendar-period boundaries from it.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// Fixed-format local timestamps used as the parse fallback and for display
pub const LOCAL_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Default elapsed-seconds threshold for [`humanize_delay`]
pub const DEFAULT_DELAY_THRESHOLD_SECS: u64 = 120;

/// Errors raised for date/timestamp input that cannot be reconciled
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unparseable timestamp: {0}")]
    Unparseable(String),

    #[error("epoch seconds out of range: {0}")]
    EpochOutOfRange(i64),
}

/// A point in time in one of the representations callers hand us.
///
/// The `Instant` variant is already normalized and passes through
/// [`normalize`] unchanged.
#[derive(Clone, Debug)]
pub enum Timestamp {
    /// ISO 8601 with offset, or the local `%Y-%m-%d %H:%M:%S` format
    Text(String),
    /// Seconds since the Unix epoch, interpreted in the local zone
    Epoch(i64),
    /// An already-reconciled local instant
    Instant(DateTime<Local>),
}

/// Calendar periods for [`period_start`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Period {
    Day,
    /// Week starting Monday
    Week,
    /// Ten-day span of the month (1st, 10th or 20th)
    TenDay,
    Month,
    Year,
    /// Unbounded; the instant is returned untouched
    All,
}

/// Outcome of [`humanize_delay`]: either a relative phrase, or the instant is
/// still within the threshold window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delay {
    Phrase(String),
    WithinThreshold,
}

/// Parse a localized date string with 年/月/日 separators
///
/// The CJK separator characters are replaced with `-`, stray separators are
/// trimmed, and the rest is parsed as a local date at midnight. Components do
/// not need zero padding ("2023年9月22日" parses as 2023-09-22).
pub fn parse_cn_date(text: &str) -> Result<DateTime<Local>, ParseError> {
    let replaced: String = text
        .trim()
        .chars()
        .map(|c| if matches!(c, '年' | '月' | '日') { '-' } else { c })
        .collect();
    let cleaned = replaced.trim_matches('-');

    let date = NaiveDate::parse_from_str(cleaned, "%Y-%m-%d")
        .map_err(|_| ParseError::Unparseable(text.to_string()))?;
    Ok(local_midnight(date))
}

/// Normalize a timestamp of any supported representation to a local instant
///
/// Strings are tried as RFC 3339 / ISO 8601 with offset first (converted to
/// the local zone), then as the fixed local format. Sub-second precision is
/// lost when the fallback format matches. Epoch seconds are interpreted in
/// the local zone. An already-normalized instant is returned unchanged, so
/// the function is idempotent on its own output.
pub fn normalize(ts: Timestamp) -> Result<DateTime<Local>, ParseError> {
    match ts {
        Timestamp::Text(text) => {
            if let Ok(dt) = DateTime::parse_from_rfc3339(&text) {
                return Ok(dt.with_timezone(&Local));
            }
            match NaiveDateTime::parse_from_str(&text, LOCAL_DATETIME_FORMAT) {
                Ok(dt) => Ok(Local
                    .from_local_datetime(&dt)
                    .single()
                    .unwrap_or_else(|| Local.from_utc_datetime(&dt))),
                Err(_) => Err(ParseError::Unparseable(text)),
            }
        }
        Timestamp::Epoch(secs) => Local
            .timestamp_opt(secs, 0)
            .single()
            .ok_or(ParseError::EpochOutOfRange(secs)),
        Timestamp::Instant(dt) => Ok(dt),
    }
}

/// Format epoch seconds as a local `%Y-%m-%d %H:%M:%S` string
pub fn format_epoch(secs: i64) -> Result<String, ParseError> {
    let dt = normalize(Timestamp::Epoch(secs))?;
    Ok(dt.format(LOCAL_DATETIME_FORMAT).to_string())
}

/// Return the start of the enclosing calendar period for an instant
///
/// Every period except [`Period::All`] truncates to local midnight:
/// - `Day` - the instant's own date
/// - `Week` - the Monday of the instant's week
/// - `TenDay` - day 1, 10 or 20 of the month, the latest not after the instant
/// - `Month` - day 1 of the instant's month
/// - `Year` - January 1 of the instant's year
/// - `All` - the instant itself, time-of-day included
pub fn period_start(period: Period, at: DateTime<Local>) -> DateTime<Local> {
    let date = at.date_naive();
    match period {
        Period::Day => local_midnight(date),
        Period::Week => {
            let monday = date - Duration::days(i64::from(at.weekday().num_days_from_monday()));
            local_midnight(monday)
        }
        Period::TenDay => {
            let first = if at.day() < 10 {
                1
            } else if at.day() < 20 {
                10
            } else {
                20
            };
            local_midnight(date.with_day(first).unwrap_or(date))
        }
        Period::Month => local_midnight(date.with_day(1).unwrap_or(date)),
        Period::Year => {
            local_midnight(NaiveDate::from_ymd_opt(at.year(), 1, 1).unwrap_or(date))
        }
        Period::All => at,
    }
}

/// Decide whether an instant is old enough to deserve a relative phrase
///
/// The input is parsed like [`normalize`] parses strings. When the elapsed
/// time since the instant exceeds `threshold`, a human-readable phrase such
/// as "3 hours ago" is returned; otherwise the instant is still within the
/// threshold window. A future instant is within the window by definition.
pub fn humanize_delay(input: &str, threshold: Duration) -> Result<Delay, ParseError> {
    let instant = normalize(Timestamp::Text(input.to_string()))?;
    let elapsed = Local::now().signed_duration_since(instant);

    if elapsed > threshold {
        Ok(Delay::Phrase(relative_phrase(elapsed)))
    } else {
        Ok(Delay::WithinThreshold)
    }
}

/// Render an elapsed duration as a relative phrase
fn relative_phrase(elapsed: Duration) -> String {
    let secs = elapsed.num_seconds();
    match secs {
        s if s < 60 => format!("{} seconds ago", s),
        s if s < 3600 => format!("{} minutes ago", s / 60),
        s if s < 86_400 => format!("{} hours ago", s / 3600),
        s if s < 30 * 86_400 => format!("{} days ago", s / 86_400),
        s if s < 365 * 86_400 => format!("{} months ago", s / (30 * 86_400)),
        s => format!("{} years ago", s / (365 * 86_400)),
    }
}

fn local_midnight(date: NaiveDate) -> DateTime<Local> {
    let midnight = date.and_time(NaiveTime::MIN);
    Local
        .from_local_datetime(&midnight)
        .single()
        .unwrap_or_else(|| Local.from_utc_datetime(&midnight))
}
