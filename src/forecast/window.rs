use chrono::{DateTime, NaiveDateTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use thiserror::Error;
use tracing::debug;

use crate::constants::forecast::{DEFAULT_TIMEZONE, DISPLAY_FORMAT};
use crate::models::weather::ForecastEntry;

/// Formats tried after RFC 3339 for stamps that carry an offset but no seconds.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%#z", "%Y-%m-%dT%H:%M:%S%#z"];

/// Open-Meteo sends `YYYY-MM-DDTHH:MM` in the requested zone.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WindowError {
    #[error("Unparseable forecast timestamp: '{0}'")]
    InvalidTimestamp(String),

    #[error("Unknown timezone: '{0}'")]
    UnknownTimezone(String),
}

/// Resolves the IANA zone name reported by the forecast API, falling back to
/// UTC when the payload carries none.
pub fn resolve_timezone(name: Option<&str>) -> Result<Tz, WindowError> {
    let name = name.unwrap_or(DEFAULT_TIMEZONE);
    name.parse::<Tz>()
        .map_err(|_| WindowError::UnknownTimezone(name.to_string()))
}

enum Stamp {
    Naive(NaiveDateTime),
    Absolute(DateTime<Utc>),
}

fn parse_stamp(raw: &str) -> Option<Stamp> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(Stamp::Absolute(dt.with_timezone(&Utc)));
    }

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, fmt) {
            return Some(Stamp::Absolute(dt.with_timezone(&Utc)));
        }
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(Stamp::Naive)
}

/// Maps a raw series timestamp onto an instant in `tz`.
///
/// Returns `Ok(None)` for wall-clock times that fall into a DST gap. Repeated
/// wall-clock times resolve to the earlier instant.
fn localize(raw: &str, tz: Tz) -> Result<Option<DateTime<Tz>>, WindowError> {
    match parse_stamp(raw) {
        Some(Stamp::Absolute(instant)) => Ok(Some(instant.with_timezone(&tz))),
        Some(Stamp::Naive(naive)) => Ok(tz.from_local_datetime(&naive).earliest()),
        None => Err(WindowError::InvalidTimestamp(raw.to_string())),
    }
}

/// Keeps the hourly points that fall within `[now, now + span]` in `tz`.
///
/// `times` and `temperatures` are parallel sequences; extra elements on the
/// longer side are ignored. Output keeps the input order, with times rendered
/// as local `YYYY-MM-DD HH:MM`.
pub fn forecast_window(
    times: &[String],
    temperatures: &[Option<f64>],
    tz: Tz,
    now: DateTime<Utc>,
    span: TimeDelta,
) -> Result<Vec<ForecastEntry>, WindowError> {
    let now = now.with_timezone(&tz);
    let end = now + span;

    let mut entries = Vec::new();
    for (raw, temperature) in times.iter().zip(temperatures) {
        let Some(instant) = localize(raw, tz)? else {
            debug!(timestamp = %raw, timezone = %tz, "Skipping non-existent local time");
            continue;
        };

        if instant < now || instant > end {
            continue;
        }

        entries.push(ForecastEntry {
            time: instant.format(DISPLAY_FORMAT).to_string(),
            temperature: *temperature,
        });
    }

    Ok(entries)
}
