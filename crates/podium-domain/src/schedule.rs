//! Schedule start-time handling.
//!
//! Slots are compared by exact timestamp equality; there is no notion of a
//! presentation's duration.

use chrono::NaiveDateTime;

/// Input formats accepted for a start time, tried in order.
///
/// The first two match what an HTML `datetime-local` input submits.
const INPUT_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid start time: {0:?}")]
pub struct StartTimeError(pub String);

/// Parse a submitted start time.
pub fn parse_start_time(raw: &str) -> Result<NaiveDateTime, StartTimeError> {
    let trimmed = raw.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| StartTimeError(raw.to_owned()))
}

/// Human-readable rendering used in listings.
pub fn display_start_time(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// Rendering suitable for the `value` of a `datetime-local` input.
///
/// Seconds are kept so that resubmitting the value yields the stored time.
pub fn input_start_time(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S").to_string()
}
