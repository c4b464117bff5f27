// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Conversion between time entries, second counts and their canonical text.

use std::fmt::{self, Display};

use serde::Serialize;

use crate::items::primitive::{leading_float, leading_uint};

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3600;

/// A second count split into hours, minutes and seconds.
///
/// # Invariants
///
/// - `minutes` and `seconds` are always in the range of `0..60`.
/// - `hours` is unbounded; a duration is not a time of day.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize)]
pub struct Hms {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl From<u64> for Hms {
    fn from(total: u64) -> Self {
        decompose_seconds(total)
    }
}

/// Renders the canonical form, see [`format_duration`].
impl Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.seconds > 0 {
            write!(f, "{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
        } else {
            write!(f, "{}:{:02}", self.hours, self.minutes)
        }
    }
}

/// Split a second count into whole hours, minutes and seconds.
///
/// # Examples
///
/// ```
/// use parse_hours::{decompose_seconds, Hms};
///
/// assert_eq!(
///     decompose_seconds(5415),
///     Hms { hours: 1, minutes: 30, seconds: 15 }
/// );
/// ```
pub fn decompose_seconds(total: u64) -> Hms {
    Hms {
        hours: total / SECONDS_PER_HOUR,
        minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
        seconds: total % SECONDS_PER_MINUTE,
    }
}

/// Render a duration as `H:MM:SS`, or as `H:MM` when there are no seconds.
///
/// Hours are never padded and may exceed 23.
///
/// # Examples
///
/// ```
/// use parse_hours::format_duration;
///
/// assert_eq!(format_duration(1, 30, 0), "1:30");
/// assert_eq!(format_duration(1, 30, 15), "1:30:15");
/// assert_eq!(format_duration(27, 5, 0), "27:05");
/// ```
pub fn format_duration(hours: u64, minutes: u64, seconds: u64) -> String {
    Hms {
        hours,
        minutes,
        seconds,
    }
    .to_string()
}

/// Convert one time entry to a number of seconds.
///
/// The entry does not need to be valid. Malformed numbers read as zero
/// instead of failing, so the result is always a usable duration:
///
/// 1. An entry containing `:` is read as `hours:minutes[:seconds]`.
/// 2. Otherwise an entry containing `.` is read as fractional hours, rounded
///    to the nearest second.
/// 3. Otherwise the entry is read as whole hours.
///
/// # Examples
///
/// ```
/// use parse_hours::parse_token_to_seconds;
///
/// assert_eq!(parse_token_to_seconds("8"), 28800);
/// assert_eq!(parse_token_to_seconds("7.5"), 27000);
/// assert_eq!(parse_token_to_seconds("1:30"), 5400);
/// assert_eq!(parse_token_to_seconds("1:30:15"), 5415);
/// assert_eq!(parse_token_to_seconds("abc"), 0);
/// ```
pub fn parse_token_to_seconds(token: &str) -> u64 {
    let token = token.trim();

    if token.contains(':') {
        let parts: Vec<u64> = token.split(':').map(leading_uint).collect();
        match parts[..] {
            [hours, minutes, seconds] => clock_seconds(hours, minutes, seconds),
            [hours, minutes] => clock_seconds(hours, minutes, 0),
            _ => {
                tracing::warn!(token, parts = parts.len(), "unexpected clock shape, reading as zero");
                0
            }
        }
    } else if token.contains('.') {
        // Saturating float-to-int cast; NaN cannot come out of `leading_float`.
        (leading_float(token) * SECONDS_PER_HOUR as f64).round() as u64
    } else {
        leading_uint(token).saturating_mul(SECONDS_PER_HOUR)
    }
}

fn clock_seconds(hours: u64, minutes: u64, seconds: u64) -> u64 {
    hours
        .saturating_mul(SECONDS_PER_HOUR)
        .saturating_add(minutes.saturating_mul(SECONDS_PER_MINUTE))
        .saturating_add(seconds)
}
