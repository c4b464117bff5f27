// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Totalling a buffer of time entries.

use serde::Serialize;

use crate::duration::{decompose_seconds, parse_token_to_seconds};
use crate::error::{EmptyInput, Error};
use crate::summary::Summary;
use crate::validate::{first_invalid_line, split_lines};

/// One line of the input with its parsed duration.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct TimeEntry {
    /// The line as written, trimmed.
    pub original: String,
    /// The canonical rendering of `seconds`.
    pub formatted: String,
    pub seconds: u64,
}

/// The entries of a buffer and their total.
///
/// # Invariants
///
/// - `total_seconds` is the sum of the `seconds` of every entry.
/// - `entries` is never empty and keeps the order of the input lines.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct BatchResult {
    pub total_seconds: u64,
    pub entries: Vec<TimeEntry>,
}

impl BatchResult {
    pub fn summary(&self) -> Summary {
        Summary::from(self)
    }
}

/// Parse every line of `buffer` and total them.
///
/// Lines are separated by newlines or commas. The whole buffer is validated
/// before any line is parsed, so a single malformed line fails the batch.
/// Lines worth zero seconds (such as `0` or `0:00`) are left out.
///
/// # Examples
///
/// ```
/// use parse_hours::parse_batch;
///
/// let result = parse_batch("8\n7:30\n,").unwrap();
/// assert_eq!(result.total_seconds, 55_800);
/// assert_eq!(result.entries.len(), 2);
/// assert_eq!(result.entries[1].formatted, "7:30");
/// ```
///
/// # Errors
///
/// - [`Error::EmptyInput`] if the buffer has no lines, or if no line is worth
///   more than zero seconds.
/// - [`Error::InvalidFormat`] with the first line that is not a time entry.
pub fn parse_batch(buffer: &str) -> Result<BatchResult, Error> {
    let lines: Vec<&str> = split_lines(buffer).collect();
    if lines.is_empty() {
        return Err(EmptyInput::NoEntries.into());
    }

    if let Some(line) = first_invalid_line(lines.iter().copied()) {
        tracing::debug!(line, "rejecting batch");
        return Err(Error::InvalidFormat {
            line: line.to_owned(),
        });
    }

    let mut total_seconds = 0u64;
    let mut entries = Vec::with_capacity(lines.len());
    for line in lines {
        let seconds = parse_token_to_seconds(line);
        if seconds == 0 {
            tracing::debug!(line, "skipping zero duration");
            continue;
        }

        let formatted = decompose_seconds(seconds).to_string();
        tracing::debug!(line, seconds, %formatted, "parsed entry");
        total_seconds = total_seconds.saturating_add(seconds);
        entries.push(TimeEntry {
            original: line.to_owned(),
            formatted,
            seconds,
        });
    }

    if entries.is_empty() {
        return Err(EmptyInput::NothingToProcess.into());
    }

    Ok(BatchResult {
        total_seconds,
        entries,
    })
}
