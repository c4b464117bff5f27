// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use thiserror::Error as ThisError;

/// Why a batch produced no entries.
#[derive(Debug, PartialEq, Eq, Clone, Copy, ThisError)]
pub enum EmptyInput {
    /// The buffer holds no candidate lines at all.
    #[error("no valid time entries found in text")]
    NoEntries,
    /// Every candidate line parsed to a zero duration.
    #[error("no valid time entries to process")]
    NothingToProcess,
}

#[derive(Debug, PartialEq, Eq, Clone, ThisError)]
pub enum Error {
    #[error(transparent)]
    EmptyInput(#[from] EmptyInput),

    #[error("invalid time format: \"{line}\" (accepted formats: {})", ACCEPTED_FORMATS)]
    InvalidFormat { line: String },
}

const ACCEPTED_FORMATS: &str = "8, 7.5, .5, 1:30, 1:30:15";
