// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Statistics shown for a totalled batch.

use std::fmt::{self, Display};

use serde::Serialize;

use crate::batch::BatchResult;
use crate::duration::{decompose_seconds, Hms};

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Summary {
    pub total: Hms,
    /// Whole minutes, truncated.
    pub total_minutes: u64,
    pub total_seconds: u64,
    pub entry_count: usize,
    /// Mean duration of an entry, rounded to the nearest second.
    pub average: Hms,
    /// Mean duration of an entry as a fraction of a 24 hour day.
    pub average_per_day: f64,
}

impl Summary {
    /// `average_per_day` with four decimal places.
    pub fn average_per_day_display(&self) -> String {
        format!("{:.4}", self.average_per_day)
    }
}

impl From<&BatchResult> for Summary {
    fn from(result: &BatchResult) -> Self {
        let total_seconds = result.total_seconds;
        // Guard against a hand-built result; `parse_batch` never returns one
        // without entries.
        let entry_count = result.entries.len().max(1);
        let count = entry_count as u64;

        // Round half up.
        let average_seconds = total_seconds / count + u64::from(total_seconds % count * 2 >= count);
        let average_per_day = total_seconds as f64 / 3600.0 / 24.0 / entry_count as f64;

        Summary {
            total: decompose_seconds(total_seconds),
            total_minutes: total_seconds / 60,
            total_seconds,
            entry_count: result.entries.len(),
            average: decompose_seconds(average_seconds),
            average_per_day,
        }
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "total:           {}", self.total)?;
        writeln!(f, "total minutes:   {}", self.total_minutes)?;
        writeln!(f, "total seconds:   {}", self.total_seconds)?;
        writeln!(f, "entries:         {}", self.entry_count)?;
        writeln!(f, "average:         {}", self.average)?;
        write!(f, "average per day: {} days", self.average_per_day_display())
    }
}
