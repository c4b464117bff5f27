// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.
//! A Rust crate for parsing free-form time entries and totalling them.
//! Each line of the input holds one entry in one of the following formats:
//!
//! * whole hours, e.g. "8"
//! * decimal hours, e.g. "7.5" or ".5"
//! * hours and minutes, e.g. "1:30"
//! * hours, minutes and seconds, e.g. "1:30:15"
//!
//! Lines are separated by newlines or commas.
//!
//! ```
//! let result = parse_hours::parse_batch("8\n7.5, 1:30").unwrap();
//! assert_eq!(result.total_seconds, 61_200);
//!
//! let summary = result.summary();
//! assert_eq!(summary.total.to_string(), "17:00");
//! assert_eq!(summary.average.to_string(), "5:40");
//! ```
mod batch;
mod duration;
mod error;
mod items;
mod summary;
mod validate;

pub use batch::{parse_batch, BatchResult, TimeEntry};
pub use duration::{decompose_seconds, format_duration, parse_token_to_seconds, Hms};
pub use error::{EmptyInput, Error};
pub use items::TokenForm;
pub use summary::Summary;
pub use validate::{
    first_invalid_line, is_restricted_charset, is_valid_buffer, is_valid_time_token, split_lines,
    token_form,
};
