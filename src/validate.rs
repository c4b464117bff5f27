// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Checks run on a buffer before anything is parsed from it.

use std::sync::LazyLock;

use regex::Regex;

use crate::items::{self, TokenForm};

/// Characters allowed while editing a buffer: digits, `:`, `.`, `,` and `\n`.
static RESTRICTED_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9:.,\n]*$").expect("charset pattern is valid"));

/// Split a buffer into candidate lines.
///
/// Newlines and commas both separate lines. Each line is trimmed of
/// whitespace and byte order marks, and empty lines are dropped.
pub fn split_lines(buffer: &str) -> impl Iterator<Item = &str> {
    buffer
        .split(['\n', ','])
        .map(|line| line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}'))
        .filter(|line| !line.is_empty())
}

/// Return the form a single line is written in, or `None` if it is not a
/// time entry.
pub fn token_form(line: &str) -> Option<TokenForm> {
    let mut input = line.trim();
    items::parse(&mut input).ok()
}

/// Whether a single line is a valid time entry.
///
/// # Examples
///
/// ```
/// use parse_hours::is_valid_time_token;
///
/// assert!(is_valid_time_token("7.5"));
/// assert!(is_valid_time_token("1:30:15"));
/// assert!(!is_valid_time_token("1:3"));
/// assert!(!is_valid_time_token(""));
/// ```
pub fn is_valid_time_token(line: &str) -> bool {
    token_form(line).is_some()
}

/// Return the first line that is not a valid time entry.
pub fn first_invalid_line<'a, I>(lines: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter().find(|line| !is_valid_time_token(line))
}

/// Whether every candidate line of `buffer` is a valid time entry.
///
/// A buffer without any candidate line is valid; whether it holds anything
/// worth totalling is decided by [`parse_batch`](crate::parse_batch).
pub fn is_valid_buffer(buffer: &str) -> bool {
    first_invalid_line(split_lines(buffer)).is_none()
}

/// Whether `buffer` only holds digits, `:`, `.`, `,` and newlines.
///
/// This says nothing about the shape of the lines; `1::,.` passes.
pub fn is_restricted_charset(buffer: &str) -> bool {
    RESTRICTED_CHARSET.is_match(buffer)
}
