// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! A time entry is a single line of text holding exactly one item. There are
//! four flavors of items:
//!  - whole hours, e.g. `8`
//!  - decimal hours, e.g. `7.5` or `.5`
//!  - clock durations, e.g. `1:30`
//!  - clock durations with seconds, e.g. `1:30:15`
//!
//! Whole and decimal hours live in [`hours`], both clock forms in [`clock`].
//! No sign, whitespace or trailing separator is allowed inside an item.

use std::fmt::{self, Display};

use winnow::{
    combinator::alt,
    error::{ContextError, ErrMode},
    ModalResult, Parser,
};

mod clock;
mod hours;
pub(crate) mod primitive;

/// The shape a valid time entry was written in.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenForm {
    /// Whole hours, `8`.
    Hours,
    /// Fractional hours, `7.5`.
    DecimalHours,
    /// Hours and minutes, `1:30`.
    Clock,
    /// Hours, minutes and seconds, `1:30:15`.
    ClockWithSeconds,
}

impl TokenForm {
    /// Every accepted form, in the order they are tried.
    pub const ALL: [TokenForm; 4] = [
        TokenForm::ClockWithSeconds,
        TokenForm::Clock,
        TokenForm::DecimalHours,
        TokenForm::Hours,
    ];

    /// An example entry written in this form.
    pub fn example(self) -> &'static str {
        match self {
            TokenForm::Hours => "8",
            TokenForm::DecimalHours => "7.5",
            TokenForm::Clock => "1:30",
            TokenForm::ClockWithSeconds => "1:30:15",
        }
    }
}

impl Display for TokenForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenForm::Hours => write!(f, "hours"),
            TokenForm::DecimalHours => write!(f, "decimal hours"),
            TokenForm::Clock => write!(f, "H:MM"),
            TokenForm::ClockWithSeconds => write!(f, "H:MM:SS"),
        }
    }
}

/// Parse a whole entry. The entire input must be consumed.
pub(crate) fn parse(input: &mut &str) -> ModalResult<TokenForm> {
    let form = alt((clock::parse, hours::decimal, hours::whole)).parse_next(input)?;
    if !input.is_empty() {
        return Err(ErrMode::Backtrack(ContextError::new()));
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::{parse, TokenForm};

    fn form(input: &str) -> Option<TokenForm> {
        let mut s = input;
        parse(&mut s).ok()
    }

    #[test]
    fn test_forms() {
        assert_eq!(form("8"), Some(TokenForm::Hours));
        assert_eq!(form("7.5"), Some(TokenForm::DecimalHours));
        assert_eq!(form(".5"), Some(TokenForm::DecimalHours));
        assert_eq!(form("1:30"), Some(TokenForm::Clock));
        assert_eq!(form("1:30:15"), Some(TokenForm::ClockWithSeconds));
    }

    #[test]
    fn test_examples_parse_as_their_form() {
        for f in TokenForm::ALL {
            assert_eq!(form(f.example()), Some(f), "{f}");
        }
    }

    #[test]
    fn test_invalid() {
        for input in [
            "", "1:3", "-1", "1..5", "1:30:", "1:30:15:00", "1.5.5", "8.", "8 ", " 8", "1,5",
            "1:30.5", "abc", "1:3a", "８",
        ] {
            assert_eq!(form(input), None, "{input:?}");
        }
    }
}
