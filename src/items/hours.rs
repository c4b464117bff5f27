// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Parse an hour-count item.
//!
//! Grammar definition:
//!
//! ```ebnf
//! whole_hours   = digit , { digit } ;
//!
//! decimal_hours = { digit } , "." , digit , { digit } ;
//! ```

use winnow::{ascii::digit1, ModalResult, Parser};

use super::primitive::decimal_str;
use super::TokenForm;

/// Parse a whole number of hours, e.g. `8`.
pub(super) fn whole(input: &mut &str) -> ModalResult<TokenForm> {
    digit1.value(TokenForm::Hours).parse_next(input)
}

/// Parse a fractional number of hours, e.g. `7.5` or `.5`.
pub(super) fn decimal(input: &mut &str) -> ModalResult<TokenForm> {
    decimal_str.value(TokenForm::DecimalHours).parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::{decimal, whole};
    use crate::items::TokenForm;

    #[test]
    fn test_whole() {
        for input in ["0", "8", "08", "1234"] {
            let mut s = input;
            assert_eq!(whole(&mut s).unwrap(), TokenForm::Hours);
            assert_eq!(s, "");
        }

        for input in ["", "-1", "+1", ".5"] {
            let mut s = input;
            assert!(whole(&mut s).is_err(), "{input}");
        }
    }

    #[test]
    fn test_decimal() {
        for input in ["7.5", ".5", "0.25"] {
            let mut s = input;
            assert_eq!(decimal(&mut s).unwrap(), TokenForm::DecimalHours);
            assert_eq!(s, "");
        }

        for input in ["", "7", "7.", ".", "..5", "-1.5"] {
            let mut s = input;
            assert!(decimal(&mut s).is_err(), "{input}");
        }
    }
}
