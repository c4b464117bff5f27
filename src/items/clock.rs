// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Parse a clock-style duration item.
//!
//! Grammar definition:
//!
//! ```ebnf
//! clock = hours , ":" , digit , digit , [ ":" , digit , digit ] ;
//!
//! hours = digit , { digit } ;
//! ```
//!
//! Hours are unbounded since the item is an elapsed duration, not a time of
//! day. Minutes and seconds take exactly two digits but are not range
//! checked, so `1:75` reads as one hour and seventy-five minutes.

use winnow::{
    ascii::digit1,
    combinator::{opt, preceded},
    ModalResult, Parser,
};

use super::primitive::{colon, two_digits};
use super::TokenForm;

pub(super) fn parse(input: &mut &str) -> ModalResult<TokenForm> {
    (digit1, colon, two_digits, opt(preceded(colon, two_digits)))
        .map(|(_, _, _, seconds)| match seconds {
            Some(_) => TokenForm::ClockWithSeconds,
            None => TokenForm::Clock,
        })
        .parse_next(input)
}
