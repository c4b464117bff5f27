// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Primitive combinators.

use winnow::{
    ascii::{digit0, digit1, multispace0},
    combinator::{opt, preceded},
    stream::AsChar,
    token::take_while,
    ModalResult, Parser,
};

/// Parse exactly two decimal digits as a string slice.
///
/// Minutes and seconds of the clock forms must always be written with two
/// digits, so `1:3` is rejected while `1:03` is accepted.
pub(super) fn two_digits<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    take_while(2, AsChar::is_dec_digit).parse_next(input)
}

/// Parse a colon.
pub(super) fn colon(input: &mut &str) -> ModalResult<()> {
    ':'.void().parse_next(input)
}

/// Parse a decimal-hours literal (`7.5`, `.5`) as a string slice.
pub(super) fn decimal_str<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    (digit0, '.', digit1).take().parse_next(input)
}

/// Read the leading unsigned integer of `s`, ignoring whatever follows it.
///
/// Leading whitespace is skipped. Anything that does not start with a digit,
/// or a digit run that does not fit in a `u64`, yields `0`.
pub(crate) fn leading_uint(s: &str) -> u64 {
    let mut input = s;
    let parsed: ModalResult<u64> = preceded(multispace0, digit1)
        .verify_map(|digits: &str| digits.parse().ok())
        .parse_next(&mut input);
    parsed.unwrap_or(0)
}

/// Read the leading `digits[.digits]` number of `s` as a float, ignoring
/// whatever follows it.
///
/// Leading whitespace is skipped. A prefix that is not a number (such as a
/// lone `.`) yields `0.0`.
pub(crate) fn leading_float(s: &str) -> f64 {
    let mut input = s;
    let parsed: ModalResult<f64> = preceded(multispace0, (digit0, opt(('.', digit0))).take())
        .verify_map(|number: &str| number.parse().ok())
        .parse_next(&mut input);
    parsed.unwrap_or(0.0)
}
