// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

mod common;

use common::{check_batch, check_total};
use parse_hours::{is_restricted_charset, is_valid_buffer, parse_batch, EmptyInput, Error};
use rstest::rstest;

#[rstest]
#[case::newlines("8\n7:30", "15:30")]
#[case::commas("8,7:30", "15:30")]
#[case::trailing_separators("8\n7:30\n,", "15:30")]
#[case::mixed_forms("8\n7.5\n.5\n1:30\n1:30:15", "19:00:15")]
#[case::blank_lines("\n\n 1:00 \n\n, ,2:00\n", "3:00")]
#[case::crlf("1:00\r\n2:00\r\n", "3:00")]
#[case::bom("\u{feff}8\n1:30", "9:30")]
#[case::past_a_day("12\n12\n12", "36:00")]
#[case::zeros_skipped("0\n0:00\n1", "1:00")]
fn test_totals(#[case] input: &str, #[case] expected: &str) {
    check_total(input, expected);
}

#[test]
fn test_entries_keep_input_order() {
    let result = check_batch("1:30:15, 8\n0\n.5");
    let originals: Vec<_> = result.entries.iter().map(|e| e.original.as_str()).collect();
    let formatted: Vec<_> = result.entries.iter().map(|e| e.formatted.as_str()).collect();
    assert_eq!(originals, ["1:30:15", "8", ".5"]);
    assert_eq!(formatted, ["1:30:15", "8:00", "0:30"]);
}

#[test]
fn test_summary() {
    let summary = check_batch("8\n7:30\n").summary();
    assert_eq!(summary.total_seconds, 55_800);
    assert_eq!(summary.total_minutes, 930);
    assert_eq!(summary.entry_count, 2);
    assert_eq!(summary.average.to_string(), "7:45");
    assert_eq!(summary.average_per_day_display(), "0.3229");
}

#[rstest]
#[case::empty("")]
#[case::whitespace("   ")]
#[case::separators_only("\n,\n,")]
fn test_no_entries(#[case] input: &str) {
    assert_eq!(parse_batch(input), Err(Error::EmptyInput(EmptyInput::NoEntries)));
    assert!(is_valid_buffer(input));
}

#[rstest]
#[case::zero("0")]
#[case::zero_clock("0:00")]
#[case::zero_decimal("0.0")]
#[case::rounded_away("0.0001")]
fn test_nothing_to_process(#[case] input: &str) {
    assert_eq!(
        parse_batch(input),
        Err(Error::EmptyInput(EmptyInput::NothingToProcess))
    );
}

#[rstest]
#[case::letters("abc", "abc")]
#[case::second_line("8\n1:3\nxyz", "1:3")]
#[case::after_zero("0\n-1", "-1")]
#[case::trimmed("8\n  8h  ", "8h")]
fn test_invalid_format(#[case] input: &str, #[case] line: &str) {
    let err = parse_batch(input).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidFormat {
            line: line.to_owned()
        }
    );
    assert!(err.to_string().contains(&format!("\"{line}\"")));
    assert!(!is_valid_buffer(input));
}

#[test]
fn test_restricted_charset() {
    assert!(is_restricted_charset("8\n7.5,1:30\n"));
    assert!(!is_restricted_charset("8\n7.5 1:30"));
    assert!(!is_restricted_charset("abc"));
}
