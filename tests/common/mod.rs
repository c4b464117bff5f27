// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use parse_hours::{parse_batch, BatchResult};

pub fn check_batch(input: &str) -> BatchResult {
    let result = match parse_batch(input) {
        Ok(v) => v,
        Err(e) => panic!("Failed to parse entries from value {input:?}: {e}"),
    };

    let sum: u64 = result.entries.iter().map(|e| e.seconds).sum();
    assert_eq!(result.total_seconds, sum, "Input value: {input:?}");
    assert!(!result.entries.is_empty(), "Input value: {input:?}");

    result
}

pub fn check_total(input: &str, expected: &str) {
    let result = check_batch(input);
    assert_eq!(
        result.summary().total.to_string(),
        expected,
        "Input value: {input:?}"
    );
}
