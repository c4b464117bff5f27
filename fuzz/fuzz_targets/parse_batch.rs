#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = std::str::from_utf8(data).unwrap_or("");
    match parse_hours::parse_batch(s) {
        Ok(result) => {
            let sum = result
                .entries
                .iter()
                .fold(0u64, |acc, e| acc.saturating_add(e.seconds));
            assert_eq!(result.total_seconds, sum);
            assert!(!result.entries.is_empty());
            assert!(parse_hours::is_valid_buffer(s));
        }
        Err(parse_hours::Error::InvalidFormat { line }) => {
            assert!(!parse_hours::is_valid_time_token(&line));
            assert!(!parse_hours::is_valid_buffer(s));
        }
        Err(parse_hours::Error::EmptyInput(_)) => assert!(parse_hours::is_valid_buffer(s)),
    }
});
