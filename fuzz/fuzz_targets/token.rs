#![no_main]

use libfuzzer_sys::fuzz_target;

use parse_hours::{decompose_seconds, is_valid_time_token, parse_token_to_seconds};

fuzz_target!(|data: &[u8]| {
    let s = std::str::from_utf8(data).unwrap_or("");
    let seconds = parse_token_to_seconds(s);

    // Reformatting a valid entry keeps its value.
    if is_valid_time_token(s) && seconds < u64::MAX {
        let formatted = decompose_seconds(seconds).to_string();
        assert!(is_valid_time_token(&formatted));
        assert_eq!(parse_token_to_seconds(&formatted), seconds);
    }
});
