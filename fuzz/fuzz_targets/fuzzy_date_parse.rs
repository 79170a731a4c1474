#![no_main]
use libfuzzer_sys::fuzz_target;
use fuzzy_era::{parse_fuzzy_date, probe_date};

fuzz_target!(|data: &[u8]| {
    // Anything that parses must print back to itself and probe as a date
    if let Ok(date) = parse_fuzzy_date(data) {
        assert!(probe_date(data));
        assert_eq!(parse_fuzzy_date(date.to_string()), Ok(date));
        let _ = date.sort_value();
    }
});
