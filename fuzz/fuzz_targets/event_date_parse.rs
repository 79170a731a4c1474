#![no_main]
use libfuzzer_sys::fuzz_target;
use fuzzy_era::{parse_event_date, probe_event_date};

fuzz_target!(|data: &[u8]| {
    let probed = probe_event_date(data);
    if let Ok(event) = parse_event_date(data) {
        assert!(probed);
        assert_eq!(parse_event_date(event.to_string()), Ok(event));
    }
});
