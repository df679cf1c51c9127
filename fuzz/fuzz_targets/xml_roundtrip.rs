#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(doc) = zxml::from_bytes(data) {
        let text = zxml::to_string(&doc);
        assert_eq!(zxml::from_str(&text).ok(), Some(doc));
    }
});
