#![no_main]

use libfuzzer_sys::fuzz_target;
use navtree::SortMode;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = std::str::from_utf8(data) {
        if let Ok(mode) = value.parse::<SortMode>() {
            // Every accepted spelling maps to a mode whose canonical name parses back
            assert_eq!(mode.as_str().parse::<SortMode>().ok(), Some(mode));
        }
    }
});
