#![no_main]

use std::cmp::Ordering;

use libfuzzer_sys::fuzz_target;
use navtree::Priority;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let mid = (0..=text.len() / 2)
            .rev()
            .find(|&i| text.is_char_boundary(i))
            .unwrap_or(0);
        let (left, right) = text.split_at(mid);
        let (a, b) = (Priority::from(left), Priority::from(right));

        let _ = a.to_number();
        let _ = a.to_lexical();
        assert_eq!(a.native_cmp(&b), b.native_cmp(&a).reverse());
        assert_eq!(a.native_cmp(&a), Ordering::Equal);
    }
});
