#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use navtree::application::build_tree;
use navtree::config::parse_with_warnings;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing and building a menu may fail but must never panic
        if let Ok((config, _)) = parse_with_warnings(content, Path::new("fuzz.toml")) {
            if let Ok(mut tree) = build_tree(&config) {
                let _ = tree.render(&navtree::TextRenderer::new());
            }
        }
    }
});
