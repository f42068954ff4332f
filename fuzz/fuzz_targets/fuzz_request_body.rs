//! Fuzz target: request body decoding and traversal.
//!
//! Arbitrary bytes go through the same decode → validate → traverse path the
//! handler uses. Errors are expected; panics are not.

#![no_main]

use libfuzzer_sys::fuzz_target;
use walker_gateway::routes::{decode_body, format_traversal};

fuzz_target!(|data: &[u8]| {
    let Ok(matrix) = decode_body(data) else {
        return;
    };
    if let Ok(values) = walker_core::walk(matrix) {
        let rendered = format_traversal(&values);
        assert_eq!(
            rendered.split(", ").count(),
            values.len(),
            "rendered output must hold one entry per cell"
        );
    }
});
