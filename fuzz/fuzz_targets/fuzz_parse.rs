#![no_main]

use jsonstack::{ParserOptions, SyntaxError, parse_with_options};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let options = ParserOptions {
        max_depth: Some(4096),
    };
    let result = parse_with_options(text, options);

    // Every strict JSON document is accepted, except for repeated keys, which
    // serde_json silently merges.
    if serde_json::from_str::<serde_json::Value>(text).is_ok() {
        if let Err(err) = &result {
            assert!(
                matches!(err.kind(), SyntaxError::DuplicateKey(_)),
                "rejected valid JSON {text:?}: {err}"
            );
        }
    }
});
