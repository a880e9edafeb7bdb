pub const DOCUMENT: &str = r#"
{
    "moderation": {
        "decision": "allow",
        "reason": null
    },
    "request": {
        "filename": "example.rs",
        "language": "rust",
        "options": {
            "opt_level": 2,
            "features": [
                "serde",
                "tokio"
            ]
        }
    },
    "snippets": [
        "fn main() {}",
        "println!(\"hi\")"
    ],
    "matrix": [
        [
            1.5,
            -2e3
        ],
        []
    ],
    "mixed": [
        "s",
        {
            "k": "v"
        },
        [
            "u"
        ],
        true,
        false,
        null
    ],
    "unicode": "שָׁלוֹם"
}
"#;

/// Nests `depth` arrays around a single `0`.
pub fn nested_arrays(depth: usize) -> String {
    let mut s = "[".repeat(depth);
    s.push('0');
    s.push_str(&"]".repeat(depth));
    s
}
