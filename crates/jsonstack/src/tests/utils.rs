use alloc::{string::String, vec::Vec};
use core::fmt::Write;

use crate::{Map, Value};

/// Renders a value as compact JSON text. String bodies are written verbatim,
/// which is the inverse of the parser only for strings that need no escaping.
pub(crate) fn write_rendered_value<W: Write>(value: &Value, f: &mut W) -> core::fmt::Result {
    match value {
        Value::Null => f.write_str("null"),
        Value::Boolean(b) => write!(f, "{b}"),
        Value::Number(n) => write!(f, "{n}"),
        Value::String(s) => write!(f, "\"{s}\""),
        Value::Array(items) => {
            f.write_char('[')?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_char(',')?;
                }
                write_rendered_value(item, f)?;
            }
            f.write_char(']')
        }
        Value::Object(map) => {
            f.write_char('{')?;
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    f.write_char(',')?;
                }
                write!(f, "\"{key}\":")?;
                write_rendered_value(item, f)?;
            }
            f.write_char('}')
        }
    }
}

pub(crate) fn render(value: &Value) -> String {
    let mut out = String::new();
    write_rendered_value(value, &mut out).expect("writing to a String cannot fail");
    out
}

/// Converts a `serde_json` tree into ours. Only meaningful for documents
/// without escape sequences, since `serde_json` decodes them and we do not.
pub(crate) fn from_serde(value: &serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(*b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().expect("finite number")),
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(items) => Value::Array(items.iter().map(from_serde).collect()),
        serde_json::Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), from_serde(v)))
                .collect::<Map>(),
        ),
    }
}

/// Strips the characters a raw string body cannot contain.
pub(crate) fn raw_string_body(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '"' | '\\' | '\r' | '\n' | '\t'))
        .collect()
}

/// Number of quickcheck cases to run.
pub(crate) fn test_count() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// Runs the tokenizer to exhaustion, returning every token and the unmatched
/// remainder.
pub(crate) fn collect_tokens(input: &str) -> (Vec<crate::Token<'_>>, &str) {
    let mut tokenizer = crate::Tokenizer::new();
    let mut rest = input;
    let mut tokens = Vec::new();
    while let Some(token) = tokenizer.next_token(rest) {
        rest = &rest[token.consumed..];
        tokens.push(token);
    }
    (tokens, rest)
}
