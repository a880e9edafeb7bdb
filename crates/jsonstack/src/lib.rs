//! A self-contained JSON reader.
//!
//! The whole document must already be in memory as a `&str`. A [`Tokenizer`]
//! peels one token at a time off the front of the remaining input and a
//! [`Parser`] feeds each token through a table-driven state machine. Nested
//! containers are tracked on an explicit stack of frames rather than the call
//! stack, so nesting depth is bounded only by available memory.
//!
//! ```rust
//! use jsonstack::{Value, parse};
//!
//! let value = parse(r#"{"key": [null, true, 3.5]}"#).unwrap();
//! let items = value.get("key").and_then(Value::as_array).unwrap();
//! assert_eq!(items[2], Value::Number(3.5));
//! ```
//!
//! String bodies are returned exactly as they appear between the quotes.
//! Escape sequences are validated but not decoded:
//!
//! ```rust
//! let value = jsonstack::parse(r#""a\nb""#).unwrap();
//! assert_eq!(value.as_str(), Some(r"a\nb"));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod options;
mod parser;
mod tokenizer;
mod value;

#[cfg(test)]
mod tests;

pub use error::{ParserError, SyntaxError};
pub use options::ParserOptions;
pub use parser::{ParseState, Parser};
pub use tokenizer::{Literal, Token, TokenKind, Tokenizer};
pub use value::{Array, Map, Value};

/// Parses a complete JSON document with the default [`ParserOptions`].
///
/// # Errors
///
/// Returns a [`ParserError`] when the input is empty, incomplete, violates
/// the grammar, repeats an object key, or carries trailing content after the
/// top-level value.
///
/// # Examples
///
/// ```rust
/// use jsonstack::{SyntaxError, parse};
///
/// assert_eq!(parse("5").unwrap(), parse("5.0").unwrap());
/// let err = parse(r#"{"a":1,"a":2}"#).unwrap_err();
/// assert!(matches!(err.kind(), SyntaxError::DuplicateKey(key) if key == "a"));
/// ```
pub fn parse(input: &str) -> Result<Value, ParserError> {
    Parser::new(input, ParserOptions::default()).parse()
}

/// Parses a complete JSON document with the given options.
///
/// # Errors
///
/// See [`parse`]. Additionally fails with
/// [`SyntaxError::DepthLimitExceeded`] when `options.max_depth` is set and the
/// document nests deeper than allowed.
pub fn parse_with_options(input: &str, options: ParserOptions) -> Result<Value, ParserError> {
    Parser::new(input, options).parse()
}
