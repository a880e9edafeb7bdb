use alloc::string::String;

use thiserror::Error;

use crate::parser::ParseState;

/// A parse failure, positioned at the offending part of the input.
///
/// The [`kind`](ParserError::kind) is the discriminator callers should match
/// on. The [`context`](ParserError::context) holds at most the first ten
/// characters of the remaining input where the failure was detected.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{kind} near {context:?} at {line}:{column}")]
pub struct ParserError {
    pub(crate) kind: SyntaxError,
    pub(crate) context: String,
    pub(crate) line: usize,
    pub(crate) column: usize,
}

impl ParserError {
    /// What went wrong.
    #[must_use]
    pub fn kind(&self) -> &SyntaxError {
        &self.kind
    }

    /// Up to ten characters of input starting where the failure was detected.
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }

    /// 1-based line of the failure.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column (in characters) of the failure.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }
}

/// The kinds of syntax error the parser reports.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// An object key was bound twice in the same object.
    #[error("duplicate key {0:?}")]
    DuplicateKey(String),
    /// The grammar has no transition for this token in this state.
    #[error("unexpected {token} in state {state}")]
    UnexpectedToken {
        /// A short description of the token, e.g. ``number `12` ``.
        token: String,
        /// The state the parser was in when the token arrived.
        state: ParseState,
    },
    /// The input ran out before a complete value was read.
    #[error("unexpected end of input in state {state}")]
    UnexpectedEndOfInput {
        /// The state the parser was left in.
        state: ParseState,
    },
    /// Non-whitespace input remains that no token matches.
    #[error("no valid token in state {state}")]
    InvalidToken {
        /// The state the parser was left in.
        state: ParseState,
    },
    /// A complete value was read but non-whitespace input follows it.
    #[error("trailing characters after value")]
    TrailingCharacters,
    /// A number token could not be converted to `f64`.
    #[error("invalid number {0:?}")]
    InvalidNumber(String),
    /// Containers nest deeper than [`ParserOptions::max_depth`](crate::ParserOptions::max_depth).
    #[error("nesting depth exceeds limit of {0}")]
    DepthLimitExceeded(usize),
    /// The parser reached a state its transitions should never produce.
    #[error("internal parser error: {0}")]
    Internal(&'static str),
}
