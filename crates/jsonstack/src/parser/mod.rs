//! The explicit-stack JSON parser.
//!
//! The parser repeatedly asks the [`Tokenizer`] for the next token and feeds
//! it through a transition table keyed by (token, [`ParseState`]). Entering a
//! container pushes a [`Frame`] holding the enclosing container, the state to
//! resume in and, for object members, the pending key. Closing a container
//! pops the frame and makes the finished container the pending value of its
//! parent. Nothing recurses, so nesting depth is limited only by memory (or
//! by [`ParserOptions::max_depth`]).
//!
//! # Examples
//!
//! ```rust
//! use jsonstack::{Parser, ParserOptions, Value};
//!
//! let parser = Parser::new(r#"["one", {"obj": "two"}]"#, ParserOptions::default());
//! let value = parser.parse().unwrap();
//! assert_eq!(value.as_array().map(Vec::len), Some(2));
//! ```
#![allow(clippy::enum_glob_use)]

use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::fmt;

use crate::{
    error::{ParserError, SyntaxError},
    options::ParserOptions,
    tokenizer::{Literal, Token, TokenKind, Tokenizer, trim_whitespace},
    value::{Array, Map, Value},
};


/// Number of characters of remaining input quoted in a [`ParserError`].
const CONTEXT_CHARS: usize = 10;

/// A point in the grammar, describing which tokens may come next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    /// Start of input, expecting the top-level value.
    Go,
    /// The top-level value is complete.
    Ok,
    /// Just after `{`, expecting a key or `}`.
    FirstOKey,
    /// Just after `,` in an object, expecting a key.
    OKey,
    /// Just after a key, expecting `:`.
    Colon,
    /// Just after `:`, expecting a member value.
    OValue,
    /// Just after a member value, expecting `,` or `}`.
    OComma,
    /// Just after `[`, expecting an element or `]`.
    FirstAValue,
    /// Just after `,` in an array, expecting an element.
    AValue,
    /// Just after an element, expecting `,` or `]`.
    AComma,
}

impl ParseState {
    /// The canonical lower-case name of the state.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        use ParseState::*;
        match self {
            Go => "go",
            Ok => "ok",
            FirstOKey => "firstokey",
            OKey => "okey",
            Colon => "colon",
            OValue => "ovalue",
            OComma => "ocomma",
            FirstAValue => "firstavalue",
            AValue => "avalue",
            AComma => "acomma",
        }
    }

    /// States in which a value (scalar or container) may start.
    fn accepts_value(self) -> bool {
        use ParseState::*;
        matches!(self, Go | OValue | FirstAValue | AValue)
    }

    /// The state to move to once a value accepted in `self` is complete.
    fn after_value(self) -> Self {
        use ParseState::*;
        match self {
            Go => Ok,
            OValue => OComma,
            FirstAValue | AValue => AComma,
            other => other,
        }
    }
}

impl fmt::Display for ParseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An open container that is still being filled.
#[derive(Debug)]
enum Container {
    Object(Map),
    Array(Array),
}

impl Container {
    fn into_value(self) -> Value {
        match self {
            Container::Object(map) => Value::Object(map),
            Container::Array(array) => Value::Array(array),
        }
    }
}

/// Stack entry, one per open container.
#[derive(Debug)]
struct Frame {
    /// The enclosing container, `None` at the top level.
    container: Option<Container>,
    /// The state to resume in once the nested container closes.
    state: ParseState,
    /// The key the nested container will be bound to, if it is an object
    /// member.
    key: Option<String>,
}

/// Parser context for a single document.
///
/// A `Parser` is consumed by [`parse`](Parser::parse); parse another document
/// with a new `Parser`.
#[derive(Debug)]
pub struct Parser<'a> {
    input: &'a str,
    /// Byte offset of the first unconsumed character.
    pos: usize,
    tokenizer: Tokenizer,

    state: ParseState,
    container: Option<Container>,
    key: Option<String>,
    value: Option<Value>,
    frames: Vec<Frame>,

    options: ParserOptions,
}

impl<'a> Parser<'a> {
    /// Creates a parser over a complete document.
    #[must_use]
    pub fn new(input: &'a str, options: ParserOptions) -> Self {
        Self {
            input,
            pos: 0,
            tokenizer: Tokenizer::new(),
            state: ParseState::Go,
            container: None,
            key: None,
            value: None,
            frames: Vec::with_capacity(16),
            options,
        }
    }

    /// Runs the state machine over the whole input.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParserError`] encountered. No partial value is
    /// returned.
    pub fn parse(mut self) -> Result<Value, ParserError> {
        let input = self.input;

        while let Some(token) = self.tokenizer.next_token(&input[self.pos..]) {
            let start = self.pos + self.tokenizer.skipped_whitespace();
            log::trace!(
                "{token} at {start} in state {} (depth {})",
                self.state,
                self.frames.len()
            );

            if let Err(kind) = self.dispatch(&token) {
                return Err(self.error_at(start, kind));
            }
            self.pos += token.consumed;
        }

        self.finish()
    }

    // ------------------------------------------------------------------------------------------------
    // Transition table
    // ------------------------------------------------------------------------------------------------

    fn dispatch(&mut self, token: &Token<'_>) -> Result<(), SyntaxError> {
        match token.kind {
            TokenKind::Literal(literal) => self.on_literal(literal, token),
            TokenKind::Number => self.on_number(token),
            TokenKind::String => self.on_string(token),
        }
    }

    fn on_literal(&mut self, literal: Literal, token: &Token<'_>) -> Result<(), SyntaxError> {
        match (literal, self.state) {
            (Literal::BeginObject, state) if state.accepts_value() => {
                self.open(Container::Object(Map::new()), ParseState::FirstOKey)
            }
            (Literal::BeginArray, state) if state.accepts_value() => {
                self.open(Container::Array(Array::new()), ParseState::FirstAValue)
            }
            (Literal::EndObject, ParseState::FirstOKey)
            | (Literal::EndArray, ParseState::FirstAValue) => self.close(),
            (Literal::EndObject, ParseState::OComma) => {
                self.bind_member()?;
                self.close()
            }
            (Literal::EndArray, ParseState::AComma) => {
                self.push_element()?;
                self.close()
            }
            (Literal::Colon, ParseState::Colon) => {
                self.check_duplicate_key()?;
                self.state = ParseState::OValue;
                Ok(())
            }
            (Literal::Comma, ParseState::OComma) => {
                self.bind_member()?;
                self.state = ParseState::OKey;
                Ok(())
            }
            (Literal::Comma, ParseState::AComma) => {
                self.push_element()?;
                self.state = ParseState::AValue;
                Ok(())
            }
            (Literal::True, state) if state.accepts_value() => {
                self.scalar(Value::Boolean(true));
                Ok(())
            }
            (Literal::False, state) if state.accepts_value() => {
                self.scalar(Value::Boolean(false));
                Ok(())
            }
            (Literal::Null, state) if state.accepts_value() => {
                self.scalar(Value::Null);
                Ok(())
            }
            _ => Err(self.unexpected(token)),
        }
    }

    fn on_number(&mut self, token: &Token<'_>) -> Result<(), SyntaxError> {
        if !self.state.accepts_value() {
            return Err(self.unexpected(token));
        }
        let number = token
            .text
            .parse::<f64>()
            .map_err(|_| SyntaxError::InvalidNumber(token.text.to_string()))?;
        self.scalar(Value::Number(number));
        Ok(())
    }

    fn on_string(&mut self, token: &Token<'_>) -> Result<(), SyntaxError> {
        match self.state {
            ParseState::FirstOKey | ParseState::OKey => {
                self.key = Some(token.text.to_string());
                self.state = ParseState::Colon;
                Ok(())
            }
            state if state.accepts_value() => {
                self.scalar(Value::String(token.text.to_string()));
                Ok(())
            }
            _ => Err(self.unexpected(token)),
        }
    }

    // ------------------------------------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------------------------------------

    fn scalar(&mut self, value: Value) {
        self.value = Some(value);
        self.state = self.state.after_value();
    }

    fn open(&mut self, container: Container, state: ParseState) -> Result<(), SyntaxError> {
        if let Some(limit) = self.options.max_depth {
            if self.frames.len() >= limit {
                return Err(SyntaxError::DepthLimitExceeded(limit));
            }
        }

        let key = if self.state == ParseState::OValue {
            self.key.take()
        } else {
            None
        };
        self.frames.push(Frame {
            container: self.container.replace(container),
            state: self.state.after_value(),
            key,
        });
        log::trace!("push frame, depth {}", self.frames.len());
        self.state = state;
        Ok(())
    }

    fn close(&mut self) -> Result<(), SyntaxError> {
        let frame = self
            .frames
            .pop()
            .ok_or(SyntaxError::Internal("closing a container with an empty stack"))?;
        let closed = core::mem::replace(&mut self.container, frame.container)
            .ok_or(SyntaxError::Internal("closing without an open container"))?;
        log::trace!("pop frame, depth {}", self.frames.len());

        self.value = Some(closed.into_value());
        self.key = frame.key;
        self.state = frame.state;
        Ok(())
    }

    fn check_duplicate_key(&self) -> Result<(), SyntaxError> {
        let key = self
            .key
            .as_deref()
            .ok_or(SyntaxError::Internal("colon without a pending key"))?;
        match &self.container {
            Some(Container::Object(map)) if map.contains_key(key) => {
                Err(SyntaxError::DuplicateKey(key.to_string()))
            }
            Some(Container::Object(_)) => Ok(()),
            _ => Err(SyntaxError::Internal("object key outside of an object")),
        }
    }

    fn bind_member(&mut self) -> Result<(), SyntaxError> {
        let key = self
            .key
            .take()
            .ok_or(SyntaxError::Internal("object member without a key"))?;
        let value = self
            .value
            .take()
            .ok_or(SyntaxError::Internal("object member without a value"))?;
        match &mut self.container {
            Some(Container::Object(map)) => {
                map.insert(key, value);
                Ok(())
            }
            _ => Err(SyntaxError::Internal("object member outside of an object")),
        }
    }

    fn push_element(&mut self) -> Result<(), SyntaxError> {
        let value = self
            .value
            .take()
            .ok_or(SyntaxError::Internal("array element without a value"))?;
        match &mut self.container {
            Some(Container::Array(array)) => {
                array.push(value);
                Ok(())
            }
            _ => Err(SyntaxError::Internal("array element outside of an array")),
        }
    }

    // ------------------------------------------------------------------------------------------------
    // End of input
    // ------------------------------------------------------------------------------------------------

    fn finish(mut self) -> Result<Value, ParserError> {
        let remaining = &self.input[self.pos..];
        let rest = trim_whitespace(remaining);
        let start = self.pos + (remaining.len() - rest.len());

        let kind = match self.state {
            ParseState::Ok if rest.is_empty() => {
                if !self.frames.is_empty() {
                    return Err(self.error_at(
                        start,
                        SyntaxError::Internal("finished with open containers"),
                    ));
                }
                return match self.value.take() {
                    Some(value) => {
                        log::debug!("parsed {} bytes", self.input.len());
                        Ok(value)
                    }
                    None => Err(self.error_at(
                        start,
                        SyntaxError::Internal("finished without a value"),
                    )),
                };
            }
            ParseState::Ok => SyntaxError::TrailingCharacters,
            state if rest.is_empty() => SyntaxError::UnexpectedEndOfInput { state },
            state => SyntaxError::InvalidToken { state },
        };
        Err(self.error_at(start, kind))
    }

    // ------------------------------------------------------------------------------------------------
    // Errors
    // ------------------------------------------------------------------------------------------------

    fn error_at(&self, offset: usize, kind: SyntaxError) -> ParserError {
        let (consumed, rest) = self.input.split_at(offset);
        let line = consumed.matches('\n').count() + 1;
        let column = consumed
            .rsplit('\n')
            .next()
            .map_or(0, |last| last.chars().count())
            + 1;
        let context: String = rest.chars().take(CONTEXT_CHARS).collect();

        let err = ParserError {
            kind,
            context,
            line,
            column,
        };
        log::debug!("{err}");
        err
    }

    fn unexpected(&self, token: &Token<'_>) -> SyntaxError {
        SyntaxError::UnexpectedToken {
            token: token.to_string(),
            state: self.state,
        }
    }
}
