//! The lexical scanner.
//!
//! [`Tokenizer::next_token`] looks at the front of the remaining input,
//! skips the JSON whitespace characters (space, tab, line feed, carriage
//! return) and tries, in order, to match a [`Literal`], a number, and a
//! string. It never looks past the token it returns, so trailing garbage is
//! left for the parser to judge.

use core::fmt;


/// Punctuation and keyword tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal {
    /// `{`
    BeginObject,
    /// `}`
    EndObject,
    /// `[`
    BeginArray,
    /// `]`
    EndArray,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
}

impl Literal {
    const ALL: [Literal; 9] = [
        Literal::BeginObject,
        Literal::EndObject,
        Literal::BeginArray,
        Literal::EndArray,
        Literal::Colon,
        Literal::Comma,
        Literal::True,
        Literal::False,
        Literal::Null,
    ];

    /// The exact source text of the literal.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Literal::BeginObject => "{",
            Literal::EndObject => "}",
            Literal::BeginArray => "[",
            Literal::EndArray => "]",
            Literal::Colon => ":",
            Literal::Comma => ",",
            Literal::True => "true",
            Literal::False => "false",
            Literal::Null => "null",
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Punctuation or one of the keywords `true`, `false`, `null`.
    Literal(Literal),
    /// A number, not yet converted.
    Number,
    /// A string body, without its quotes and with escapes left as written.
    String,
}

/// One lexical token, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// What was matched.
    pub kind: TokenKind,
    /// The matched text. For strings this is the body between the quotes.
    pub text: &'a str,
    /// Bytes removed from the front of the input, including any leading
    /// whitespace and, for strings, both quotes.
    pub consumed: usize,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Literal(literal) => write!(f, "`{literal}`"),
            TokenKind::Number => write!(f, "number `{}`", self.text),
            TokenKind::String => write!(f, "string \"{}\"", self.text),
        }
    }
}

/// Produces one token at a time from the front of a string.
///
/// The only state kept between calls is the amount of whitespace skipped by
/// the most recent call.
///
/// # Examples
///
/// ```rust
/// use jsonstack::{Literal, TokenKind, Tokenizer};
///
/// let mut tokenizer = Tokenizer::new();
/// let token = tokenizer.next_token("  true, 1").unwrap();
/// assert_eq!(token.kind, TokenKind::Literal(Literal::True));
/// assert_eq!(token.consumed, 6);
/// assert_eq!(tokenizer.skipped_whitespace(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    skipped: usize,
}

impl Tokenizer {
    /// Creates a tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes of whitespace skipped by the last call to
    /// [`next_token`](Self::next_token).
    #[must_use]
    pub fn skipped_whitespace(&self) -> usize {
        self.skipped
    }

    /// Matches the next token at the front of `remaining`.
    ///
    /// Returns `None` when nothing matches after the leading whitespace. That
    /// is the case at the end of input, but also in front of any text that is
    /// not a token, such as a truncated keyword or an unterminated string.
    pub fn next_token<'a>(&mut self, remaining: &'a str) -> Option<Token<'a>> {
        let rest = trim_whitespace(remaining);
        self.skipped = remaining.len() - rest.len();

        let (kind, text, span) = if let Some(literal) = match_literal(rest) {
            let span = literal.as_str().len();
            (TokenKind::Literal(literal), &rest[..span], span)
        } else if let Some(span) = match_number(rest.as_bytes()) {
            (TokenKind::Number, &rest[..span], span)
        } else if let Some(close) = match_string(rest.as_bytes()) {
            (TokenKind::String, &rest[1..close], close + 1)
        } else {
            return None;
        };

        Some(Token {
            kind,
            text,
            consumed: self.skipped + span,
        })
    }
}

#[inline]
pub(crate) fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

#[inline]
pub(crate) fn trim_whitespace(s: &str) -> &str {
    s.trim_start_matches(is_whitespace)
}

fn match_literal(s: &str) -> Option<Literal> {
    Literal::ALL
        .into_iter()
        .find(|literal| s.starts_with(literal.as_str()))
}

fn count_digits(s: &[u8]) -> usize {
    s.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// `-? digit+ ( . digit* )? ( [eE] [+-]? digit+ )?`
///
/// Returns the length of the longest match. An exponent marker that is not
/// followed by digits is not part of the number.
fn match_number(s: &[u8]) -> Option<usize> {
    let mut end = usize::from(s.first() == Some(&b'-'));

    let integer = count_digits(&s[end..]);
    if integer == 0 {
        return None;
    }
    end += integer;

    if s.get(end) == Some(&b'.') {
        end += 1;
        end += count_digits(&s[end..]);
    }

    if matches!(s.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(s.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let digits = count_digits(&s[exp..]);
        if digits > 0 {
            end = exp + digits;
        }
    }

    Some(end)
}

/// Returns the index of the closing quote of a string starting at `s[0]`.
///
/// Multi-byte UTF-8 sequences never contain ASCII bytes, so scanning bytes
/// only ever stops on character boundaries.
fn match_string(s: &[u8]) -> Option<usize> {
    if s.first() != Some(&b'"') {
        return None;
    }

    let mut i = 1;
    loop {
        match *s.get(i)? {
            b'"' => return Some(i),
            b'\\' => match *s.get(i + 1)? {
                b'"' | b'\\' | b'/' | b't' | b'r' | b'n' | b'f' | b'b' => i += 2,
                b'u' => {
                    let hex = s.get(i + 2..i + 6)?;
                    if !hex.iter().all(u8::is_ascii_hexdigit) {
                        return None;
                    }
                    i += 6;
                }
                _ => return None,
            },
            b'\r' | b'\n' | b'\t' => return None,
            _ => i += 1,
        }
    }
}
