/// Configuration options for [`Parser`](crate::Parser).
///
/// # Examples
///
/// ```rust
/// use jsonstack::{ParserOptions, SyntaxError, parse_with_options};
///
/// let options = ParserOptions {
///     max_depth: Some(2),
/// };
/// assert!(parse_with_options("[[1]]", options).is_ok());
/// let err = parse_with_options("[[[1]]]", options).unwrap_err();
/// assert_eq!(err.kind(), &SyntaxError::DepthLimitExceeded(2));
/// ```
///
/// # Default
///
/// All limits are off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum number of simultaneously open containers.
    ///
    /// The parser keeps nested containers on a heap-allocated stack, so depth
    /// is otherwise bounded only by memory. Set a limit when parsing
    /// untrusted input whose size is not already capped.
    ///
    /// # Default
    ///
    /// `None`
    pub max_depth: Option<usize>,
}
