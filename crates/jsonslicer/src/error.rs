//! Error types.
use alloc::string::String;

/// A rejected combination of [`crate::SlicerOptions`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `path_mode` was not one of `ignore`, `map_keys`, `full`.
    #[error("invalid path mode {0:?}")]
    InvalidPathMode(String),
    /// `errors` was not one of `strict`, `replace`, `ignore`.
    #[error("unsupported error policy {0:?}")]
    UnsupportedErrorPolicy(String),
    /// `yajl_dont_validate_strings` was set without `binary`.
    #[error("yajl_dont_validate_strings requires binary mode")]
    StringValidationRequiresBinary,
}

/// A malformed-input diagnostic raised by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub(crate) message: String,
    /// 1-based line of the offending byte, populated only when
    /// `yajl_verbose_errors` is set.
    pub line: Option<usize>,
    /// 1-based column of the offending byte, populated only when
    /// `yajl_verbose_errors` is set.
    pub column: Option<usize>,
    /// A short excerpt of the input surrounding the error, populated only
    /// when `yajl_verbose_errors` is set.
    pub snippet: Option<String>,
    /// Set only for a malformed-UTF-8 byte under a `strict`
    /// [`crate::ErrorPolicy`]; carries the byte offset so [`crate::Slicer`]
    /// can re-surface it as [`IoError::InvalidUtf8`] rather than a syntax
    /// error (a decoding failure is distinct from a JSON syntax error).
    pub(crate) invalid_utf8_offset: Option<usize>,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.message)?;
        if let (Some(line), Some(column)) = (self.line, self.column) {
            write!(f, " at line {line}, column {column}")?;
        }
        Ok(())
    }
}

impl core::error::Error for ParseError {}

impl ParseError {
    pub(crate) fn new(message: String) -> Self {
        ParseError {
            message,
            line: None,
            column: None,
            snippet: None,
            invalid_utf8_offset: None,
        }
    }

    pub(crate) fn with_location(mut self, line: usize, column: usize, snippet: String) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self.snippet = Some(snippet);
        self
    }

    /// A string payload held an invalid UTF-8 byte at `offset` under the
    /// `strict` [`crate::ErrorPolicy`] (`Replace`/`Ignore` recover instead of
    /// raising this).
    pub(crate) fn invalid_utf8(offset: usize) -> Self {
        let mut err = ParseError::new(alloc::format!("invalid utf-8 at byte offset {offset}"));
        err.invalid_utf8_offset = Some(offset);
        err
    }

    pub(crate) fn as_invalid_utf8_offset(&self) -> Option<usize> {
        self.invalid_utf8_offset
    }
}

/// A failure while reading from the underlying [`crate::ByteSource`], or
/// while decoding input bytes as text under a `strict` [`crate::ErrorPolicy`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IoError {
    /// The byte source reported a failure. `message` is the source's
    /// `Display` rendering, since a `no_std` build cannot hold an opaque
    /// boxed error.
    #[error("i/o error: {0}")]
    Source(String),
    /// A string payload was not valid UTF-8 under the `strict` error
    /// policy.
    #[error("invalid utf-8 at byte offset {0}")]
    InvalidUtf8(usize),
}

/// The error type returned by [`crate::Slicer`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SlicerError {
    /// Raised by [`crate::Slicer::new`] when the supplied options are
    /// self-contradictory.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    /// Raised while pulling the next item if the input cannot be read or
    /// decoded.
    #[error(transparent)]
    Io(#[from] IoError),
    /// Raised while pulling the next item if the input bytes are not
    /// well-formed JSON.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// An invariant the slicer itself is responsible for maintaining was
    /// violated — for example, a scalar callback arriving with an empty
    /// constructing stack. This indicates a defect in the slicer, not
    /// malformed input.
    #[error("internal error: {0}")]
    Internal(String),
}
