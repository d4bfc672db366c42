#![allow(clippy::struct_excessive_bools)]
//! Construction parameters for a [`crate::Slicer`].
use crate::error::ConfigError;

/// How a completed item's path is attached to its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathMode {
    /// Emit the value alone.
    #[default]
    Ignore,
    /// Emit `(key, value)` when the matching position is a map entry;
    /// otherwise emit the value alone. A top-level match (no enclosing map)
    /// has no key, so it is always emitted bare.
    MapKeys,
    /// Emit every current path element (indices as integers, keys decoded
    /// per output encoding) followed by the value.
    Full,
}

impl PathMode {
    /// Parses the string form used by the `path_mode` constructor keyword.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        match s {
            "ignore" => Ok(PathMode::Ignore),
            "map_keys" => Ok(PathMode::MapKeys),
            "full" => Ok(PathMode::Full),
            other => Err(ConfigError::InvalidPathMode(alloc::string::String::from(
                other,
            ))),
        }
    }
}

/// Behavior when an input byte sequence fails to decode as UTF-8. Only
/// meaningful in text mode (`binary: false`); binary mode never decodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Fail the pull with [`crate::SlicerError::Io`].
    #[default]
    Strict,
    /// Substitute U+FFFD for each invalid byte sequence.
    Replace,
    /// Drop invalid byte sequences silently.
    Ignore,
}

impl ErrorPolicy {
    /// Parses the string form used by the `errors` constructor keyword.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        match s {
            "strict" => Ok(ErrorPolicy::Strict),
            "replace" => Ok(ErrorPolicy::Replace),
            "ignore" => Ok(ErrorPolicy::Ignore),
            other => Err(ConfigError::UnsupportedErrorPolicy(
                alloc::string::String::from(other),
            )),
        }
    }
}

/// Configuration for a [`crate::Slicer`].
///
/// All tokenizer option flags default to `false` except
/// `yajl_verbose_errors`, which defaults to `true`.
///
/// # Default
///
/// ```
/// use jsonslicer::SlicerOptions;
///
/// let opts = SlicerOptions::default();
/// assert_eq!(opts.read_size, 1024);
/// assert!(opts.yajl_verbose_errors);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SlicerOptions {
    /// Bytes requested from the input reader per chunk.
    pub read_size: usize,
    /// How completed items are shaped.
    pub path_mode: PathMode,
    /// Error-handling policy applied when decoding input bytes as text.
    pub errors: ErrorPolicy,
    /// Keep internal strings as raw bytes; never decode on output.
    pub binary: bool,

    /// Allow `//` and `/* */` comments in the input.
    pub yajl_allow_comments: bool,
    /// Skip UTF-8 validation of string payloads. Requires `binary: true`
    /// (see [`ConfigError::StringValidationRequiresBinary`]).
    pub yajl_dont_validate_strings: bool,
    /// Permit trailing bytes after a top-level value when
    /// `yajl_allow_multiple_values` is `false`.
    pub yajl_allow_trailing_garbage: bool,
    /// Permit a stream of top-level values (JSON Lines / ND-JSON).
    pub yajl_allow_multiple_values: bool,
    /// Permit input truncation at end.
    pub yajl_allow_partial_values: bool,
    /// Include a source-line snippet in parse error messages.
    pub yajl_verbose_errors: bool,
}

impl Default for SlicerOptions {
    fn default() -> Self {
        SlicerOptions {
            read_size: 1024,
            path_mode: PathMode::Ignore,
            errors: ErrorPolicy::Strict,
            binary: false,
            yajl_allow_comments: false,
            yajl_dont_validate_strings: false,
            yajl_allow_trailing_garbage: false,
            yajl_allow_multiple_values: false,
            yajl_allow_partial_values: false,
            yajl_verbose_errors: true,
        }
    }
}

impl SlicerOptions {
    /// Validates the combination of options.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.yajl_dont_validate_strings && !self.binary {
            return Err(ConfigError::StringValidationRequiresBinary);
        }
        Ok(())
    }
}
