//! A streaming extractor for JSON documents.
//!
//! Given a byte stream holding one or more JSON values and a *path pattern*,
//! [`Slicer`] yields each sub-value whose location in the document matches
//! the pattern, as it is encountered, without ever materialising the
//! surrounding document in memory. It is intended for large JSON feeds
//! (multi-gigabyte arrays of records, concatenated streams of records) that
//! cannot be loaded whole.
//!
//! ```
//! use jsonslicer::{Slicer, SlicerOptions, Wildcard, pattern};
//!
//! let input = &br#"{"a":1,"b":2}"#[..];
//! let mut slicer = Slicer::new(input, pattern![Wildcard], SlicerOptions::default()).unwrap();
//!
//! let first = slicer.next().unwrap().unwrap();
//! assert_eq!(first.value.as_integer(), Some(1));
//! let second = slicer.next().unwrap().unwrap();
//! assert_eq!(second.value.as_integer(), Some(2));
//! assert!(slicer.next().is_none());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod error;
mod options;
mod output;
mod path;
mod pattern;
mod reader;
mod slicer;
mod tokenizer;
mod value;

#[cfg(test)]
mod tests;

pub use error::{ConfigError, SlicerError};
pub use options::{ErrorPolicy, PathMode, SlicerOptions};
pub use output::OutputItem;
pub use path::{PathElem, PathOut};
pub use pattern::{Pattern, PatternElem, PatternElemFrom, Wildcard};
pub use reader::ByteSource;
pub use slicer::Slicer;
pub use value::{JsonString, Map, Value};

#[doc(hidden)]
pub use alloc::vec;

/// Builds a [`Pattern`] from a heterogeneous list of keys, indices, and
/// [`Wildcard`] markers.
///
/// ```
/// use jsonslicer::{Pattern, PatternElem, Wildcard, pattern};
///
/// let p = pattern!["items", Wildcard, "x"];
/// assert_eq!(
///     p,
///     Pattern::from(alloc::vec![
///         PatternElem::Key("items".into()),
///         PatternElem::Wildcard,
///         PatternElem::Key("x".into()),
///     ])
/// );
/// ```
#[macro_export]
macro_rules! pattern {
    ( $( $elem:expr ),* $(,)? ) => {{
        use $crate::PatternElemFrom;
        $crate::Pattern::from($crate::vec![$($crate::PatternElem::from_pattern_component($elem)),*])
    }};
}
