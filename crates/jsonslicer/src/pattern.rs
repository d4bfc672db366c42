//! Path patterns: the static shape a document path is matched against.
//!
//! A pattern is an immutable, ordered sequence of [`PatternElem`]s fixed at
//! construction time; matching is a length-checked, element-wise comparison
//! against the current [`crate::path::Path`], where [`PatternElem::Wildcard`]
//! matches any element at its depth.
use alloc::{string::String, vec::Vec};
use core::fmt;

use crate::{path::Path, value::JsonString};

/// The caller-facing "match any element at this depth" marker.
///
/// A distinct unit type (rather than, say, an `Option`-wrapped pattern
/// element) so that [`pattern!`](crate::pattern) can accept it positionally
/// alongside string and integer literals without shadowing a real `null`-valued
/// key, which can never occur in a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wildcard;

/// A single element of a [`Pattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternElem {
    /// Matches a map entry with this exact key.
    Key(JsonString),
    /// Matches an array element at this exact index.
    Index(usize),
    /// Matches any element at this depth.
    Wildcard,
}

impl fmt::Display for PatternElem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternElem::Key(k) => write!(f, "{k:?}"),
            PatternElem::Index(i) => write!(f, "{i}"),
            PatternElem::Wildcard => f.write_str("*"),
        }
    }
}

impl From<&str> for PatternElem {
    fn from(s: &str) -> Self {
        PatternElem::Key(JsonString::Text(String::from(s)))
    }
}

impl From<String> for PatternElem {
    fn from(s: String) -> Self {
        PatternElem::Key(JsonString::Text(s))
    }
}

impl From<usize> for PatternElem {
    fn from(i: usize) -> Self {
        PatternElem::Index(i)
    }
}

impl From<Wildcard> for PatternElem {
    fn from(_: Wildcard) -> Self {
        PatternElem::Wildcard
    }
}

/// Conversion trait powering the [`pattern!`](crate::pattern) macro, so
/// heterogeneous literals (`"key"`, `0`, [`Wildcard`]) can be passed
/// positionally.
#[doc(hidden)]
pub trait PatternElemFrom<T> {
    fn from_pattern_component(value: T) -> PatternElem;
}

macro_rules! impl_unsigned_as_pattern_elem {
    ($($t:ty),+) => {
        $(
            impl PatternElemFrom<$t> for PatternElem {
                fn from_pattern_component(value: $t) -> Self {
                    #[allow(clippy::cast_lossless)]
                    PatternElem::Index(value as usize)
                }
            }
        )+
    };
}
impl_unsigned_as_pattern_elem!(u8, u16, u32, u64, usize);

impl PatternElemFrom<&str> for PatternElem {
    fn from_pattern_component(value: &str) -> Self {
        PatternElem::from(value)
    }
}

impl PatternElemFrom<String> for PatternElem {
    fn from_pattern_component(value: String) -> Self {
        PatternElem::from(value)
    }
}

impl PatternElemFrom<Wildcard> for PatternElem {
    fn from_pattern_component(_: Wildcard) -> Self {
        PatternElem::Wildcard
    }
}

/// An immutable path pattern fixed at [`crate::Slicer`] construction time.
///
/// Length determines the depth at which matches may occur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern(Vec<PatternElem>);

impl From<Vec<PatternElem>> for Pattern {
    fn from(elems: Vec<PatternElem>) -> Self {
        Pattern(elems)
    }
}

impl Pattern {
    /// The pattern matching every top-level value (an empty path).
    #[must_use]
    pub fn root() -> Self {
        Pattern(Vec::new())
    }

    /// The number of elements in the pattern — the depth at which a match
    /// can occur.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this is [`Pattern::root`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Element-wise match against `path`: lengths must be equal, and each
    /// pattern element must either be [`PatternElem::Wildcard`] or equal the
    /// corresponding path element (array indices compared numerically).
    #[must_use]
    pub(crate) fn matches(&self, path: &Path) -> bool {
        if self.0.len() != path.len() {
            return false;
        }
        self.0
            .iter()
            .zip(path.iter())
            .all(|(pat, elem)| pat.matches_elem(elem))
    }
}

impl PatternElem {
    fn matches_elem(&self, elem: &crate::path::PathElem) -> bool {
        use crate::path::PathElem;
        match (self, elem) {
            (PatternElem::Wildcard, _) => true,
            (PatternElem::Key(pk), PathElem::Key(ek)) => pk == ek,
            (PatternElem::Index(pi), PathElem::Index(ei)) => *pi == *ei,
            _ => false,
        }
    }
}
