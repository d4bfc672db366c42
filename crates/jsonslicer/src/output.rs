//! Shaping a completed value into the item handed back to the caller.
use alloc::vec::Vec;

use crate::{
    path::{Path, PathElem, PathOut},
    value::Value,
    PathMode,
};

/// One completed, matched value, shaped according to the slicer's
/// [`PathMode`].
#[derive(Debug, Clone, PartialEq)]
pub struct OutputItem {
    /// The path elements leading to `value`, present only in [`PathMode::Full`]
    /// (empty otherwise).
    pub path: Vec<PathOut>,
    /// The map key `value` was stored under, present only in
    /// [`PathMode::MapKeys`] when the matched position is a map entry.
    pub key: Option<crate::value::JsonString>,
    /// The completed, reconstructed value.
    pub value: Value,
}

impl OutputItem {
    /// Builds the output item for `value` completed at `path` under `mode`.
    pub(crate) fn build(mode: PathMode, path: &Path, value: Value) -> Self {
        match mode {
            PathMode::Ignore => OutputItem {
                path: Vec::new(),
                key: None,
                value,
            },
            PathMode::MapKeys => {
                let key = match path.last() {
                    Some(PathElem::Key(k)) => Some(k.clone()),
                    _ => None,
                };
                OutputItem {
                    path: Vec::new(),
                    key,
                    value,
                }
            }
            PathMode::Full => {
                let path_out = path
                    .iter()
                    .map(|elem| match elem {
                        PathElem::Key(k) => PathOut::Key(k.clone()),
                        PathElem::Index(i) => PathOut::Index(*i),
                        PathElem::Sentinel => {
                            unreachable!("a completed item's path never ends in a sentinel")
                        }
                    })
                    .collect();
                OutputItem {
                    path: path_out,
                    key: None,
                    value,
                }
            }
        }
    }
}
