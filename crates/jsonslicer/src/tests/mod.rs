mod basic;
mod binary_mode;
mod boundary;
mod errors;
mod properties;

use alloc::vec::Vec;

use crate::{OutputItem, Pattern, Slicer, SlicerError, SlicerOptions};

/// Runs the slicer to exhaustion over an in-memory byte slice, collecting
/// every yielded item (or the first error).
fn collect(
    input: &[u8],
    pattern: Pattern,
    options: SlicerOptions,
) -> Result<Vec<OutputItem>, SlicerError> {
    let slicer = Slicer::new(input, pattern, options)?;
    slicer.collect()
}

/// Like [`collect`], but feeds the input one byte at a time, to exercise
/// chunk-boundary handling regardless of the caller's own `read_size`.
fn collect_byte_by_byte(
    input: &[u8],
    pattern: Pattern,
    mut options: SlicerOptions,
) -> Result<Vec<OutputItem>, SlicerError> {
    options.read_size = 1;
    collect(input, pattern, options)
}
