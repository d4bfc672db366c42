//! Property-based coverage of the chunk-boundary round-trip property:
//! splitting the input into arbitrarily small chunks yields the same
//! sequence as reading in one shot, for arbitrary arrays of integers
//! rather than the handful of fixed documents in `chunking.rs`.
use alloc::{format, string::String, vec::Vec};

use quickcheck_macros::quickcheck;

use crate::{pattern, SlicerOptions, Wildcard};

use super::{collect, collect_byte_by_byte};

fn array_of(values: &[i64]) -> String {
    let mut out = String::from("[");
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&format!("{v}"));
    }
    out.push(']');
    out
}

#[quickcheck]
fn byte_by_byte_chunking_matches_single_shot(values: Vec<i64>) -> bool {
    let input = array_of(&values);
    let whole = collect(input.as_bytes(), pattern![Wildcard], SlicerOptions::default())
        .expect("a JSON array literal is always well-formed");
    let piecemeal =
        collect_byte_by_byte(input.as_bytes(), pattern![Wildcard], SlicerOptions::default())
            .expect("a JSON array literal is always well-formed");
    whole == piecemeal
}

#[quickcheck]
fn match_count_equals_array_length(values: Vec<i64>) -> bool {
    let input = array_of(&values);
    let items = collect(input.as_bytes(), pattern![Wildcard], SlicerOptions::default())
        .expect("a JSON array literal is always well-formed");
    items.len() == values.len()
}
