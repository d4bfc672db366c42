//! Boundary behavior.
use crate::{pattern, Pattern, SlicerOptions, Wildcard};

use super::collect;

#[test]
fn empty_input_yields_nothing() {
    let items = collect(b"", Pattern::root(), SlicerOptions::default()).expect("valid input");
    assert!(items.is_empty());
}

#[test]
fn empty_input_with_allow_partial_values_yields_nothing() {
    let mut options = SlicerOptions::default();
    options.yajl_allow_partial_values = true;
    let items = collect(b"", Pattern::root(), options).expect("valid input");
    assert!(items.is_empty());
}

#[test]
fn pattern_longer_than_path_yields_nothing() {
    let items = collect(
        br#"{"a":1}"#,
        pattern!["a", "b", "c"],
        SlicerOptions::default(),
    )
    .expect("valid input");
    assert!(items.is_empty());
}

#[test]
fn root_pattern_yields_exactly_the_top_level_value() {
    let items =
        collect(br#"[1,2,3]"#, Pattern::root(), SlicerOptions::default()).expect("valid input");
    assert_eq!(items.len(), 1);
}

#[test]
fn nonexistent_key_yields_nothing() {
    let items = collect(
        br#"{"a":1,"b":2}"#,
        pattern!["z"],
        SlicerOptions::default(),
    )
    .expect("valid input");
    assert!(items.is_empty());
}

#[test]
fn wildcard_does_not_match_shallower_scalars() {
    let items = collect(
        br#"{"a":{"b":1}}"#,
        pattern![Wildcard, Wildcard],
        SlicerOptions::default(),
    )
    .expect("valid input");
    assert_eq!(items.len(), 1);
}
