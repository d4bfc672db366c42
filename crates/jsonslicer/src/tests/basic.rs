//! End-to-end scenarios.
use crate::{pattern, SlicerOptions, Value, Wildcard};

use super::collect;

#[test]
fn wildcard_over_object_values() {
    let items = collect(br#"{"a":1,"b":2}"#, pattern![Wildcard], SlicerOptions::default())
        .expect("valid input");
    let values: alloc::vec::Vec<_> = items.into_iter().map(|i| i.value).collect();
    assert_eq!(values, alloc::vec![Value::Integer(1), Value::Integer(2)]);
}

#[test]
fn nested_wildcard_pattern() {
    let items = collect(
        br#"{"items":[{"x":1},{"x":2}]}"#,
        pattern!["items", Wildcard, "x"],
        SlicerOptions::default(),
    )
    .expect("valid input");
    let values: alloc::vec::Vec<_> = items.into_iter().map(|i| i.value).collect();
    assert_eq!(values, alloc::vec![Value::Integer(1), Value::Integer(2)]);
}

#[test]
fn deep_exact_path() {
    let items = collect(
        br#"{"a":{"b":{"c":42}}}"#,
        pattern!["a", "b", "c"],
        SlicerOptions::default(),
    )
    .expect("valid input");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].value, Value::Integer(42));
}

#[test]
fn multiple_top_level_values() {
    let mut options = SlicerOptions::default();
    options.yajl_allow_multiple_values = true;
    let items =
        collect(br#"{"a":1} {"a":2}"#, pattern!["a"], options).expect("valid input");
    let values: alloc::vec::Vec<_> = items.into_iter().map(|i| i.value).collect();
    assert_eq!(values, alloc::vec![Value::Integer(1), Value::Integer(2)]);
}

#[test]
fn array_of_scalars() {
    let items = collect(b"[10,20,30]", pattern![Wildcard], SlicerOptions::default())
        .expect("valid input");
    let values: alloc::vec::Vec<_> = items.into_iter().map(|i| i.value).collect();
    assert_eq!(
        values,
        alloc::vec![Value::Integer(10), Value::Integer(20), Value::Integer(30)]
    );
}

#[test]
fn whole_top_level_value_with_root_pattern() {
    let items = collect(
        br#"{"a":1,"b":[1,2,3]}"#,
        crate::Pattern::root(),
        SlicerOptions::default(),
    )
    .expect("valid input");
    assert_eq!(items.len(), 1);
    assert!(items[0].value.as_object().is_some());
}
