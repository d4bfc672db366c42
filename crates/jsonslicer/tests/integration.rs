//! Exercises `Slicer` the way an external caller would: through
//! `std::io::Read` (a `Cursor` over owned bytes, not the in-memory `&[u8]`
//! shortcut the unit tests use), matching the "reader with a `read(n)`
//! method" contract end to end.
use std::io::Cursor;

use jsonslicer::{pattern, OutputItem, PathMode, Pattern, Slicer, SlicerOptions, Value, Wildcard};

fn collect(bytes: &[u8], pattern: Pattern, options: SlicerOptions) -> Vec<OutputItem> {
    let reader = Cursor::new(bytes.to_vec());
    Slicer::new(reader, pattern, options)
        .expect("valid options")
        .collect::<Result<Vec<_>, _>>()
        .expect("valid input")
}

#[test]
fn extracts_array_elements_through_a_std_reader() {
    let items = collect(b"[1,2,3]", pattern![Wildcard], SlicerOptions::default());
    let values: Vec<_> = items.into_iter().map(|i| i.value).collect();
    assert_eq!(
        values,
        vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]
    );
}

#[test]
fn extracts_nested_field_from_a_record_stream() {
    let mut options = SlicerOptions::default();
    options.yajl_allow_multiple_values = true;
    let items = collect(
        br#"{"id":1,"payload":{"ok":true}} {"id":2,"payload":{"ok":false}}"#,
        pattern!["payload", "ok"],
        options,
    );
    let values: Vec<_> = items.into_iter().map(|i| i.value).collect();
    assert_eq!(values, vec![Value::Bool(true), Value::Bool(false)]);
}

#[test]
fn small_read_size_still_yields_every_match() {
    let mut options = SlicerOptions::default();
    options.read_size = 3;
    options.path_mode = PathMode::MapKeys;
    let items = collect(br#"{"a":1,"bb":22,"ccc":333}"#, pattern![Wildcard], options);
    assert_eq!(items.len(), 3);
    assert_eq!(items[2].value, Value::Integer(333));
}
