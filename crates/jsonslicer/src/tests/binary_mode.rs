//! Binary mode.
use crate::{pattern, JsonString, SlicerError, SlicerOptions, Value, Wildcard};

use super::collect;

#[test]
fn text_mode_decodes_strings() {
    let items = collect(br#"["hello"]"#, pattern![Wildcard], SlicerOptions::default())
        .expect("valid input");
    match &items[0].value {
        Value::Str(s) => assert!(!s.is_binary()),
        other => panic!("expected a string, got {other:?}"),
    }
}

#[test]
fn binary_mode_keeps_raw_bytes() {
    let mut options = SlicerOptions::default();
    options.binary = true;
    options.yajl_dont_validate_strings = true;
    let items =
        collect(br#"["hello"]"#, pattern![Wildcard], options).expect("valid input");
    match &items[0].value {
        Value::Str(s) => {
            assert!(s.is_binary());
            assert_eq!(s.as_bytes(), b"hello");
        }
        other => panic!("expected a string, got {other:?}"),
    }
}

#[test]
fn binary_mode_map_key_round_trips() {
    let mut options = SlicerOptions::default();
    options.binary = true;
    options.yajl_dont_validate_strings = true;
    options.path_mode = crate::PathMode::MapKeys;
    let items = collect(br#"{"k":1}"#, pattern![Wildcard], options).expect("valid input");
    assert_eq!(items[0].key, Some(JsonString::Bytes(b"k".to_vec())));
}

/// `binary` + `yajl_dont_validate_strings` must round-trip bytes that are
/// not valid UTF-8 at all, not merely pass ASCII through unchanged — the
/// whole point of skipping validation.
#[test]
fn binary_mode_round_trips_invalid_utf8() {
    let mut options = SlicerOptions::default();
    options.binary = true;
    options.yajl_dont_validate_strings = true;
    // `["` <0xFF byte, not valid UTF-8 on its own> `"]`, built as raw bytes
    // since a Rust string literal cannot hold invalid UTF-8.
    let input: &[u8] = &[b'[', b'"', 0xFF, b'"', b']'];
    let items = collect(input, pattern![Wildcard], options).expect("valid input");
    match &items[0].value {
        Value::Str(s) => {
            assert!(s.is_binary());
            assert_eq!(s.as_bytes(), &[0xFF]);
        }
        other => panic!("expected a string, got {other:?}"),
    }
}

/// `binary` alone (without `yajl_dont_validate_strings`) still validates:
/// the output shape would change (raw bytes instead of a decoded `String`)
/// but malformed UTF-8 under the default `strict` error policy is still
/// surfaced the same way as in text mode — as [`SlicerError::Io`], since a
/// decoding failure is distinct from a JSON syntax error (see
/// `lex_error_to_slicer_error` in `slicer.rs`), not [`SlicerError::Parse`].
#[test]
fn binary_mode_without_dont_validate_still_rejects_invalid_utf8() {
    let mut options = SlicerOptions::default();
    options.binary = true;
    let input: &[u8] = &[b'[', b'"', 0xFF, b'"', b']'];
    let err = collect(input, pattern![Wildcard], options).expect_err("invalid UTF-8");
    assert!(matches!(err, SlicerError::Io(_)));
}
