//! Error taxonomy.
use crate::{
    pattern, ConfigError, ErrorPolicy, PathMode, Slicer, SlicerError, SlicerOptions, Value,
    Wildcard,
};

use super::collect;

#[test]
fn dont_validate_strings_without_binary_is_a_config_error() {
    let mut options = SlicerOptions::default();
    options.yajl_dont_validate_strings = true;
    let err = Slicer::new(&b""[..], pattern![Wildcard], options).unwrap_err();
    assert_eq!(
        err,
        SlicerError::Config(ConfigError::StringValidationRequiresBinary)
    );
}

#[test]
fn malformed_input_is_a_parse_error() {
    let result = collect(b"{not json}", pattern![Wildcard], SlicerOptions::default());
    assert!(matches!(result, Err(SlicerError::Parse(_))));
}

#[test]
fn parse_error_carries_location_when_verbose() {
    let result = collect(b"{not json}", pattern![Wildcard], SlicerOptions::default());
    let Err(SlicerError::Parse(e)) = result else {
        panic!("expected a parse error");
    };
    assert!(e.line.is_some());
    assert!(e.column.is_some());
}

#[test]
fn parse_error_omits_location_when_not_verbose() {
    let mut options = SlicerOptions::default();
    options.yajl_verbose_errors = false;
    let result = collect(b"{not json}", pattern![Wildcard], options);
    let Err(SlicerError::Parse(e)) = result else {
        panic!("expected a parse error");
    };
    assert!(e.line.is_none());
    assert!(e.column.is_none());
}

/// `errors = "strict"` (the default) surfaces invalid UTF-8 as an I/O
/// error, distinct from a JSON syntax error.
#[test]
fn strict_error_policy_rejects_invalid_utf8() {
    let input: &[u8] = &[b'[', b'"', 0xFF, b'"', b']'];
    let result = collect(input, pattern![Wildcard], SlicerOptions::default());
    assert!(matches!(result, Err(SlicerError::Io(_))));
}

/// `errors = "replace"` substitutes U+FFFD for the offending byte and keeps
/// parsing instead of failing the whole pull.
#[test]
fn replace_error_policy_substitutes_u_fffd() {
    let mut options = SlicerOptions::default();
    options.errors = ErrorPolicy::Replace;
    let input: &[u8] = &[b'[', b'"', 0xFF, b'"', b']'];
    let items = collect(input, pattern![Wildcard], options).expect("recovers under replace");
    match &items[0].value {
        Value::Str(s) => assert_eq!(s.as_text(), Some("\u{FFFD}")),
        other => panic!("expected a string, got {other:?}"),
    }
}

/// `errors = "ignore"` drops the offending byte silently.
#[test]
fn ignore_error_policy_drops_invalid_byte() {
    let mut options = SlicerOptions::default();
    options.errors = ErrorPolicy::Ignore;
    let input: &[u8] = &[b'[', b'"', b'a', 0xFF, b'b', b'"', b']'];
    let items = collect(input, pattern![Wildcard], options).expect("recovers under ignore");
    match &items[0].value {
        Value::Str(s) => assert_eq!(s.as_text(), Some("ab")),
        other => panic!("expected a string, got {other:?}"),
    }
}

/// `"strict"`/`"replace"`/`"ignore"` are the only recognized `errors`
/// values.
#[test]
fn unsupported_error_policy_string_is_a_config_error() {
    assert_eq!(
        ErrorPolicy::parse("explode"),
        Err(ConfigError::UnsupportedErrorPolicy(alloc::string::String::from("explode")))
    );
}

/// `"ignore"`/`"map_keys"`/`"full"` are the only recognized `path_mode`
/// values; anything else is a configuration error rather than a panic.
#[test]
fn path_mode_parses_recognized_strings() {
    assert_eq!(PathMode::parse("ignore"), Ok(PathMode::Ignore));
    assert_eq!(PathMode::parse("map_keys"), Ok(PathMode::MapKeys));
    assert_eq!(PathMode::parse("full"), Ok(PathMode::Full));
}

#[test]
fn unrecognized_path_mode_string_is_a_config_error() {
    assert_eq!(
        PathMode::parse("verbose"),
        Err(ConfigError::InvalidPathMode(alloc::string::String::from(
            "verbose"
        )))
    );
}
