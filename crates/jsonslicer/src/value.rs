//! Reconstructed JSON values.
//!
//! `Value` keeps the tokenizer's integer/double distinction (mirroring the
//! way a SAX-style JSON parser commonly reports separate `integer`/`double`
//! callbacks), and stores objects in an insertion-ordered map, since output
//! must preserve the order keys are first encountered — a `BTreeMap` would
//! silently violate that by re-sorting on key.
use alloc::{string::String, vec::Vec};
use core::fmt;

pub use indexmap::IndexMap;

/// A JSON string or map key, in either decoded-text or raw-bytes form.
///
/// Text mode (the default) always holds [`JsonString::Text`]; binary mode
/// always holds [`JsonString::Bytes`] — the slicer never decodes string
/// payloads when binary mode is set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JsonString {
    /// A decoded, valid-UTF-8 string (text mode).
    Text(String),
    /// Raw, undecoded bytes (binary mode).
    Bytes(Vec<u8>),
}

impl JsonString {
    /// The text, if this is [`JsonString::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            JsonString::Text(s) => Some(s),
            JsonString::Bytes(_) => None,
        }
    }

    /// The raw bytes, decoding nothing: a [`JsonString::Text`] is viewed as
    /// its UTF-8 encoding, a [`JsonString::Bytes`] as itself.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            JsonString::Text(s) => s.as_bytes(),
            JsonString::Bytes(b) => b,
        }
    }

    /// Whether this is [`JsonString::Bytes`].
    #[must_use]
    pub fn is_binary(&self) -> bool {
        matches!(self, JsonString::Bytes(_))
    }
}

impl From<&str> for JsonString {
    fn from(s: &str) -> Self {
        JsonString::Text(String::from(s))
    }
}

impl From<String> for JsonString {
    fn from(s: String) -> Self {
        JsonString::Text(s)
    }
}

impl From<Vec<u8>> for JsonString {
    fn from(b: Vec<u8>) -> Self {
        JsonString::Bytes(b)
    }
}

impl fmt::Display for JsonString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonString::Text(s) => write!(f, "\"{}\"", escape_string(s)),
            JsonString::Bytes(b) => write!(f, "{b:?}"),
        }
    }
}

/// An object's entries, in the order their keys were first encountered.
pub type Map = IndexMap<JsonString, Value>;

/// A reconstructed JSON value as defined by [RFC 8259].
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `null`.
    Null,
    /// `true` or `false`.
    Bool(bool),
    /// An integer lexeme that fits in an `i64`. Lexemes that overflow fall
    /// back to [`Value::Double`].
    Integer(i64),
    /// A number lexeme with a fraction, exponent, or that overflowed `i64`.
    Double(f64),
    /// A string or map-key literal.
    Str(JsonString),
    /// An array, in source order.
    Array(Vec<Value>),
    /// An object, in the order its keys were first encountered.
    Object(Map),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl Value {
    /// Whether this is [`Value::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The bool, if this is [`Value::Bool`].
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Bool(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    /// The integer, if this is [`Value::Integer`].
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        if let Self::Integer(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    /// The double, if this is [`Value::Double`].
    #[must_use]
    pub fn as_double(&self) -> Option<f64> {
        if let Self::Double(d) = self {
            Some(*d)
        } else {
            None
        }
    }

    /// The string, if this is [`Value::Str`].
    #[must_use]
    pub fn as_str(&self) -> Option<&JsonString> {
        if let Self::Str(s) = self {
            Some(s)
        } else {
            None
        }
    }

    /// The elements, if this is [`Value::Array`].
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        if let Self::Array(a) = self {
            Some(a)
        } else {
            None
        }
    }

    /// The entries, if this is [`Value::Object`].
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        if let Self::Object(o) = self {
            Some(o)
        } else {
            None
        }
    }
}

/// Escapes control characters in a string for inclusion in a JSON string
/// literal.
pub(crate) fn write_escaped_string<W: fmt::Write>(src: &str, f: &mut W) -> fmt::Result {
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\u{2028}' | '\u{2029}' => write!(f, "\\u{:04X}", c as u32)?,
            c if c.is_ascii_control() || (c.is_control() && (c as u32) <= 0xFFFF) => {
                write!(f, "\\u{:04X}", c as u32)?;
            }
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

pub(crate) fn escape_string(src: &str) -> String {
    let mut result = String::with_capacity(src.len() + 2);
    write_escaped_string(src, &mut result).expect("writing to a String cannot fail");
    result
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Double(d) => write!(f, "{d}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Array(arr) => {
                f.write_str("[")?;
                for (i, v) in arr.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
            Value::Object(map) => {
                f.write_str("{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{k}:{v}")?;
                }
                f.write_str("}")
            }
        }
    }
}
