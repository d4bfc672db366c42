//! String literal escape decoding feeding the `string`/`map_key` callbacks.
use alloc::{string::String, vec::Vec};

use crate::error::ParseError;

/// Accumulates a decoded string literal body (without the surrounding
/// quotes) across escape sequences and feed boundaries.
///
/// Two modes, chosen once at string-start (`StringScratch::new`):
///
/// - [`StringScratch::Text`] decodes the lexeme into a valid `String`,
///   validating every multi-byte UTF-8 sequence as it arrives.
/// - [`StringScratch::Raw`] is used only under `binary` +
///   `yajl_dont_validate_strings`: non-ASCII bytes are copied
///   through unexamined rather than decoded, so a string payload that is
///   not valid UTF-8 still round-trips byte for byte — something a
///   `String`-backed scratch cannot represent at all.
#[derive(Debug)]
pub(crate) enum StringScratch {
    Text(String, Option<u16>),
    Raw(Vec<u8>),
}

impl StringScratch {
    pub(crate) fn new(raw: bool) -> Self {
        if raw {
            StringScratch::Raw(Vec::new())
        } else {
            StringScratch::Text(String::new(), None)
        }
    }

    #[must_use]
    pub(crate) fn is_raw(&self) -> bool {
        matches!(self, StringScratch::Raw(_))
    }

    /// Pushes a single verbatim byte (an ASCII byte, or — in [`Self::Raw`]
    /// mode only — one byte of an unvalidated non-ASCII sequence).
    pub(crate) fn push_literal(&mut self, b: u8) {
        match self {
            StringScratch::Text(s, _) => s.push(b as char),
            StringScratch::Raw(v) => v.push(b),
        }
    }

    /// Pushes a complete multi-byte sequence whose lead byte already
    /// promised this length; returns whether it was in fact valid UTF-8.
    /// The caller (the tokenizer) is responsible for applying the active
    /// `ErrorPolicy` when this returns `false` — [`Self::push_replacement`]
    /// for `replace`, nothing for `ignore`.
    pub(crate) fn push_utf8_continuation(&mut self, bytes: &[u8]) -> bool {
        if let StringScratch::Text(s, _) = self {
            if let Ok(part) = core::str::from_utf8(bytes) {
                s.push_str(part);
                return true;
            }
            return false;
        }
        true
    }

    /// Appends U+FFFD (the Unicode replacement character), for the
    /// `replace` `ErrorPolicy`.
    pub(crate) fn push_replacement(&mut self) {
        self.push_escaped('\u{FFFD}');
    }

    fn push_escaped(&mut self, ch: char) {
        match self {
            StringScratch::Text(s, _) => s.push(ch),
            StringScratch::Raw(v) => {
                let mut buf = [0u8; 4];
                v.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            }
        }
    }

    /// Applies a single-character escape (`\n`, `\t`, `\"`, ...).
    pub(crate) fn apply_simple_escape(&mut self, b: u8) -> Result<(), ParseError> {
        let ch = match b {
            b'"' => '"',
            b'\\' => '\\',
            b'/' => '/',
            b'b' => '\u{8}',
            b'f' => '\u{C}',
            b'n' => '\n',
            b'r' => '\r',
            b't' => '\t',
            other => {
                return Err(ParseError::new(alloc::format!(
                    "invalid escape sequence '\\{}'",
                    other as char
                )))
            }
        };
        self.push_escaped(ch);
        Ok(())
    }

    /// Applies a completed `\uXXXX` escape, pairing surrogates as needed.
    pub(crate) fn apply_unicode_escape(&mut self, code_unit: u16) -> Result<(), ParseError> {
        let pending_high = match self {
            StringScratch::Text(_, pending) => pending.take(),
            StringScratch::Raw(_) => None,
        };
        if let Some(high) = pending_high {
            if (0xDC00..=0xDFFF).contains(&code_unit) {
                let c = 0x10000
                    + (u32::from(high) - 0xD800) * 0x400
                    + (u32::from(code_unit) - 0xDC00);
                if let Some(ch) = char::from_u32(c) {
                    self.push_escaped(ch);
                    return Ok(());
                }
            }
            self.push_escaped('\u{FFFD}');
        }
        if (0xD800..=0xDBFF).contains(&code_unit) {
            if let StringScratch::Text(_, pending) = self {
                *pending = Some(code_unit);
            }
            return Ok(());
        }
        if (0xDC00..=0xDFFF).contains(&code_unit) {
            self.push_escaped('\u{FFFD}');
            return Ok(());
        }
        match char::from_u32(u32::from(code_unit)) {
            Some(ch) => self.push_escaped(ch),
            None => self.push_escaped('\u{FFFD}'),
        }
        Ok(())
    }

    pub(crate) fn finish_text(self) -> String {
        match self {
            StringScratch::Text(s, _) => s,
            StringScratch::Raw(v) => String::from_utf8_lossy(&v).into_owned(),
        }
    }

    pub(crate) fn finish_bytes(self) -> Vec<u8> {
        match self {
            StringScratch::Text(s, _) => s.into_bytes(),
            StringScratch::Raw(v) => v,
        }
    }
}
