//! Lexical scanner over raw JSON bytes.
//!
//! `Tokenizer` plays the role a SAX-style JSON parser's `yajl_handle_t`
//! would: it owns no notion of "path" or "pattern" and only ever calls back
//! through [`SaxHandler`] with the eleven structural and scalar events a
//! JSON document produces.
mod buffer;
mod literal;
mod numbers;
mod strings;

use alloc::{string::String, vec::Vec};

use buffer::ByteBuffer;
use literal::{LiteralMatcher, LiteralStep, LiteralValue};
use numbers::NumberScratch;
use strings::StringScratch;

use crate::{
    error::ParseError,
    options::{ErrorPolicy, SlicerOptions},
    value::JsonString,
};

/// Receives lexical events from [`Tokenizer::feed`]/[`Tokenizer::finish`].
///
/// Mirrors yajl's `yajl_callbacks` table: `integer` and `double` stay
/// distinct rather than being collapsed to one `number` event, and string
/// payloads are keyed vs. value strings through separate `map_key`/`string`
/// calls.
pub(crate) trait SaxHandler {
    fn on_null(&mut self);
    fn on_boolean(&mut self, value: bool);
    fn on_integer(&mut self, value: i64);
    fn on_double(&mut self, value: f64);
    fn on_string(&mut self, value: JsonString);
    fn on_map_key(&mut self, value: JsonString);
    fn on_start_map(&mut self);
    fn on_end_map(&mut self);
    fn on_start_array(&mut self);
    fn on_end_array(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ObjExpect {
    KeyOrEnd,
    Colon,
    Value,
    CommaOrEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArrExpect {
    ValueOrEnd,
    CommaOrEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Object(ObjExpect),
    Array(ArrExpect),
}

enum Pending {
    /// Inside a string literal (`key` distinguishes `map_key` from `string`
    /// on completion).
    String {
        key: bool,
        scratch: StringScratch,
        escape: EscapeMode,
    },
    /// Inside a bare number lexeme.
    Number(NumberScratch),
    /// Inside a `true`/`false`/`null` literal.
    Literal(LiteralMatcher),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EscapeMode {
    None,
    Backslash,
    Unicode(u8, u16),
}

/// How many top-level values have been seen, for `yajl_allow_multiple_values`
/// / `yajl_allow_trailing_garbage` bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TopState {
    BeforeValue,
    AfterValue,
}

/// An incremental, byte-oriented JSON scanner.
pub(crate) struct Tokenizer {
    buf: ByteBuffer,
    stack: Vec<Frame>,
    pending: Option<Pending>,
    top: TopState,
    line: usize,
    column: usize,
    verbose_errors: bool,
    allow_comments: bool,
    /// Only ever `true` alongside `binary` (`SlicerOptions::validate`
    /// rejects any other combination). When set, string literals are
    /// scratch-built in [`strings::StringScratch::Raw`] mode: non-ASCII
    /// bytes are copied through without UTF-8 validation, so a string
    /// payload need not be well-formed UTF-8 to round-trip.
    dont_validate_strings: bool,
    binary: bool,
    /// Recovery behavior for a string payload that fails UTF-8 validation;
    /// irrelevant when `dont_validate_strings` is set, since nothing is
    /// validated in that mode.
    errors: ErrorPolicy,
    allow_trailing_garbage: bool,
    allow_multiple_values: bool,
    eof: bool,
    /// Total bytes consumed so far, for [`ParseError::invalid_utf8`]'s byte
    /// offset — independent of `buf`'s internal compaction.
    bytes_consumed: usize,
}

impl Tokenizer {
    pub(crate) fn new(opts: &SlicerOptions) -> Self {
        Tokenizer {
            buf: ByteBuffer::new(),
            stack: Vec::new(),
            pending: None,
            top: TopState::BeforeValue,
            line: 1,
            column: 1,
            verbose_errors: opts.yajl_verbose_errors,
            allow_comments: opts.yajl_allow_comments,
            dont_validate_strings: opts.yajl_dont_validate_strings,
            binary: opts.binary,
            errors: opts.errors,
            allow_trailing_garbage: opts.yajl_allow_trailing_garbage,
            allow_multiple_values: opts.yajl_allow_multiple_values,
            eof: false,
            bytes_consumed: 0,
        }
    }

    /// Feeds another chunk of input, driving `handler` for every token
    /// completed so far.
    pub(crate) fn feed<H: SaxHandler>(
        &mut self,
        bytes: &[u8],
        handler: &mut H,
    ) -> Result<(), ParseError> {
        self.buf.push(bytes);
        self.pump(handler)
    }

    /// Signals end of input. Validates that nothing was left incomplete
    /// unless `yajl_allow_partial_values` was set.
    pub(crate) fn finish<H: SaxHandler>(
        &mut self,
        handler: &mut H,
        allow_partial_values: bool,
    ) -> Result<(), ParseError> {
        self.eof = true;
        self.pump(handler)?;
        // A stream that never produced a single byte is simply empty, not a
        // truncated document — only a value left mid-construction counts as
        // a partial value.
        if !allow_partial_values && (!self.stack.is_empty() || self.pending.is_some()) {
            return Err(self.error(String::from("unexpected end of input")));
        }
        Ok(())
    }

    fn error(&self, message: String) -> ParseError {
        let err = ParseError::new(message);
        if self.verbose_errors {
            err.with_location(self.line, self.column, String::new())
        } else {
            err
        }
    }

    fn advance(&mut self) -> Option<u8> {
        let b = self.buf.advance()?;
        self.bytes_consumed += 1;
        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(b)
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<(), ParseError> {
        loop {
            match self.buf.peek() {
                Some(b' ' | b'\t' | b'\r' | b'\n') => {
                    self.advance();
                }
                Some(b'/') if self.allow_comments => {
                    if self.buf.peek_at(1).is_none() {
                        return Ok(());
                    }
                    match self.buf.peek_at(1) {
                        Some(b'/') => {
                            self.advance();
                            self.advance();
                            while let Some(b) = self.buf.peek() {
                                if b == b'\n' {
                                    break;
                                }
                                self.advance();
                            }
                        }
                        Some(b'*') => {
                            self.advance();
                            self.advance();
                            loop {
                                match self.buf.peek() {
                                    None => return Ok(()),
                                    Some(b'*') if self.buf.peek_at(1) == Some(b'/') => {
                                        self.advance();
                                        self.advance();
                                        break;
                                    }
                                    Some(_) => {
                                        self.advance();
                                    }
                                }
                            }
                        }
                        _ => {
                            return Err(self.error(String::from("invalid comment")));
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// Consumes as many complete tokens as the buffered input allows.
    fn pump<H: SaxHandler>(&mut self, handler: &mut H) -> Result<(), ParseError> {
        loop {
            if let Some(pending) = self.pending.take() {
                match self.resume(pending, handler)? {
                    Some(p) => {
                        self.pending = Some(p);
                        return Ok(());
                    }
                    None => continue,
                }
            }

            self.skip_whitespace_and_comments()?;

            let Some(b) = self.buf.peek() else {
                return Ok(());
            };

            if self.stack.is_empty() && self.top == TopState::AfterValue {
                if !self.allow_multiple_values && !self.allow_trailing_garbage {
                    return Err(self.error(String::from("trailing garbage after value")));
                }
                if self.allow_multiple_values {
                    self.top = TopState::BeforeValue;
                } else {
                    // allow_trailing_garbage: stop tokenizing, leave bytes unread.
                    return Ok(());
                }
                continue;
            }

            match self.expect_kind() {
                Expect::Value => self.start_value(b, handler)?,
                Expect::Key => self.start_key(b, handler)?,
                Expect::Colon => {
                    if b != b':' {
                        return Err(self.error(String::from("expected ':'")));
                    }
                    self.advance();
                    self.set_obj_expect(ObjExpect::Value);
                }
                Expect::CommaOrObjectEnd => {
                    if b == b'}' {
                        self.advance();
                        self.stack.pop();
                        handler.on_end_map();
                        self.after_value();
                    } else if b == b',' {
                        self.advance();
                        self.set_obj_expect(ObjExpect::KeyOrEnd);
                    } else {
                        return Err(self.error(String::from("expected ',' or '}'")));
                    }
                }
                Expect::CommaOrArrayEnd => {
                    if b == b']' {
                        self.advance();
                        self.stack.pop();
                        handler.on_end_array();
                        self.after_value();
                    } else if b == b',' {
                        self.advance();
                        self.set_arr_expect(ArrExpect::ValueOrEnd);
                    } else {
                        return Err(self.error(String::from("expected ',' or ']'")));
                    }
                }
            }
        }
    }

    fn expect_kind(&self) -> Expect {
        match self.stack.last() {
            None => Expect::Value,
            Some(Frame::Object(ObjExpect::KeyOrEnd)) => Expect::Key,
            Some(Frame::Object(ObjExpect::Colon)) => Expect::Colon,
            Some(Frame::Object(ObjExpect::Value)) => Expect::Value,
            Some(Frame::Object(ObjExpect::CommaOrEnd)) => Expect::CommaOrObjectEnd,
            Some(Frame::Array(ArrExpect::ValueOrEnd)) => Expect::Value,
            Some(Frame::Array(ArrExpect::CommaOrEnd)) => Expect::CommaOrArrayEnd,
        }
    }

    fn set_obj_expect(&mut self, next: ObjExpect) {
        if let Some(Frame::Object(e)) = self.stack.last_mut() {
            *e = next;
        }
    }

    fn set_arr_expect(&mut self, next: ArrExpect) {
        if let Some(Frame::Array(e)) = self.stack.last_mut() {
            *e = next;
        }
    }

    /// Called after any complete value (scalar or container) is emitted, to
    /// advance the enclosing frame's expectation (or top-level state).
    fn after_value(&mut self) {
        match self.stack.last_mut() {
            None => self.top = TopState::AfterValue,
            Some(Frame::Object(e)) => *e = ObjExpect::CommaOrEnd,
            Some(Frame::Array(e)) => *e = ArrExpect::CommaOrEnd,
        }
    }

    fn start_key<H: SaxHandler>(&mut self, b: u8, _handler: &mut H) -> Result<(), ParseError> {
        if b == b'}' {
            self.advance();
            self.stack.pop();
            _handler.on_end_map();
            self.after_value();
            return Ok(());
        }
        if b != b'"' {
            return Err(self.error(String::from("expected string key or '}'")));
        }
        self.advance();
        self.set_obj_expect(ObjExpect::Colon);
        let pending = Pending::String {
            key: true,
            scratch: StringScratch::new(self.binary && self.dont_validate_strings),
            escape: EscapeMode::None,
        };
        if let Some(p) = self.resume(pending, _handler)? {
            self.pending = Some(p);
        }
        Ok(())
    }

    fn start_value<H: SaxHandler>(&mut self, b: u8, handler: &mut H) -> Result<(), ParseError> {
        match b {
            b'{' => {
                self.advance();
                self.stack.push(Frame::Object(ObjExpect::KeyOrEnd));
                handler.on_start_map();
            }
            b'[' => {
                self.advance();
                self.stack.push(Frame::Array(ArrExpect::ValueOrEnd));
                handler.on_start_array();
            }
            b'"' => {
                self.advance();
                let pending = Pending::String {
                    key: false,
                    scratch: StringScratch::new(self.binary && self.dont_validate_strings),
                    escape: EscapeMode::None,
                };
                if let Some(p) = self.resume(pending, handler)? {
                    self.pending = Some(p);
                }
            }
            b'-' | b'0'..=b'9' => {
                let scratch = NumberScratch::new(b);
                self.advance();
                let pending = Pending::Number(scratch);
                if let Some(p) = self.resume(pending, handler)? {
                    self.pending = Some(p);
                }
            }
            b'n' | b't' | b'f' => {
                self.advance();
                let matcher = LiteralMatcher::new(b)
                    .ok_or_else(|| self.error(String::from("invalid literal")))?;
                let pending = Pending::Literal(matcher);
                if let Some(p) = self.resume(pending, handler)? {
                    self.pending = Some(p);
                }
            }
            _ => {
                return Err(self.error(String::from("unexpected character")));
            }
        }
        Ok(())
    }

    /// Drives a partially-consumed token to completion, or returns it back
    /// (`Some`) if the buffer runs dry first.
    fn resume<H: SaxHandler>(
        &mut self,
        pending: Pending,
        handler: &mut H,
    ) -> Result<Option<Pending>, ParseError> {
        match pending {
            Pending::Literal(mut matcher) => loop {
                let Some(b) = self.buf.peek() else {
                    return Ok(Some(Pending::Literal(matcher)));
                };
                self.advance();
                match matcher.step(b) {
                    LiteralStep::NeedMore => {}
                    LiteralStep::Done(value) => {
                        match value {
                            LiteralValue::Null => handler.on_null(),
                            LiteralValue::True => handler.on_boolean(true),
                            LiteralValue::False => handler.on_boolean(false),
                        }
                        self.after_value();
                        return Ok(None);
                    }
                    LiteralStep::Reject => {
                        return Err(self.error(String::from("invalid literal")));
                    }
                }
            },
            Pending::Number(mut scratch) => loop {
                match self.buf.peek() {
                    Some(b) if NumberScratch::continues(b) => {
                        if scratch.push(b).is_err() {
                            return Err(self.error(String::from("invalid number")));
                        }
                        self.advance();
                    }
                    Some(_) | None => {
                        if self.buf.peek().is_none() && !self.eof {
                            return Ok(Some(Pending::Number(scratch)));
                        }
                        match scratch.finish() {
                            Ok(crate::value::Value::Integer(i)) => handler.on_integer(i),
                            Ok(crate::value::Value::Double(d)) => handler.on_double(d),
                            Ok(_) => {
                                unreachable!("a number lexeme only finishes as Integer or Double")
                            }
                            Err(()) => {
                                return Err(self.error(String::from("invalid number")));
                            }
                        }
                        self.after_value();
                        return Ok(None);
                    }
                }
            },
            Pending::String {
                key,
                mut scratch,
                mut escape,
            } => loop {
                let Some(b) = self.buf.peek() else {
                    return Ok(Some(Pending::String {
                        key,
                        scratch,
                        escape,
                    }));
                };
                match escape {
                    EscapeMode::None => {
                        if b == b'"' {
                            self.advance();
                            let value = if self.binary {
                                JsonString::Bytes(scratch.finish_bytes())
                            } else {
                                JsonString::Text(scratch.finish_text())
                            };
                            if key {
                                handler.on_map_key(value);
                                self.set_obj_expect(ObjExpect::Value);
                            } else {
                                handler.on_string(value);
                                self.after_value();
                            }
                            return Ok(None);
                        } else if b == b'\\' {
                            self.advance();
                            escape = EscapeMode::Backslash;
                        } else if b < 0x20 {
                            return Err(self.error(String::from("unescaped control character")));
                        } else if b < 0x80 {
                            scratch.push_literal(b);
                            self.advance();
                        } else if scratch.is_raw() {
                            // `yajl_dont_validate_strings`: copy the byte
                            // through unexamined, valid UTF-8 or not.
                            scratch.push_literal(b);
                            self.advance();
                        } else {
                            let len = utf8_len(b);
                            let Some(len) = len else {
                                match self.errors {
                                    ErrorPolicy::Strict => {
                                        return Err(ParseError::invalid_utf8(self.bytes_consumed));
                                    }
                                    ErrorPolicy::Replace => scratch.push_replacement(),
                                    ErrorPolicy::Ignore => {}
                                }
                                self.advance();
                                continue;
                            };
                            let mut tmp = [0u8; 4];
                            let mut have = 0;
                            for i in 0..len {
                                let Some(nb) = self.buf.peek_at(i) else {
                                    return Ok(Some(Pending::String {
                                        key,
                                        scratch,
                                        escape,
                                    }));
                                };
                                tmp[i] = nb;
                                have += 1;
                            }
                            if have == len {
                                if !scratch.push_utf8_continuation(&tmp[..len]) {
                                    match self.errors {
                                        ErrorPolicy::Strict => {
                                            return Err(ParseError::invalid_utf8(
                                                self.bytes_consumed,
                                            ));
                                        }
                                        ErrorPolicy::Replace => scratch.push_replacement(),
                                        ErrorPolicy::Ignore => {}
                                    }
                                }
                                for _ in 0..len {
                                    self.advance();
                                }
                            }
                        }
                    }
                    EscapeMode::Backslash => {
                        if b == b'u' {
                            self.advance();
                            escape = EscapeMode::Unicode(0, 0);
                        } else {
                            self.advance();
                            scratch.apply_simple_escape(b)?;
                            escape = EscapeMode::None;
                        }
                    }
                    EscapeMode::Unicode(count, acc) => {
                        let Some(digit) = hex_digit(b) else {
                            return Err(self.error(String::from("invalid \\u escape")));
                        };
                        self.advance();
                        let acc = (acc << 4) | u16::from(digit);
                        if count + 1 == 4 {
                            scratch.apply_unicode_escape(acc)?;
                            escape = EscapeMode::None;
                        } else {
                            escape = EscapeMode::Unicode(count + 1, acc);
                        }
                    }
                }
            },
        }
    }
}

enum Expect {
    Value,
    Key,
    Colon,
    CommaOrObjectEnd,
    CommaOrArrayEnd,
}

fn utf8_len(lead: u8) -> Option<usize> {
    match lead {
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

fn hex_digit(b: u8) -> Option<u16> {
    match b {
        b'0'..=b'9' => Some(u16::from(b - b'0')),
        b'a'..=b'f' => Some(u16::from(b - b'a' + 10)),
        b'A'..=b'F' => Some(u16::from(b - b'A' + 10)),
        _ => None,
    }
}
