//! Number lexeme accumulation, preserving the integer/double distinction
//! yajl's `integer`/`double` callbacks make.
use alloc::string::String;

use crate::value::Value;

/// Position within the JSON number grammar
/// (`["-"] int ["." 1*digit] [("e" / "E") ["-" / "+"] 1*digit]`).
///
/// Only [`NumState::IntZero`], [`NumState::IntDigits`],
/// [`NumState::FracDigits`], and [`NumState::ExpDigits`] are valid places for
/// the lexeme to end; the others are mid-construct (just saw a sign, `.`, or
/// `e`/`E` with no digit yet) and finishing there is a malformed number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumState {
    /// Just pushed a leading `-`; the first integer digit hasn't arrived.
    Sign,
    /// Integer part is exactly `"0"` — no further integer digit may follow.
    IntZero,
    /// In the middle of a non-zero-leading integer part.
    IntDigits,
    /// Just pushed `.`; the first fraction digit hasn't arrived.
    FracFirst,
    /// In the middle of the fraction digits.
    FracDigits,
    /// Just pushed `e`/`E`; an optional sign or the first exponent digit
    /// hasn't arrived.
    ExpSign,
    /// Just pushed an exponent sign; the first exponent digit hasn't
    /// arrived.
    ExpFirst,
    /// In the middle of the exponent digits.
    ExpDigits,
}

/// Accumulates a number lexeme byte by byte, validating it against the JSON
/// number grammar as each byte arrives and tracking whether anything seen so
/// far forces floating-point representation.
#[derive(Debug)]
pub(crate) struct NumberScratch {
    text: String,
    state: NumState,
    has_fraction_or_exponent: bool,
}

impl NumberScratch {
    /// Starts a new lexeme from its already-consumed first byte (`-` or an
    /// ASCII digit, per the `b'-' | b'0'..=b'9'` dispatch in
    /// `Tokenizer::start_value`).
    pub(crate) fn new(first: u8) -> Self {
        let state = match first {
            b'-' => NumState::Sign,
            b'0' => NumState::IntZero,
            _ => NumState::IntDigits,
        };
        let mut text = String::new();
        text.push(first as char);
        NumberScratch {
            text,
            state,
            has_fraction_or_exponent: false,
        }
    }

    /// Whether `b` belongs to the character class that can ever continue a
    /// number lexeme. A `true` result only means `b` is worth attempting via
    /// [`Self::push`] — it does not mean the grammar actually permits `b`
    /// here (e.g. a second `.` is in this class but [`Self::push`] rejects
    /// it).
    pub(crate) fn continues(b: u8) -> bool {
        b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-')
    }

    /// Advances the grammar state machine by one byte. Returns `Err` if `b`
    /// is not a legal continuation of the lexeme built so far (a redundant
    /// leading zero, a second `.` or exponent, a bare sign not immediately
    /// preceding a digit, and so on).
    pub(crate) fn push(&mut self, b: u8) -> Result<(), ()> {
        use NumState::{
            ExpDigits, ExpFirst, ExpSign, FracDigits, FracFirst, IntDigits, IntZero, Sign,
        };
        let next = match (self.state, b) {
            (Sign, b'0') => IntZero,
            (Sign, b'1'..=b'9') => IntDigits,
            (IntDigits, b'0'..=b'9') => IntDigits,
            (IntZero | IntDigits, b'.') => {
                self.has_fraction_or_exponent = true;
                FracFirst
            }
            (IntZero | IntDigits, b'e' | b'E') => {
                self.has_fraction_or_exponent = true;
                ExpSign
            }
            (FracFirst | FracDigits, b'0'..=b'9') => FracDigits,
            (FracDigits, b'e' | b'E') => ExpSign,
            (ExpSign, b'+' | b'-') => ExpFirst,
            (ExpSign | ExpFirst | ExpDigits, b'0'..=b'9') => ExpDigits,
            _ => return Err(()),
        };
        self.state = next;
        self.text.push(b as char);
        Ok(())
    }

    /// Finalizes the lexeme into a [`Value::Integer`] when it parses as an
    /// `i64` and contains no fraction or exponent marker, falling back to
    /// [`Value::Double`] otherwise. Returns `Err` if the lexeme ended
    /// mid-construct (e.g. `"-"`, `"1."`, `"1e"`, `"1e+"`) or — though the
    /// grammar walked by [`Self::push`] should make this unreachable — if
    /// the accumulated text still fails to parse as a double.
    pub(crate) fn finish(self) -> Result<Value, ()> {
        if !matches!(
            self.state,
            NumState::IntZero | NumState::IntDigits | NumState::FracDigits | NumState::ExpDigits
        ) {
            return Err(());
        }
        if !self.has_fraction_or_exponent {
            if let Ok(i) = self.text.parse::<i64>() {
                return Ok(Value::Integer(i));
            }
        }
        self.text.parse::<f64>().map(Value::Double).map_err(|_| ())
    }
}
