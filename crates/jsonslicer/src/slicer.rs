//! The slicer itself: seek engine, construct engine, and pull-based
//! iteration wired together.
use alloc::{collections::VecDeque, vec::Vec};

use crate::{
    error::{IoError, ParseError, SlicerError},
    output::OutputItem,
    path::{Path, PathElem},
    pattern::Pattern,
    reader::{map_read_error, ByteSource},
    tokenizer::{SaxHandler, Tokenizer},
    value::{JsonString, Map, Value},
    options::{PathMode, SlicerOptions},
};

/// Surfaces a `strict`-policy invalid-UTF-8 byte as [`SlicerError::Io`]
/// rather than [`SlicerError::Parse`] — it's a decoding failure, not a JSON
/// syntax error.
fn lex_error_to_slicer_error(e: ParseError) -> SlicerError {
    match e.as_invalid_utf8_offset() {
        Some(offset) => SlicerError::Io(IoError::InvalidUtf8(offset)),
        None => SlicerError::Parse(e),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Seeking,
    Constructing,
}

/// A container under construction. Each frame is only installed into its
/// parent when it is popped complete, rather than linked in the moment it
/// is opened — nesting stays O(depth) either way, and no backpointer from
/// child to parent is ever needed.
enum ConstructFrame {
    Array(Vec<Value>),
    Object(Map),
}

/// Tracks seek/construct state and accumulates completed items. Kept
/// separate from [`Tokenizer`] (rather than folded into one struct) purely
/// so [`Slicer::next`] can hand `&mut Engine` to `Tokenizer::feed` while
/// still holding `&mut self.tokenizer`.
struct Engine {
    pattern: Pattern,
    path_mode: PathMode,
    path: Path,
    state: State,
    constructing: Vec<ConstructFrame>,
    pending_key: Option<JsonString>,
    complete: VecDeque<OutputItem>,
}

impl Engine {
    fn new(pattern: Pattern, path_mode: PathMode) -> Self {
        Engine {
            pattern,
            path_mode,
            path: Path::new(),
            state: State::Seeking,
            constructing: Vec::new(),
            pending_key: None,
            complete: VecDeque::new(),
        }
    }

    fn add_to_parent(&mut self, value: Value) {
        match self.constructing.last_mut() {
            Some(ConstructFrame::Array(arr)) => arr.push(value),
            Some(ConstructFrame::Object(map)) => {
                let key = self
                    .pending_key
                    .take()
                    .expect("a map value always follows a map_key event");
                map.insert(key, value);
            }
            None => unreachable!("add_to_parent called with nothing under construction"),
        }
    }

    fn finish_complete_item(&mut self, value: Value) {
        let item = OutputItem::build(self.path_mode, &self.path, value);
        self.complete.push_back(item);
        self.state = State::Seeking;
        self.path.bump_tail_index();
    }

    fn scalar(&mut self, value: Value) {
        match self.state {
            State::Constructing => self.add_to_parent(value),
            State::Seeking => {
                if self.pattern.matches(&self.path) {
                    let item = OutputItem::build(self.path_mode, &self.path, value);
                    self.complete.push_back(item);
                }
                self.path.bump_tail_index();
            }
        }
    }

    fn start_container(&mut self, is_object: bool) {
        match self.state {
            State::Constructing => {
                self.constructing.push(if is_object {
                    ConstructFrame::Object(Map::new())
                } else {
                    ConstructFrame::Array(Vec::new())
                });
            }
            State::Seeking => {
                if self.pattern.matches(&self.path) {
                    self.state = State::Constructing;
                    self.constructing.push(if is_object {
                        ConstructFrame::Object(Map::new())
                    } else {
                        ConstructFrame::Array(Vec::new())
                    });
                } else {
                    self.path.push(if is_object {
                        PathElem::Sentinel
                    } else {
                        PathElem::Index(0)
                    });
                }
            }
        }
    }

    /// Checks spec.md §8 invariant 1 — after any event is fully processed,
    /// `state == Seeking` iff the constructing stack is empty — the same
    /// "catch a broken invariant with a panic the fuzzer can report" role
    /// the teacher's `#[cfg(any(test, feature = "fuzzing"))]`-gated
    /// assertions play in `parser.rs`. Compiled out of ordinary release
    /// builds since it runs after every single token.
    #[cfg(any(test, feature = "fuzzing"))]
    fn check_invariant(&self) {
        assert_eq!(
            self.state == State::Seeking,
            self.constructing.is_empty(),
            "state/stack mismatch: state={:?}, constructing depth={}",
            self.state,
            self.constructing.len()
        );
    }

    #[cfg(not(any(test, feature = "fuzzing")))]
    fn check_invariant(&self) {}

    fn end_container(&mut self) {
        match self.state {
            State::Constructing => {
                let frame = self
                    .constructing
                    .pop()
                    .expect("end_container called with nothing under construction");
                let value = match frame {
                    ConstructFrame::Array(arr) => Value::Array(arr),
                    ConstructFrame::Object(map) => Value::Object(map),
                };
                if self.constructing.is_empty() {
                    self.finish_complete_item(value);
                } else {
                    self.add_to_parent(value);
                }
            }
            State::Seeking => {
                self.path.pop();
                self.path.bump_tail_index();
            }
        }
    }
}

impl SaxHandler for Engine {
    fn on_null(&mut self) {
        self.scalar(Value::Null);
        self.check_invariant();
    }

    fn on_boolean(&mut self, value: bool) {
        self.scalar(Value::Bool(value));
        self.check_invariant();
    }

    fn on_integer(&mut self, value: i64) {
        self.scalar(Value::Integer(value));
        self.check_invariant();
    }

    fn on_double(&mut self, value: f64) {
        self.scalar(Value::Double(value));
        self.check_invariant();
    }

    fn on_string(&mut self, value: JsonString) {
        self.scalar(Value::Str(value));
        self.check_invariant();
    }

    fn on_map_key(&mut self, value: JsonString) {
        match self.state {
            State::Constructing => self.pending_key = Some(value),
            State::Seeking => self.path.set_last(PathElem::Key(value)),
        }
        self.check_invariant();
    }

    fn on_start_map(&mut self) {
        self.start_container(true);
        self.check_invariant();
    }

    fn on_end_map(&mut self) {
        self.end_container();
        self.check_invariant();
    }

    fn on_start_array(&mut self) {
        self.start_container(false);
        self.check_invariant();
    }

    fn on_end_array(&mut self) {
        self.end_container();
        self.check_invariant();
    }
}

/// Pulls matching sub-values out of a byte stream.
///
/// Construct with [`Slicer::new`], then iterate: each `Some(Ok(item))` is
/// one completed value whose path matched the pattern, in document order.
pub struct Slicer<R: ByteSource> {
    reader: R,
    read_size: usize,
    read_buf: Vec<u8>,
    allow_partial_values: bool,
    tokenizer: Tokenizer,
    engine: Engine,
    eof: bool,
    done: bool,
}

impl<R: ByteSource> Slicer<R> {
    /// Builds a new slicer reading from `reader`, emitting values whose path
    /// matches `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`SlicerError::Config`] if `options` is self-contradictory
    /// (for example, `yajl_dont_validate_strings` set without `binary`).
    pub fn new(reader: R, pattern: Pattern, options: SlicerOptions) -> Result<Self, SlicerError> {
        options.validate().map_err(SlicerError::Config)?;
        Ok(Slicer {
            reader,
            read_size: options.read_size,
            read_buf: alloc::vec![0u8; options.read_size],
            allow_partial_values: options.yajl_allow_partial_values,
            tokenizer: Tokenizer::new(&options),
            engine: Engine::new(pattern, options.path_mode),
            eof: false,
            done: false,
        })
    }
}

impl<R: ByteSource> Iterator for Slicer<R> {
    type Item = Result<OutputItem, SlicerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(item) = self.engine.complete.pop_front() {
            return Some(Ok(item));
        }
        if self.done {
            return None;
        }
        loop {
            if self.eof {
                self.done = true;
                return match self
                    .tokenizer
                    .finish(&mut self.engine, self.allow_partial_values)
                {
                    Ok(()) => self.engine.complete.pop_front().map(Ok),
                    Err(e) => Some(Err(lex_error_to_slicer_error(e))),
                };
            }

            if self.read_buf.len() != self.read_size {
                self.read_buf.resize(self.read_size, 0);
            }
            match self.reader.read(&mut self.read_buf[..self.read_size]) {
                Ok(0) => self.eof = true,
                Ok(n) => {
                    if let Err(e) = self.tokenizer.feed(&self.read_buf[..n], &mut self.engine) {
                        self.done = true;
                        return Some(Err(lex_error_to_slicer_error(e)));
                    }
                    if let Some(item) = self.engine.complete.pop_front() {
                        return Some(Ok(item));
                    }
                }
                Err(err) => {
                    self.done = true;
                    return Some(Err(SlicerError::Io(map_read_error(err))));
                }
            }
        }
    }
}
