#![no_main]
use arbitrary::Arbitrary;
use jsonslicer::{pattern, Slicer, SlicerOptions, Wildcard};
use libfuzzer_sys::fuzz_target;

/// A fuzz input: raw bytes to feed, a chunk size to split them by (exercising
/// chunk-boundary handling), and a handful of option flags.
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    data: Vec<u8>,
    chunk_size: u8,
    allow_comments: bool,
    allow_trailing_garbage: bool,
    allow_multiple_values: bool,
    allow_partial_values: bool,
    binary: bool,
}

struct ChunkedReader<'a> {
    remaining: &'a [u8],
    chunk_size: usize,
}

impl jsonslicer::ByteSource for ChunkedReader<'_> {
    type Error = core::convert::Infallible;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let n = buf.len().min(self.chunk_size).min(self.remaining.len());
        buf[..n].copy_from_slice(&self.remaining[..n]);
        self.remaining = &self.remaining[n..];
        Ok(n)
    }
}

fuzz_target!(|input: FuzzInput| {
    let mut options = SlicerOptions::default();
    options.yajl_allow_comments = input.allow_comments;
    options.yajl_allow_trailing_garbage = input.allow_trailing_garbage;
    options.yajl_allow_multiple_values = input.allow_multiple_values;
    options.yajl_allow_partial_values = input.allow_partial_values;
    options.binary = input.binary;
    options.yajl_dont_validate_strings = input.binary;

    let reader = ChunkedReader {
        remaining: &input.data,
        chunk_size: usize::from(input.chunk_size).max(1),
    };

    // Panicking (rather than returning a parse error) on any input is the
    // only thing this target treats as a bug: malformed JSON is expected and
    // should surface as `Err`, never as an internal assertion failure.
    if let Ok(slicer) = Slicer::new(reader, pattern![Wildcard], options) {
        for item in slicer {
            if item.is_err() {
                break;
            }
        }
    }
});
