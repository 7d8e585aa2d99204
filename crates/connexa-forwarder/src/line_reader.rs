//! Streaming gzip decode and line splitting for log objects.
//!
//! Wraps an object's byte stream with gzip decompression and yields one
//! logical log line at a time. Lines longer than the per-entry ceiling are
//! emitted as fixed-length fragments; concatenating the fragments in order
//! reproduces the original line exactly.

use std::collections::VecDeque;
use std::io::{BufRead, BufReader, Lines, Read};

use flate2::read::GzDecoder;

use crate::constants::MAX_LOG_SIZE_BYTES;

/// Iterator of log lines decoded from a gzip-compressed byte stream.
///
/// The stream is finite and single-pass. Line contents are opaque; the
/// input is treated as text only for the purpose of line boundaries.
pub struct GzLineReader<R: Read> {
    lines: Lines<BufReader<GzDecoder<R>>>,
    fragments: VecDeque<String>,
}

impl<R: Read> GzLineReader<R> {
    pub fn new(inner: R) -> Self {
        GzLineReader {
            lines: BufReader::new(GzDecoder::new(inner)).lines(),
            fragments: VecDeque::new(),
        }
    }
}

impl<R: Read> Iterator for GzLineReader<R> {
    type Item = std::io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(fragment) = self.fragments.pop_front() {
                return Some(Ok(fragment));
            }
            match self.lines.next()? {
                Ok(line) if line.len() <= MAX_LOG_SIZE_BYTES => return Some(Ok(line)),
                Ok(line) => self.fragments = split_fixed_length(&line, MAX_LOG_SIZE_BYTES),
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Split `line` into fragments of at most `max_len` bytes.
///
/// Split points fall on UTF-8 character boundaries, backing off from the
/// fixed length where needed, so every fragment stays valid UTF-8. The
/// final fragment may be shorter. `max_len` must be at least 4 bytes (the
/// widest UTF-8 character) so a split point always exists.
pub(crate) fn split_fixed_length(line: &str, max_len: usize) -> VecDeque<String> {
    debug_assert!(max_len >= 4);
    let mut fragments = VecDeque::new();
    let mut rest = line;
    while rest.len() > max_len {
        let mut split_at = max_len;
        while !rest.is_char_boundary(split_at) {
            split_at -= 1;
        }
        let (head, tail) = rest.split_at(split_at);
        fragments.push_back(head.to_string());
        rest = tail;
    }
    fragments.push_back(rest.to_string());
    fragments
}
