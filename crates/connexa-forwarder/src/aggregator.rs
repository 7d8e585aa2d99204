//! Payload-bounded bundling of log lines.
//!
//! Lines are appended to an open bundle while a running byte counter stays
//! under the payload ceiling. When a line would push the counter over, the
//! open bundle is closed and a fresh one started. The counter resets to
//! zero on rollover without counting the triggering line, so a bundle can
//! exceed the ceiling by at most one entry; the entry-count ceiling is
//! applied later, when bundles are partitioned for submission.

use tracing::debug;

use crate::constants::MAX_PAYLOAD_SIZE_BYTES;

/// Groups log lines into request-sized bundles.
#[derive(Debug)]
pub struct LogAggregator {
    bundles: Vec<Vec<String>>,
    current: Vec<String>,
    current_size: usize,
    max_payload_size_bytes: usize,
}

impl Default for LogAggregator {
    fn default() -> Self {
        LogAggregator::new(MAX_PAYLOAD_SIZE_BYTES)
    }
}

impl LogAggregator {
    /// Creates an aggregator with a custom payload ceiling.
    ///
    /// Production use goes through [`LogAggregator::default()`].
    pub fn new(max_payload_size_bytes: usize) -> Self {
        LogAggregator {
            bundles: Vec::new(),
            current: Vec::new(),
            current_size: 0,
            max_payload_size_bytes,
        }
    }

    /// Appends one line, rolling over to a fresh bundle when the byte
    /// counter passes the payload ceiling.
    ///
    /// On rollover the triggering line lands in the fresh bundle and its
    /// bytes are not counted toward it.
    pub fn push(&mut self, line: String) {
        self.current_size += line.len();
        if self.current_size > self.max_payload_size_bytes {
            debug!(
                "Payload ceiling reached, closing bundle with {} entries",
                self.current.len()
            );
            self.bundles.push(std::mem::take(&mut self.current));
            self.current_size = 0;
        }
        self.current.push(line);
    }

    /// Returns the accumulated bundles in emission order.
    pub fn into_bundles(mut self) -> Vec<Vec<String>> {
        if !self.current.is_empty() {
            self.bundles.push(self.current);
        }
        self.bundles
    }
}
