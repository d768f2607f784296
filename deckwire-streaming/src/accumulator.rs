//! Response stream accumulation.
//!
//! The backend delivers one complete response body per query as a sequence of
//! byte chunks. [`StreamAccumulator`] reads the stream to completion and
//! produces a single decoded text blob; nothing downstream ever observes a
//! partial response. Chunk boundaries carry no meaning, so the decoder keeps
//! an incomplete trailing UTF-8 sequence in a carry buffer until the bytes
//! that finish it arrive.

use futures::{Stream, StreamExt};
use tracing::{trace, warn};

use crate::error::{StreamError, StreamResult};

/// Upper bound on the accumulated response size.
const MAX_BUFFER_SIZE: usize = 10 * 1024 * 1024;

/// Accumulates a chunked byte stream into one decoded text blob.
#[derive(Debug, Default)]
pub struct StreamAccumulator {
    text: String,
    carry: Vec<u8>,
}

impl StreamAccumulator {
    /// Create an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a stream to completion and return the decoded blob.
    ///
    /// Chunks are consumed sequentially, awaiting each one cooperatively. A
    /// transport item error aborts accumulation: the partial blob is
    /// discarded and [`StreamError::Read`] is returned.
    pub async fn collect<S, B, E>(stream: S) -> StreamResult<String>
    where
        S: Stream<Item = Result<B, E>>,
        B: AsRef<[u8]>,
        E: std::fmt::Display,
    {
        let mut stream = std::pin::pin!(stream);
        let mut accumulator = Self::new();
        while let Some(item) = stream.next().await {
            match item {
                Ok(chunk) => accumulator.push(chunk.as_ref())?,
                Err(err) => {
                    warn!(%err, "transport read failed; discarding partial response");
                    return Err(StreamError::read(err));
                }
            }
        }
        Ok(accumulator.finish())
    }

    /// Feed one chunk of bytes into the accumulator.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::BufferOverflow`] when the accumulated response
    /// would exceed the buffer limit.
    pub fn push(&mut self, chunk: &[u8]) -> StreamResult<()> {
        if self.text.len() + self.carry.len() + chunk.len() > MAX_BUFFER_SIZE {
            return Err(StreamError::BufferOverflow);
        }
        trace!(len = chunk.len(), "accumulating chunk");

        if self.carry.is_empty() {
            self.decode(chunk);
        } else {
            let mut pending = std::mem::take(&mut self.carry);
            pending.extend_from_slice(chunk);
            self.decode(&pending);
        }
        Ok(())
    }

    /// Freeze the accumulator and hand the blob downstream.
    ///
    /// A dangling incomplete sequence at stream end decodes to U+FFFD, the
    /// same as any other invalid input.
    #[must_use]
    pub fn finish(mut self) -> String {
        if !self.carry.is_empty() {
            self.text.push(char::REPLACEMENT_CHARACTER);
        }
        self.text
    }

    /// Decoded length so far, in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether nothing has been decoded yet.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.carry.is_empty()
    }

    fn decode(&mut self, input: &[u8]) {
        let mut rest = input;
        loop {
            match std::str::from_utf8(rest) {
                Ok(valid) => {
                    self.text.push_str(valid);
                    return;
                }
                Err(err) => {
                    let (valid, after) = rest.split_at(err.valid_up_to());
                    if let Ok(prefix) = std::str::from_utf8(valid) {
                        self.text.push_str(prefix);
                    }
                    match err.error_len() {
                        // Genuinely invalid bytes decode lossily.
                        Some(len) => {
                            self.text.push(char::REPLACEMENT_CHARACTER);
                            rest = &after[len..];
                        }
                        // A multi-byte character split across chunk edges;
                        // hold the tail until the next chunk completes it.
                        None => {
                            self.carry = after.to_vec();
                            return;
                        }
                    }
                }
            }
        }
    }
}
