//! Streaming errors.

use thiserror::Error;

/// Errors that can occur while accumulating a response stream.
#[derive(Debug, Error)]
pub enum StreamError {
    /// The transport failed while reading a chunk.
    ///
    /// Fatal to the current query only; retry policy belongs to the
    /// transport, not here.
    #[error("stream read failed: {0}")]
    Read(String),

    /// The accumulated response exceeded the buffer limit.
    #[error("response body exceeded the accumulation limit")]
    BufferOverflow,
}

impl StreamError {
    /// Create a read error from any displayable transport error.
    pub fn read<E: std::fmt::Display>(err: E) -> Self {
        Self::Read(err.to_string())
    }
}

/// Result type for streaming operations.
pub type StreamResult<T> = Result<T, StreamError>;
