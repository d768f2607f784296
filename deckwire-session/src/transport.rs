//! The transport seam.
//!
//! Network concerns — endpoints, retries, timeouts, cancellation — live in
//! an external collaborator behind [`QueryTransport`]. The pipeline only
//! requires that a submitted query yields one byte stream terminated by
//! stream close, and that failures arrive as [`TransportError`] items.

use std::collections::VecDeque;
use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::{stream, Stream};
use parking_lot::Mutex;

use crate::error::TransportError;
use crate::request::QueryRequest;

/// One query's response body as a chunked byte stream.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, TransportError>> + Send>>;

/// Submits query requests to the backend and returns their response bodies.
#[async_trait]
pub trait QueryTransport: Send + Sync {
    /// Submit one query and return its response body stream.
    async fn submit(&self, request: QueryRequest) -> Result<ByteStream, TransportError>;
}

/// An in-memory transport that replays canned response bodies.
///
/// Each submitted query consumes the next enqueued body, delivered in small
/// chunks so accumulation sees realistic boundaries. Backs the tests and the
/// runnable example; production code plugs a real network transport into the
/// same trait.
#[derive(Debug)]
pub struct ReplayTransport {
    responses: Mutex<VecDeque<Vec<u8>>>,
    chunk_size: usize,
}

impl Default for ReplayTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplayTransport {
    /// Create an empty replay transport.
    #[must_use]
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            chunk_size: 64,
        }
    }

    /// Set the chunk size used when replaying bodies.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Enqueue a canned response body for the next query.
    pub fn enqueue(&self, body: impl Into<Vec<u8>>) {
        self.responses.lock().push_back(body.into());
    }

    /// Enqueue a canned response body, builder style.
    #[must_use]
    pub fn with_response(self, body: impl Into<Vec<u8>>) -> Self {
        self.enqueue(body);
        self
    }
}

#[async_trait]
impl QueryTransport for ReplayTransport {
    async fn submit(&self, _request: QueryRequest) -> Result<ByteStream, TransportError> {
        let body = self
            .responses
            .lock()
            .pop_front()
            .ok_or(TransportError::Exhausted)?;
        let chunks: Vec<Result<Bytes, TransportError>> = body
            .chunks(self.chunk_size)
            .map(|chunk| Ok(Bytes::copy_from_slice(chunk)))
            .collect();
        Ok(Box::pin(stream::iter(chunks)))
    }
}
