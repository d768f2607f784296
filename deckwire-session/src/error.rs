//! Session-level errors.

use deckwire_streaming::StreamError;
use thiserror::Error;

/// Errors from the transport collaborator.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Submitting the query request failed.
    #[error("query submission failed: {0}")]
    Submit(String),

    /// Reading the response body failed mid-stream.
    #[error("response read failed: {0}")]
    Read(String),

    /// The replay transport ran out of canned responses.
    #[error("no canned response left to replay")]
    Exhausted,
}

impl TransportError {
    /// Create a submit error from any displayable cause.
    pub fn submit<E: std::fmt::Display>(err: E) -> Self {
        Self::Submit(err.to_string())
    }

    /// Create a read error from any displayable cause.
    pub fn read<E: std::fmt::Display>(err: E) -> Self {
        Self::Read(err.to_string())
    }
}

/// Errors surfaced by a session query.
///
/// Both variants are fatal to the current query only: session state beyond
/// the already-appended user message is untouched.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The transport refused or failed the submission.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response stream failed while being accumulated.
    #[error(transparent)]
    Stream(#[from] StreamError),
}
