//! Extraction errors.
//!
//! These never cross the pipeline boundary — a failed strict parse triggers
//! the lenient fallback and a failed extraction resolves to an
//! [`ExtractionResult`](crate::ExtractionResult) variant — but the strict
//! parser reports them so the fallback decision can be logged.

use deckwire_core::DeckError;
use thiserror::Error;

/// Why a strict parse of a slide payload failed.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The payload was not a well-formed slide array.
    #[error("payload is not a valid slide array: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload parsed but violated the deck contract.
    #[error(transparent)]
    Deck(#[from] DeckError),
}
