//! Error types for deckwire-core.

use thiserror::Error;

/// Errors raised while building or validating a slide deck.
#[derive(Debug, Error)]
pub enum DeckError {
    /// Two artifacts in the same deck carried the same id.
    ///
    /// Duplicate ids are a contract violation on the backend's side; they are
    /// rejected rather than silently merged.
    #[error("duplicate slide id in deck: {id}")]
    DuplicateSlideId {
        /// The offending id.
        id: String,
    },
}
