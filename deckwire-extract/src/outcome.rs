//! Extraction outcomes.

use deckwire_core::SlideDeck;

/// Result of scanning one query's events for a slide-deck payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionResult {
    /// A deck was recovered.
    Deck(SlideDeck),
    /// Slide markers were present — the backend intended to produce slides —
    /// but no usable artifact could be recovered.
    TaggedButUnparseable,
    /// No slide payload anywhere in the event sequence.
    NotFound,
}

impl ExtractionResult {
    /// The recovered deck, consuming the result.
    pub fn into_deck(self) -> Option<SlideDeck> {
        match self {
            Self::Deck(deck) => Some(deck),
            _ => None,
        }
    }

    /// The recovered deck, by reference.
    pub fn deck(&self) -> Option<&SlideDeck> {
        match self {
            Self::Deck(deck) => Some(deck),
            _ => None,
        }
    }

    /// Whether markers were seen without a recoverable artifact.
    pub fn is_tagged_but_unparseable(&self) -> bool {
        matches!(self, Self::TaggedButUnparseable)
    }

    /// Whether no payload was found at all.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
