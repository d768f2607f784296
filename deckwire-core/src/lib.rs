//! # deckwire-core
//!
//! Core data model for the deckwire pipeline:
//!
//! - **Events**: [`AgentEvent`] and [`Part`] wire types for backend output
//! - **Envelope**: [`Envelope`] — the recognized response wrapper shapes,
//!   decoded in fixed priority order
//! - **Deck**: [`SlideArtifact`] and [`SlideDeck`] presentation artifacts
//! - **Transcript**: the append-only [`ChatMessage`] list
//!
//! ## Example
//!
//! ```rust
//! use deckwire_core::Envelope;
//!
//! let envelope = Envelope::decode(
//!     r#"{"events":[{"author":"coordinator","content":{"parts":[{"text":"Hello"}]}}]}"#,
//! );
//! let events = envelope.events().expect("recognized shape");
//! assert_eq!(events[0].texts().next(), Some("Hello"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod deck;
pub mod envelope;
pub mod errors;
pub mod events;
pub mod transcript;

pub use deck::{SlideArtifact, SlideDeck, UNTITLED_SLIDE};
pub use envelope::Envelope;
pub use errors::DeckError;
pub use events::{AgentEvent, EventContent, FunctionResponse, FunctionResponsePayload, Part};
pub use transcript::{ChatMessage, Role, Transcript};

/// Prelude module for common imports.
pub mod prelude {
    pub use crate::deck::{SlideArtifact, SlideDeck};
    pub use crate::envelope::Envelope;
    pub use crate::errors::DeckError;
    pub use crate::events::{AgentEvent, Part};
    pub use crate::transcript::{ChatMessage, Role, Transcript};
}
