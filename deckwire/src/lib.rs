//! # deckwire
//!
//! The response-processing core of a deck-generation chat agent.
//!
//! A conversational backend answers each query with an opaque, incrementally
//! delivered byte stream. deckwire turns that stream into two reliable
//! artifacts — an ordered transcript of assistant text and a structured deck
//! of presentation slides — despite the backend emitting several
//! inconsistent envelope shapes and occasionally truncated or malformed
//! embedded payloads.
//!
//! ## Architecture
//!
//! deckwire is organized as a workspace of focused crates:
//!
//! - [`deckwire_streaming`] - byte-stream accumulation into one decoded blob
//! - [`deckwire_core`] - agent events, envelope decoding, decks, transcript
//! - [`deckwire_extract`] - tiered slide extraction and narration selection
//! - [`deckwire_session`] - pipeline composition, transport seam, session
//!   state
//!
//! ## Quick Start
//!
//! ```rust
//! use deckwire::prelude::*;
//!
//! # tokio_test::block_on(async {
//! // A canned backend response; production code plugs a real network
//! // transport into the same trait.
//! let transport = ReplayTransport::new().with_response(
//!     r#"{"events":[
//!         {"author":"presentation_agent","id":"e1","content":{"parts":[
//!             {"functionResponse":{"response":{"result":
//!                 "<Slides>[{\"id\":\"s1\",\"title\":\"Intro\",\"html\":\"<html></html>\"}]</Slides>"
//!             }}}
//!         ]}},
//!         {"author":"coordinator","id":"e2","content":{"parts":[{"text":"Here is your deck"}]}}
//!     ]}"#,
//! );
//!
//! let mut session = Session::new("sess-1", transport);
//! session.submit("Pythagorean Theorem").await.unwrap();
//!
//! assert_eq!(session.deck().unwrap().len(), 1);
//! assert_eq!(session.transcript().last().unwrap().content, "Here is your deck");
//! # });
//! ```
//!
//! ## Degradation, not failure
//!
//! Every malformed input resolves to a defined state: an unrecognized
//! envelope falls back to showing the raw text, a truncated slide payload is
//! salvaged artifact by artifact, and a payload that confirms slide intent
//! without a usable artifact surfaces a notice instead of a deck. Only a
//! transport failure aborts a query, and then with no partial update.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

/// Core data model: events, envelopes, decks, transcript.
pub use deckwire_core as core;

/// Tiered slide extraction and narration aggregation.
pub use deckwire_extract as extract;

/// Pipeline composition, transport seam, session state.
pub use deckwire_session as session;

/// Byte-stream accumulation.
pub use deckwire_streaming as streaming;

/// Prelude module for common imports.
///
/// ```rust
/// use deckwire::prelude::*;
/// ```
pub mod prelude {
    pub use deckwire_core::{
        AgentEvent, ChatMessage, Envelope, Part, Role, SlideArtifact, SlideDeck, Transcript,
    };
    pub use deckwire_extract::{extract, ExtractionResult};
    pub use deckwire_session::{
        PipelineConfig, QueryOutcome, QueryRequest, QueryTransport, ReplayTransport, Session,
        SessionError, TransportError,
    };
    pub use deckwire_streaming::{StreamAccumulator, StreamError};
}
