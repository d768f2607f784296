//! # deckwire-extract
//!
//! Tiered slide-deck extraction and narration aggregation.
//!
//! The backend embeds a generated deck inside a function result string,
//! usually wrapped in `<Slides>` markers, and occasionally truncated or
//! malformed. [`extract`] recovers it through three tiers of increasing
//! leniency — strict parse, best-effort salvage, bare array — while
//! [`narration`] selects the assistant text worth showing alongside it.
//!
//! The strict parser and the lenient scanner are separate modules on
//! purpose: the fallback is a best-effort candidate lister, never a patched
//! strict parser.
//!
//! ## Example
//!
//! ```rust
//! use deckwire_core::Envelope;
//! use deckwire_extract::{extract, ExtractionResult};
//!
//! let envelope = Envelope::decode(r#"{"events":[{
//!     "author": "presentation_agent",
//!     "id": "e1",
//!     "content": {"parts": [{"functionResponse": {"response": {
//!         "result": "<Slides>[{\"id\":\"s1\",\"title\":\"Intro\",\"html\":\"<html></html>\"}]</Slides>"
//!     }}}]}
//! }]}"#);
//!
//! let deck = extract(envelope.events().unwrap()).into_deck().unwrap();
//! assert_eq!(deck.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod extractor;
pub mod lenient;
pub mod narration;
pub mod outcome;
pub mod strict;

pub use error::ExtractError;
pub use extractor::extract;
pub use narration::DEFAULT_COORDINATOR_AUTHOR;
pub use outcome::ExtractionResult;
