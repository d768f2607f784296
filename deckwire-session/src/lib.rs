//! # deckwire-session
//!
//! Pipeline composition and session state for deckwire.
//!
//! [`pipeline::run`] turns one response stream into a [`QueryOutcome`] —
//! deck, narration, or raw fallback text. [`Session`] owns what survives
//! across queries: the append-only transcript and the replaceable deck cell,
//! keyed by an opaque backend session id. The network lives behind the
//! [`QueryTransport`] trait; [`ReplayTransport`] is the in-memory
//! implementation backing tests and examples.
//!
//! ## Example
//!
//! ```rust
//! use deckwire_session::{ReplayTransport, Session};
//!
//! # tokio_test::block_on(async {
//! let transport = ReplayTransport::new().with_response(
//!     r#"{"events":[{"author":"coordinator","content":{"parts":[{"text":"Hello"}]}}]}"#,
//! );
//! let mut session = Session::new("sess-1", transport);
//! session.submit("Pythagorean Theorem").await.unwrap();
//! assert_eq!(session.transcript().last().unwrap().content, "Hello");
//! # });
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod pipeline;
pub mod request;
pub mod session;
pub mod transport;

pub use config::PipelineConfig;
pub use error::{SessionError, TransportError};
pub use pipeline::{QueryOutcome, SLIDES_UNRECOVERED_NOTICE};
pub use request::QueryRequest;
pub use session::Session;
pub use transport::{ByteStream, QueryTransport, ReplayTransport};
