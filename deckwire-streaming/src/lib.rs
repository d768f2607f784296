//! # deckwire-streaming
//!
//! Byte-stream accumulation for the deckwire pipeline.
//!
//! One backend response arrives as an opaque chunked byte stream terminated
//! by stream close. [`StreamAccumulator`] consumes it to completion and
//! produces one decoded text blob, handling multi-byte characters split
//! across chunk edges. Transport failures surface as [`StreamError`]; no
//! partial result is ever exposed.
//!
//! ## Example
//!
//! ```rust
//! use bytes::Bytes;
//! use deckwire_streaming::{StreamAccumulator, StreamError};
//! use futures::stream;
//!
//! # tokio_test::block_on(async {
//! let chunks: Vec<Result<Bytes, StreamError>> =
//!     vec![Ok(Bytes::from_static(b"hello ")), Ok(Bytes::from_static(b"world"))];
//! let blob = StreamAccumulator::collect(stream::iter(chunks)).await.unwrap();
//! assert_eq!(blob, "hello world");
//! # });
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod accumulator;
pub mod error;

pub use accumulator::StreamAccumulator;
pub use error::{StreamError, StreamResult};
