//! Strict slide-payload parsing.
//!
//! The backend wraps a generated deck in literal `<Slides>` … `</Slides>`
//! markers (case-insensitive) around a JSON array of artifacts. This module
//! locates the marked block and parses it strictly; it knows nothing about
//! recovery. The lenient fallback lives in [`crate::lenient`] and can never
//! weaken the parsing done here.

use std::sync::LazyLock;

use regex::Regex;

use deckwire_core::{SlideArtifact, SlideDeck};

use crate::error::ExtractError;

static MARKED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<slides>(.*?)</slides>").expect("valid block pattern"));

static OPEN_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<slides>").expect("valid marker pattern"));

/// Whether the text contains an opening slide marker anywhere.
pub fn has_marker(text: &str) -> bool {
    OPEN_MARKER.is_match(text)
}

/// The innermost marker-delimited block, if both markers are present.
///
/// Matching is non-greedy: the block runs from the first opening marker to
/// the first closing marker after it.
pub fn marked_block(text: &str) -> Option<&str> {
    MARKED_BLOCK
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// The text enclosed by the markers, tolerating a missing closing marker.
///
/// A payload truncated mid-deck usually loses `</Slides>` along with the
/// tail of the array; recovery still needs everything after the opening
/// marker.
pub fn enclosed_text(text: &str) -> Option<&str> {
    if let Some(block) = marked_block(text) {
        return Some(block);
    }
    OPEN_MARKER
        .find(text)
        .map(|open| text[open.end()..].trim())
}

/// Parse a marked block strictly as a slide array.
///
/// # Errors
///
/// Fails if the block is not well-formed JSON, is not an array of artifacts,
/// or carries duplicate slide ids.
pub fn parse_deck(block: &str) -> Result<SlideDeck, ExtractError> {
    let slides: Vec<SlideArtifact> = serde_json::from_str(block)?;
    Ok(SlideDeck::new(slides)?)
}
