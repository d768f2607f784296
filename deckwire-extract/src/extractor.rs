//! Tiered deck extraction over an event sequence.
//!
//! Function result strings are scanned in event order. The first candidate
//! that matches a tier's precondition resolves the whole extraction:
//!
//! 1. **Strict** — a marker-delimited block parsed as a JSON slide array.
//! 2. **Lenient recovery** — markers present but the strict parse failed;
//!    salvage complete artifact triples from the malformed block.
//! 3. **Bare** — no markers in the candidate; accept the whole string if it
//!    parses to a non-empty array whose first element carries an `html`
//!    field.
//!
//! Extraction is pure: the same events always yield the same result, and
//! artifacts found in different events are never merged.

use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use deckwire_core::{AgentEvent, SlideArtifact, SlideDeck};

use crate::outcome::ExtractionResult;
use crate::{lenient, strict};

/// Scan an event sequence for the first recoverable slide-deck payload.
pub fn extract(events: &[AgentEvent]) -> ExtractionResult {
    for event in events {
        for candidate in event.function_results() {
            if strict::has_marker(candidate) {
                debug!(event = %event.id, "slide markers found in function result");
                return extract_marked(candidate);
            }
            if let Some(deck) = extract_bare(candidate) {
                debug!(event = %event.id, slides = deck.len(), "bare slide array accepted");
                return ExtractionResult::Deck(deck);
            }
        }
    }
    ExtractionResult::NotFound
}

/// Resolve a candidate that carries slide markers: strict first, then the
/// lenient scanner. Markers confirm the intent to produce slides, so this
/// never falls through to later candidates.
fn extract_marked(candidate: &str) -> ExtractionResult {
    if let Some(block) = strict::marked_block(candidate) {
        match strict::parse_deck(block) {
            Ok(deck) => return ExtractionResult::Deck(deck),
            Err(err) => {
                debug!(%err, "strict slide parse failed; attempting recovery");
            }
        }
    } else {
        debug!("closing marker missing; attempting recovery on the open block");
    }

    let Some(block) = strict::enclosed_text(candidate) else {
        return ExtractionResult::TaggedButUnparseable;
    };
    let slides = lenient::scan(block);
    if slides.is_empty() {
        return ExtractionResult::TaggedButUnparseable;
    }
    match SlideDeck::new(slides) {
        Ok(deck) => ExtractionResult::Deck(deck),
        Err(err) => {
            warn!(%err, "recovered artifacts violate the deck contract");
            ExtractionResult::TaggedButUnparseable
        }
    }
}

/// Tier 3: a candidate with no markers that is itself a slide array.
fn extract_bare(candidate: &str) -> Option<SlideDeck> {
    let value: JsonValue = serde_json::from_str(candidate.trim()).ok()?;
    let array = value.as_array()?;
    if array.first()?.get("html").is_none() {
        return None;
    }
    let slides: Vec<SlideArtifact> = serde_json::from_value(value).ok()?;
    SlideDeck::new(slides).ok()
}
