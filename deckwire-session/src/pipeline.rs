//! Query pipeline.
//!
//! One invocation per submitted query: accumulate the byte stream, decode
//! the envelope, then run deck extraction and narration aggregation over the
//! same decoded events. This is the sole boundary that converts internal
//! outcomes into caller-visible results — everything below it resolves to a
//! degraded-but-defined state rather than an error.

use futures::Stream;
use tracing::{debug, info};

use deckwire_core::{Envelope, SlideDeck};
use deckwire_extract::{extract, narration, ExtractionResult};
use deckwire_streaming::{StreamAccumulator, StreamError};

use crate::config::PipelineConfig;

/// Narration shown when slide markers were present but nothing could be
/// recovered.
pub const SLIDES_UNRECOVERED_NOTICE: &str =
    "Slides were generated but could not be recovered from the response.";

/// Everything one query produced, assembled in full before publication.
///
/// Consumers apply the whole outcome at once; a deck update is never
/// observable without its narration or vice versa.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryOutcome {
    /// A newly extracted deck, replacing the previous one wholesale.
    pub deck: Option<SlideDeck>,
    /// Assistant narration for the transcript.
    pub narration: Option<String>,
    /// The accumulated raw text, present only when the envelope was
    /// unrecognized and the text non-empty; eligible for verbatim display.
    pub raw_fallback: Option<String>,
}

/// Run one query's response stream through the full pipeline.
///
/// # Errors
///
/// Returns [`StreamError`] when accumulation fails; no partial outcome is
/// produced.
pub async fn run<S, B, E>(stream: S, config: &PipelineConfig) -> Result<QueryOutcome, StreamError>
where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    E: std::fmt::Display,
{
    let blob = StreamAccumulator::collect(stream).await?;
    debug!(len = blob.len(), "response body accumulated");
    Ok(process(&blob, config))
}

/// Decode one complete response body into a query outcome.
pub fn process(blob: &str, config: &PipelineConfig) -> QueryOutcome {
    let envelope = Envelope::decode(blob);
    let Some(events) = envelope.events() else {
        // Raw text is shown verbatim; the trim only decides emptiness.
        return QueryOutcome {
            deck: None,
            narration: None,
            raw_fallback: (!blob.trim().is_empty()).then(|| blob.to_string()),
        };
    };

    match extract(events) {
        ExtractionResult::Deck(deck) => {
            info!(slides = deck.len(), "slide deck extracted");
            let narration = narration::collect(events, &config.coordinator_author, true);
            QueryOutcome {
                deck: Some(deck),
                narration,
                raw_fallback: None,
            }
        }
        ExtractionResult::TaggedButUnparseable => {
            debug!("slide intent confirmed but no artifact recovered");
            let narration = narration::collect(events, &config.coordinator_author, true)
                .or_else(|| Some(SLIDES_UNRECOVERED_NOTICE.to_string()));
            QueryOutcome {
                deck: None,
                narration,
                raw_fallback: None,
            }
        }
        ExtractionResult::NotFound => QueryOutcome {
            deck: None,
            narration: narration::collect(events, &config.coordinator_author, false),
            raw_fallback: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use futures::stream;
    use pretty_assertions::assert_eq;

    fn config() -> PipelineConfig {
        PipelineConfig::new()
    }

    fn deck_body() -> String {
        let payload = r#"<Slides>[{\"id\":\"s1\",\"title\":\"Intro\",\"html\":\"<html></html>\"}]</Slides>"#;
        format!(
            r#"{{"events":[
                {{"author":"presentation_agent","id":"e1","content":{{"parts":[
                    {{"functionResponse":{{"response":{{"result":"{payload}"}}}}}}
                ]}}}},
                {{"author":"coordinator","id":"e2","content":{{"parts":[{{"text":"Here is your deck"}}]}}}}
            ]}}"#
        )
    }

    #[test]
    fn test_deck_and_narration_together() {
        let outcome = process(&deck_body(), &config());
        let deck = outcome.deck.expect("deck extracted");
        assert_eq!(deck.len(), 1);
        assert_eq!(outcome.narration.as_deref(), Some("Here is your deck"));
        assert_eq!(outcome.raw_fallback, None);
    }

    #[test]
    fn test_unrecognized_envelope_falls_back_to_raw_text() {
        let outcome = process("Sorry, something went wrong upstream.", &config());
        assert_eq!(outcome.deck, None);
        assert_eq!(outcome.narration, None);
        assert_eq!(
            outcome.raw_fallback.as_deref(),
            Some("Sorry, something went wrong upstream.")
        );
    }

    #[test]
    fn test_unrecognized_empty_body_yields_nothing() {
        let outcome = process("   ", &config());
        assert_eq!(outcome, QueryOutcome::default());
    }

    #[test]
    fn test_tagged_but_unparseable_surfaces_notice() {
        let body = r#"{"events":[
            {"author":"presentation_agent","id":"e1","content":{"parts":[
                {"functionResponse":{"response":{"result":"<Slides>[{\"id\": broken"}}}
            ]}}
        ]}"#;
        let outcome = process(body, &config());
        assert_eq!(outcome.deck, None);
        assert_eq!(outcome.narration.as_deref(), Some(SLIDES_UNRECOVERED_NOTICE));
    }

    #[test]
    fn test_tagged_but_unparseable_prefers_coordinator_text() {
        let body = r#"{"events":[
            {"author":"presentation_agent","id":"e1","content":{"parts":[
                {"functionResponse":{"response":{"result":"<Slides>[{\"id\": broken"}}}
            ]}},
            {"author":"coordinator","id":"e2","content":{"parts":[{"text":"The deck is on its way"}]}}
        ]}"#;
        let outcome = process(body, &config());
        assert_eq!(outcome.narration.as_deref(), Some("The deck is on its way"));
    }

    #[test]
    fn test_narration_without_deck() {
        let body = r#"{"events":[
            {"author":"coordinator","id":"e1","content":{"parts":[{"text":"Still researching"}]}}
        ]}"#;
        let outcome = process(body, &config());
        assert_eq!(outcome.deck, None);
        assert_eq!(outcome.narration.as_deref(), Some("Still researching"));
    }

    #[tokio::test]
    async fn test_run_propagates_stream_errors() {
        let chunks: Vec<Result<Bytes, StreamError>> = vec![
            Ok(Bytes::from_static(b"{")),
            Err(StreamError::read("connection reset")),
        ];
        let result = run(stream::iter(chunks), &config()).await;
        assert!(matches!(result, Err(StreamError::Read(_))));
    }

    #[tokio::test]
    async fn test_run_end_to_end() {
        let body = deck_body();
        let chunks: Vec<Result<Bytes, StreamError>> = body
            .as_bytes()
            .chunks(7)
            .map(|c| Ok(Bytes::copy_from_slice(c)))
            .collect();
        let outcome = run(stream::iter(chunks), &config()).await.unwrap();
        assert!(outcome.deck.is_some());
        assert_eq!(outcome.narration.as_deref(), Some("Here is your deck"));
    }
}
