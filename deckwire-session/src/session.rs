//! Session display state.
//!
//! A [`Session`] owns everything the presentation layer reads: the
//! append-only transcript and the current slide deck. The deck is a single
//! replaceable cell — a new deck swaps in wholesale, and a query that
//! produces no deck leaves the existing one untouched. One query is in
//! flight at a time; preventing double submission is the caller's job
//! (`submit` takes `&mut self`, so a second in-flight query is not
//! representable without external cloning).

use tracing::{info, warn};

use deckwire_core::{SlideDeck, Transcript};

use crate::config::PipelineConfig;
use crate::error::SessionError;
use crate::pipeline::{self, QueryOutcome};
use crate::request::QueryRequest;
use crate::transport::QueryTransport;

/// One chat session: an opaque backend id, a transcript, and a deck cell.
#[derive(Debug)]
pub struct Session<T> {
    id: String,
    transport: T,
    config: PipelineConfig,
    transcript: Transcript,
    deck: Option<SlideDeck>,
}

impl<T> Session<T> {
    /// Create a session around a bootstrap-issued id and a transport.
    pub fn new(id: impl Into<String>, transport: T) -> Self {
        Self {
            id: id.into(),
            transport,
            config: PipelineConfig::default(),
            transcript: Transcript::new(),
            deck: None,
        }
    }

    /// Replace the pipeline configuration.
    #[must_use]
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the transcript with an assistant greeting.
    #[must_use]
    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.transcript.push_assistant(greeting);
        self
    }

    /// The opaque session id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The current slide deck, if one has been extracted.
    pub fn deck(&self) -> Option<&SlideDeck> {
        self.deck.as_ref()
    }

    /// The chat transcript.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }
}

impl<T: QueryTransport> Session<T> {
    /// Submit one user prompt and apply the query outcome.
    ///
    /// The prompt is appended to the transcript immediately; the outcome —
    /// deck replacement and assistant message — is applied as one atomic
    /// update after the whole pipeline completes. On error, no deck or
    /// narration update occurs.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when submission or stream accumulation
    /// fails. The failure is fatal to this query only.
    pub async fn submit(&mut self, prompt: impl Into<String>) -> Result<(), SessionError> {
        let prompt = prompt.into();
        self.transcript.push_user(prompt.clone());

        let request = QueryRequest::new(&self.config, &self.id, prompt);
        let stream = match self.transport.submit(request).await {
            Ok(stream) => stream,
            Err(err) => {
                warn!(%err, session = %self.id, "query submission failed");
                return Err(err.into());
            }
        };

        let outcome = pipeline::run(stream, &self.config).await?;
        self.apply(outcome);
        Ok(())
    }

    // Both halves of the outcome land together; no reader of this session
    // ever sees a deck update without its transcript entry or vice versa.
    fn apply(&mut self, outcome: QueryOutcome) {
        if let Some(deck) = outcome.deck {
            info!(session = %self.id, slides = deck.len(), "replacing slide deck");
            self.deck = Some(deck);
        }
        if let Some(text) = outcome.narration.or(outcome.raw_fallback) {
            self.transcript.push_assistant(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::ReplayTransport;
    use deckwire_core::Role;
    use pretty_assertions::assert_eq;

    fn deck_response(narration: &str, slide_ids: &[&str]) -> String {
        let slides: Vec<String> = slide_ids
            .iter()
            .map(|id| format!(r#"{{\"id\":\"{id}\",\"title\":\"T\",\"html\":\"<html></html>\"}}"#))
            .collect();
        let payload = format!("<Slides>[{}]</Slides>", slides.join(","));
        format!(
            r#"{{"events":[
                {{"author":"presentation_agent","id":"e1","content":{{"parts":[
                    {{"functionResponse":{{"response":{{"result":"{payload}"}}}}}}
                ]}}}},
                {{"author":"coordinator","id":"e2","content":{{"parts":[{{"text":"{narration}"}}]}}}}
            ]}}"#
        )
    }

    #[tokio::test]
    async fn test_deck_replacement_and_transcript_order() {
        let transport = ReplayTransport::new()
            .with_response(deck_response("Here is your deck", &["s1", "s2"]))
            .with_response(deck_response("Updated version", &["s1", "s2", "s3"]));
        let mut session = Session::new("sess-1", transport);

        session.submit("Pythagorean Theorem").await.unwrap();
        assert_eq!(session.deck().unwrap().len(), 2);

        session.submit("Add a proof slide").await.unwrap();
        // The first deck is fully discarded, never merged.
        let deck = session.deck().unwrap();
        assert_eq!(deck.len(), 3);

        let messages = session.transcript().messages();
        assert_eq!(messages.len(), 4);
        let summary: Vec<(Role, &str)> = messages
            .iter()
            .map(|m| (m.role, m.content.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (Role::User, "Pythagorean Theorem"),
                (Role::Assistant, "Here is your deck"),
                (Role::User, "Add a proof slide"),
                (Role::Assistant, "Updated version"),
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_query_leaves_deck_untouched() {
        let transport = ReplayTransport::new()
            .with_response(deck_response("Here is your deck", &["s1"]));
        let mut session = Session::new("sess-1", transport);
        session.submit("topic").await.unwrap();
        let before = session.deck().cloned();

        // The replay transport is exhausted: the next submission fails.
        let err = session.submit("another topic").await.unwrap_err();
        assert!(matches!(err, SessionError::Transport(_)));
        assert_eq!(session.deck().cloned(), before);
        // Only the user message of the failed query was appended.
        assert_eq!(session.transcript().last().unwrap().content, "another topic");
        assert_eq!(session.transcript().last().unwrap().role, Role::User);
    }

    #[tokio::test]
    async fn test_unrecognized_body_shows_raw_text() {
        let transport =
            ReplayTransport::new().with_response("The backend had nothing structured to say.");
        let mut session = Session::new("sess-1", transport);
        session.submit("topic").await.unwrap();
        assert!(session.deck().is_none());
        assert_eq!(
            session.transcript().last().unwrap().content,
            "The backend had nothing structured to say."
        );
    }

    #[tokio::test]
    async fn test_query_without_deck_keeps_previous_deck() {
        let transport = ReplayTransport::new()
            .with_response(deck_response("Here is your deck", &["s1", "s2"]))
            .with_response(
                r#"{"events":[{"author":"coordinator","id":"e1","content":{"parts":[{"text":"No new deck"}]}}]}"#,
            );
        let mut session = Session::new("sess-1", transport);
        session.submit("topic").await.unwrap();
        session.submit("just chat").await.unwrap();
        assert_eq!(session.deck().unwrap().len(), 2);
        assert_eq!(session.transcript().last().unwrap().content, "No new deck");
    }

    #[test]
    fn test_greeting_seeds_transcript() {
        let session = Session::new("sess-1", ReplayTransport::new())
            .with_greeting("Hello! Give me a topic.");
        let messages = session.transcript().messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, Role::Assistant);
    }
}
