//! Narration aggregation.
//!
//! The coordinator is the one author whose text parts are meant for the
//! user; everything else is inter-agent chatter. Aggregation walks the
//! events in order and keeps the coordinator's last text part — later events
//! overwrite earlier ones. When the coordinator said nothing but a deck was
//! produced, the first text part of the last event stands in as an
//! acknowledgement.

use deckwire_core::AgentEvent;

/// Default author whose text parts constitute user-facing narration.
pub const DEFAULT_COORDINATOR_AUTHOR: &str = "coordinator";

/// The last text part authored by the coordinator, if any.
pub fn coordinator_text(events: &[AgentEvent], author: &str) -> Option<String> {
    let mut narration = None;
    for event in events {
        if event.author != author {
            continue;
        }
        for text in event.texts() {
            narration = Some(text.to_string());
        }
    }
    narration
}

/// The first text part of the last event, if present.
pub fn acknowledgement(events: &[AgentEvent]) -> Option<String> {
    events.last()?.texts().next().map(str::to_string)
}

/// Select the narration to display for one query.
///
/// Coordinator text wins; the acknowledgement fallback applies only when a
/// deck was extracted. Returns `None` when neither rule produces text.
pub fn collect(events: &[AgentEvent], author: &str, deck_extracted: bool) -> Option<String> {
    coordinator_text(events, author)
        .or_else(|| deck_extracted.then(|| acknowledgement(events)).flatten())
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckwire_core::{EventContent, Part};
    use pretty_assertions::assert_eq;

    fn text_event(author: &str, texts: &[&str]) -> AgentEvent {
        AgentEvent {
            author: author.to_string(),
            id: String::new(),
            content: Some(EventContent {
                parts: texts
                    .iter()
                    .map(|t| Part::Text {
                        text: (*t).to_string(),
                    })
                    .collect(),
            }),
        }
    }

    #[test]
    fn test_single_coordinator_text() {
        let events = vec![text_event("coordinator", &["Hello"])];
        assert_eq!(
            collect(&events, DEFAULT_COORDINATOR_AUTHOR, false),
            Some("Hello".to_string())
        );
    }

    #[test]
    fn test_last_coordinator_text_wins() {
        let events = vec![
            text_event("coordinator", &["Researching your topic..."]),
            text_event("research_agent", &["raw findings"]),
            text_event("coordinator", &["Here is your deck"]),
        ];
        assert_eq!(
            coordinator_text(&events, DEFAULT_COORDINATOR_AUTHOR),
            Some("Here is your deck".to_string())
        );
    }

    #[test]
    fn test_last_part_wins_within_one_event() {
        let events = vec![text_event("coordinator", &["first", "second"])];
        assert_eq!(
            coordinator_text(&events, DEFAULT_COORDINATOR_AUTHOR),
            Some("second".to_string())
        );
    }

    #[test]
    fn test_other_authors_are_ignored() {
        let events = vec![text_event("research_agent", &["not for the user"])];
        assert_eq!(coordinator_text(&events, DEFAULT_COORDINATOR_AUTHOR), None);
    }

    #[test]
    fn test_acknowledgement_requires_deck() {
        let events = vec![text_event("presentation_agent", &["deck attached"])];
        assert_eq!(collect(&events, DEFAULT_COORDINATOR_AUTHOR, false), None);
        assert_eq!(
            collect(&events, DEFAULT_COORDINATOR_AUTHOR, true),
            Some("deck attached".to_string())
        );
    }

    #[test]
    fn test_acknowledgement_takes_first_text_of_last_event() {
        let events = vec![
            text_event("research_agent", &["early"]),
            text_event("presentation_agent", &["ack", "extra"]),
        ];
        assert_eq!(acknowledgement(&events), Some("ack".to_string()));
    }

    #[test]
    fn test_no_text_anywhere() {
        let events = vec![AgentEvent::default()];
        assert_eq!(collect(&events, DEFAULT_COORDINATOR_AUTHOR, true), None);
    }
}
