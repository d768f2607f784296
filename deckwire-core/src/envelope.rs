//! Response envelope decoding.
//!
//! The backend wraps its event sequence in one of several envelope shapes
//! depending on which code path served the request. Rather than probing for
//! fields ad hoc, the shapes are modeled as an explicit tagged union and
//! tried in a fixed priority order, which keeps the decode step total: every
//! input maps to exactly one variant, and anything else is
//! [`Envelope::Unrecognized`] — a normal outcome, not an error.

use serde_json::Value as JsonValue;
use tracing::debug;

use crate::events::AgentEvent;

/// Outer wrapper around a backend response's event sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// `{"events": [...]}` — the common shape.
    EventsArray(Vec<AgentEvent>),
    /// `[...]` — the events themselves, with no wrapper.
    BareArray(Vec<AgentEvent>),
    /// `{"data": {"events": [...]}}` — the shape some proxies produce.
    NestedData(Vec<AgentEvent>),
    /// Not JSON, or JSON that matches none of the known shapes.
    Unrecognized,
}

impl Envelope {
    /// Decode a response body into an envelope.
    ///
    /// Shapes are tried in priority order: a top-level `events` array wins
    /// over a bare array, which wins over `data.events`. First match wins;
    /// shapes are never merged.
    pub fn decode(text: &str) -> Self {
        let value: JsonValue = match serde_json::from_str(text) {
            Ok(value) => value,
            Err(err) => {
                debug!(%err, "response body is not structured; treating as raw text");
                return Self::Unrecognized;
            }
        };

        if let Some(events) = value.get("events").and_then(JsonValue::as_array) {
            return Self::EventsArray(deserialize_events(events));
        }
        if let Some(events) = value.as_array() {
            return Self::BareArray(deserialize_events(events));
        }
        if let Some(events) = value
            .get("data")
            .and_then(|data| data.get("events"))
            .and_then(JsonValue::as_array)
        {
            return Self::NestedData(deserialize_events(events));
        }

        debug!("structured response matched no known envelope shape");
        Self::Unrecognized
    }

    /// The decoded events, if this envelope carries any.
    pub fn events(&self) -> Option<&[AgentEvent]> {
        match self {
            Self::EventsArray(events) | Self::BareArray(events) | Self::NestedData(events) => {
                Some(events)
            }
            Self::Unrecognized => None,
        }
    }

    /// Whether decoding fell through to the raw-text fallback.
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, Self::Unrecognized)
    }
}

/// Deserialize each array element as an event, skipping elements that do not
/// match the agent event shape instead of rejecting the whole envelope.
fn deserialize_events(values: &[JsonValue]) -> Vec<AgentEvent> {
    values
        .iter()
        .filter_map(|value| match serde_json::from_value(value.clone()) {
            Ok(event) => Some(event),
            Err(err) => {
                debug!(%err, "skipping array element that is not an agent event");
                None
            }
        })
        .collect()
}
