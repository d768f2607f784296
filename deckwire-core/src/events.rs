//! Agent event wire types.
//!
//! One backend response decodes into an ordered sequence of [`AgentEvent`]s,
//! each attributable to an author and carrying one or more [`Part`]s. The
//! types here are deliberately lenient: fields the backend omits default to
//! empty, and part shapes it invents are preserved as [`Part::Other`] instead
//! of failing the whole event.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// One unit of backend-produced output attributable to an author.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentEvent {
    /// Author/role that produced this event (e.g. `"coordinator"`).
    #[serde(default)]
    pub author: String,
    /// Backend-assigned event id.
    #[serde(default)]
    pub id: String,
    /// Event payload; absent for pure lifecycle events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<EventContent>,
}

impl AgentEvent {
    /// The parts of this event, empty when there is no content.
    pub fn parts(&self) -> &[Part] {
        self.content.as_ref().map(|c| c.parts.as_slice()).unwrap_or(&[])
    }

    /// Iterate over the plain text parts of this event.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.parts().iter().filter_map(Part::as_text)
    }

    /// Iterate over the function result strings of this event.
    pub fn function_results(&self) -> impl Iterator<Item = &str> {
        self.parts().iter().filter_map(Part::function_result)
    }
}

/// Payload of an event: an ordered list of parts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventContent {
    /// Parts in emission order.
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One part of an event payload.
///
/// Variant order matters: serde tries them top to bottom, so a part carrying
/// both a `functionResponse` and a `text` key resolves as a function result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// A tool invocation result wrapping an opaque result string.
    FunctionResponse {
        /// The nested response envelope.
        #[serde(rename = "functionResponse", alias = "function_response")]
        function_response: FunctionResponse,
    },
    /// Plain assistant-facing text.
    Text {
        /// The text content.
        text: String,
    },
    /// Any part shape this crate does not model; kept opaque and ignored.
    Other(JsonValue),
}

impl Part {
    /// The text content, if this is a text part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text { text } => Some(text),
            _ => None,
        }
    }

    /// The function result string, if this is a function response part.
    pub fn function_result(&self) -> Option<&str> {
        match self {
            Part::FunctionResponse { function_response } => {
                function_response.response.result.as_deref()
            }
            _ => None,
        }
    }
}

/// The `functionResponse` wrapper of a function result part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionResponse {
    /// The response payload.
    #[serde(default)]
    pub response: FunctionResponsePayload,
}

/// Innermost payload of a function response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionResponsePayload {
    /// The result string produced by the invoked function.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}
