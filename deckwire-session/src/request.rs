//! The query request body.
//!
//! The backend's run endpoint accepts one user message per query, addressed
//! by application, user, and session. The session id is an opaque string
//! handed out by the external bootstrap collaborator; it is attached
//! unmodified and never validated here.

use serde::{Deserialize, Serialize};

use crate::config::PipelineConfig;

/// One query request, serialized as the run endpoint's body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Application name.
    pub app_name: String,
    /// User id.
    pub user_id: String,
    /// Opaque session identifier.
    pub session_id: String,
    /// The submitted user message.
    pub new_message: NewMessage,
}

/// The user message inside a query request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMessage {
    /// Always `"user"` for submitted prompts.
    pub role: String,
    /// Message parts; a single text part per query.
    pub parts: Vec<RequestPart>,
}

/// One part of the submitted message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestPart {
    /// The prompt text.
    pub text: String,
}

impl QueryRequest {
    /// Build the request for one submitted prompt.
    pub fn new(
        config: &PipelineConfig,
        session_id: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            app_name: config.app_name.clone(),
            user_id: config.user_id.clone(),
            session_id: session_id.into(),
            new_message: NewMessage {
                role: "user".to_string(),
                parts: vec![RequestPart {
                    text: prompt.into(),
                }],
            },
        }
    }

    /// The prompt text carried by this request.
    pub fn prompt(&self) -> &str {
        self.new_message
            .parts
            .first()
            .map(|part| part.text.as_str())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_body_shape() {
        let config = PipelineConfig::new().with_user_id("u_123");
        let request = QueryRequest::new(&config, "sess-1", "Pythagorean Theorem");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "app_name": "deck_agent",
                "user_id": "u_123",
                "session_id": "sess-1",
                "new_message": {
                    "role": "user",
                    "parts": [{"text": "Pythagorean Theorem"}]
                }
            })
        );
    }

    #[test]
    fn test_session_id_is_attached_unmodified() {
        let config = PipelineConfig::new();
        let request = QueryRequest::new(&config, "  weird/id==  ", "topic");
        assert_eq!(request.session_id, "  weird/id==  ");
        assert_eq!(request.prompt(), "topic");
    }
}
