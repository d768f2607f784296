//! Pipeline configuration.

use deckwire_extract::DEFAULT_COORDINATOR_AUTHOR;

/// Default application name attached to query requests.
pub const DEFAULT_APP_NAME: &str = "deck_agent";

/// Default user id attached to query requests.
pub const DEFAULT_USER_ID: &str = "local_user";

/// Configuration shared by the pipeline and the query request builder.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Author whose text parts constitute user-facing narration.
    pub coordinator_author: String,
    /// Application name sent with each query request.
    pub app_name: String,
    /// User id sent with each query request.
    pub user_id: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            coordinator_author: DEFAULT_COORDINATOR_AUTHOR.to_string(),
            app_name: DEFAULT_APP_NAME.to_string(),
            user_id: DEFAULT_USER_ID.to_string(),
        }
    }
}

impl PipelineConfig {
    /// Create a configuration with the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the coordinator author.
    #[must_use]
    pub fn with_coordinator_author(mut self, author: impl Into<String>) -> Self {
        self.coordinator_author = author.into();
        self
    }

    /// Set the application name.
    #[must_use]
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    /// Set the user id.
    #[must_use]
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }
}
