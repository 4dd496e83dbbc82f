//! Endpoint configuration.

use yoga_update::ContentType;

/// Configuration for a collection endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointConfig {
    /// The one content type update bodies are accepted in.
    pub accepted_content_type: ContentType,
}

impl EndpointConfig {
    /// Create a config accepting JSON bodies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept a different content type.
    pub fn with_accepted_content_type(mut self, media_type: impl Into<String>) -> Self {
        self.accepted_content_type = ContentType::new(media_type);
        self
    }
}
