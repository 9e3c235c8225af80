use serde::{Deserialize, Serialize};

/// Request body accepted by the create and edit endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub title: String,
    pub url: Option<String>,
    pub description: String,
}

impl Story {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: None,
            description: description.into(),
        }
    }

    pub fn with_url(self, url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..self
        }
    }
}
