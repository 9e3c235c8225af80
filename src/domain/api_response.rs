use serde::{Deserialize, Serialize};

/// Envelope returned by every story mutation endpoint.
///
/// `story_id` is only populated by a successful create.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub msg: Option<String>,
    #[serde(rename = "storyId")]
    pub story_id: Option<String>,
}

impl ApiResponse {
    pub fn message(&self) -> Option<&str> {
        self.msg.as_deref()
    }
}
