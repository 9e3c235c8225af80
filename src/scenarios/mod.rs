mod context;
mod existing_story;
mod expectations;
mod invalid_input;

pub use context::{SetupError, StoryLifecycle, SuiteContext};
pub use existing_story::{
    CREATED_MESSAGE, DELETED_MESSAGE, EDITED_MESSAGE, EDITED_STORY_DESCRIPTION,
    EDITED_STORY_TITLE, NEW_STORY_DESCRIPTION, NEW_STORY_TITLE, create_story_with_required_fields,
    delete_existing_story, edit_existing_story,
};
pub use expectations::{AssertionFailure, expect_body_contains, expect_message, expect_status};
pub use invalid_input::{
    NO_SPOILERS_MESSAGE, NOT_FOUND_EDIT_QUERY_KEY, UNABLE_TO_DELETE_MESSAGE,
    create_story_without_required_fields, delete_non_existing_story, edit_non_existing_story,
};

use crate::authentication::AuthError;
use crate::domain::ApiResponse;
use crate::story_client::ApiCallResponse;
use crate::utils::error_chain_fmt;

#[derive(thiserror::Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Assertion(#[from] AssertionFailure),
    #[error("Precondition not met: {0}")]
    Precondition(&'static str),
    #[error("Failed to reach the Story Spoiler API.")]
    Transport(#[from] reqwest::Error),
    #[error("The response body is not a valid envelope.")]
    MalformedEnvelope(#[source] serde_json::Error),
    #[error("Failed to re-acquire an access token.")]
    Authentication(#[from] AuthError),
}

impl ScenarioError {
    /// Fatal errors stop the remaining scenarios from running.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ScenarioError::MalformedEnvelope(_) | ScenarioError::Authentication(_)
        )
    }
}

impl std::fmt::Debug for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

fn parse_envelope(response: &ApiCallResponse) -> Result<ApiResponse, ScenarioError> {
    response.envelope().map_err(|e| {
        tracing::error!(body = %response.body, "Failed to parse the response envelope");
        ScenarioError::MalformedEnvelope(e)
    })
}

/// The ordered scenarios of the suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    CreateWithRequiredFields,
    EditExisting,
    DeleteExisting,
    CreateWithoutRequiredFields,
    EditNonExisting,
    DeleteNonExisting,
}

impl Scenario {
    /// Execution order. Edit and delete rely on the id stored by create.
    pub const ALL: [Scenario; 6] = [
        Scenario::CreateWithRequiredFields,
        Scenario::EditExisting,
        Scenario::DeleteExisting,
        Scenario::CreateWithoutRequiredFields,
        Scenario::EditNonExisting,
        Scenario::DeleteNonExisting,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::CreateWithRequiredFields => "create_story_with_required_fields",
            Scenario::EditExisting => "edit_existing_story",
            Scenario::DeleteExisting => "delete_existing_story",
            Scenario::CreateWithoutRequiredFields => "create_story_without_required_fields",
            Scenario::EditNonExisting => "edit_non_existing_story",
            Scenario::DeleteNonExisting => "delete_non_existing_story",
        }
    }

    pub async fn run(self, context: &mut SuiteContext) -> Result<(), ScenarioError> {
        match self {
            Scenario::CreateWithRequiredFields => create_story_with_required_fields(context).await,
            Scenario::EditExisting => edit_existing_story(context).await,
            Scenario::DeleteExisting => delete_existing_story(context).await,
            Scenario::CreateWithoutRequiredFields => {
                create_story_without_required_fields(context).await
            }
            Scenario::EditNonExisting => edit_non_existing_story(context).await,
            Scenario::DeleteNonExisting => delete_non_existing_story(context).await,
        }
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
