//! Requests the API must refuse.

use super::expectations::{expect_body_contains, expect_status};
use super::{ScenarioError, SuiteContext};
use crate::domain::{ApiResponse, Story};
use crate::story_client::EDIT_PATH;
use reqwest::{Method, StatusCode};

pub const NO_SPOILERS_MESSAGE: &str = "No spoilers...";
pub const UNABLE_TO_DELETE_MESSAGE: &str = "Unable to delete this story spoiler!";

// The long-standing edit-not-found check addresses the id with a capitalised key.
pub const NOT_FOUND_EDIT_QUERY_KEY: &str = "StoryId";

#[tracing::instrument(name = "Create story without required fields", skip_all)]
pub async fn create_story_without_required_fields(
    context: &mut SuiteContext,
) -> Result<(), ScenarioError> {
    let story = Story::new("", "");
    let response = context.client().create_story(&story).await?;
    expect_status(&response, StatusCode::BAD_REQUEST)?;
    Ok(())
}

/// Sends an envelope-shaped body rather than a story, matching the
/// established contract check for this case.
#[tracing::instrument(name = "Edit non-existing story", skip_all)]
pub async fn edit_non_existing_story(context: &mut SuiteContext) -> Result<(), ScenarioError> {
    let body = ApiResponse {
        msg: Some("Updated Title".into()),
        story_id: Some("Updated Description".into()),
    };
    let story_id = context.non_existent_story_id();
    let response = context
        .client()
        .execute(
            Method::PUT,
            EDIT_PATH,
            &[(NOT_FOUND_EDIT_QUERY_KEY, story_id.as_ref())],
            Some(&body),
        )
        .await?;
    expect_status(&response, StatusCode::NOT_FOUND)?;
    expect_body_contains(&response, NO_SPOILERS_MESSAGE)?;
    Ok(())
}

#[tracing::instrument(name = "Delete non-existing story", skip_all)]
pub async fn delete_non_existing_story(context: &mut SuiteContext) -> Result<(), ScenarioError> {
    let fresh_client = context.reauthenticate().await?;
    let response = fresh_client
        .delete_story(context.non_existent_story_id())
        .await?;
    expect_status(&response, StatusCode::BAD_REQUEST)?;
    expect_body_contains(&response, UNABLE_TO_DELETE_MESSAGE)?;
    Ok(())
}
