//! Create, edit and delete one story, threading its id through the context.

use super::expectations::{AssertionFailure, expect_message, expect_status};
use super::{ScenarioError, SuiteContext, parse_envelope};
use crate::domain::{Story, StoryId};
use reqwest::StatusCode;

pub const NEW_STORY_TITLE: &str = "New story";
pub const NEW_STORY_DESCRIPTION: &str = "A detailed description of the story.";
pub const EDITED_STORY_TITLE: &str = "Edited Story";
pub const EDITED_STORY_DESCRIPTION: &str = "Updated description.";

pub const CREATED_MESSAGE: &str = "Successfully created!";
pub const EDITED_MESSAGE: &str = "Successfully edited";
pub const DELETED_MESSAGE: &str = "Deleted successfully!";

const NO_STORY_CREATED: &str = "No story has been created in this run.";

#[tracing::instrument(name = "Create story with required fields", skip_all)]
pub async fn create_story_with_required_fields(
    context: &mut SuiteContext,
) -> Result<(), ScenarioError> {
    let story = Story::new(NEW_STORY_TITLE, NEW_STORY_DESCRIPTION);
    let response = context.client().create_story(&story).await?;
    expect_status(&response, StatusCode::CREATED)?;
    let envelope = parse_envelope(&response)?;

    // Stored before the message check on purpose, not after all assertions pass:
    // the delete scenario must still be able to remove the remote story.
    let story_id = envelope
        .story_id
        .clone()
        .and_then(|raw| StoryId::parse(raw).ok());
    if let Some(story_id) = &story_id {
        tracing::info!(%story_id, "Story created");
        context.record_created(story_id.clone());
    }

    expect_message(&envelope, CREATED_MESSAGE)?;
    story_id.ok_or(AssertionFailure::MissingStoryId)?;
    Ok(())
}

#[tracing::instrument(name = "Edit existing story", skip_all)]
pub async fn edit_existing_story(context: &mut SuiteContext) -> Result<(), ScenarioError> {
    let story_id = context
        .lifecycle()
        .story_id()
        .cloned()
        .ok_or(ScenarioError::Precondition(NO_STORY_CREATED))?;
    let story = Story::new(EDITED_STORY_TITLE, EDITED_STORY_DESCRIPTION);
    let response = context.client().edit_story(&story_id, &story).await?;
    expect_status(&response, StatusCode::OK)?;
    let envelope = parse_envelope(&response)?;
    expect_message(&envelope, EDITED_MESSAGE)?;
    context.record_edited();
    Ok(())
}

#[tracing::instrument(name = "Delete existing story", skip_all)]
pub async fn delete_existing_story(context: &mut SuiteContext) -> Result<(), ScenarioError> {
    let story_id = context
        .lifecycle()
        .story_id()
        .cloned()
        .ok_or(ScenarioError::Precondition(NO_STORY_CREATED))?;
    let response = context.client().delete_story(&story_id).await?;
    expect_status(&response, StatusCode::OK)?;
    let envelope = parse_envelope(&response)?;
    expect_message(&envelope, DELETED_MESSAGE)?;
    context.record_deleted();
    Ok(())
}
