use crate::authentication::{AuthError, Credentials, authenticate};
use crate::configuration::Settings;
use crate::domain::StoryId;
use crate::story_client::StorySpoilerClient;
use crate::utils::error_chain_fmt;

/// Where the story created by this run currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StoryLifecycle {
    #[default]
    NoStory,
    StoryCreated(StoryId),
    StoryEdited(StoryId),
    StoryDeleted,
}

impl StoryLifecycle {
    /// The id of a story that should still exist on the server.
    pub fn story_id(&self) -> Option<&StoryId> {
        match self {
            StoryLifecycle::StoryCreated(id) | StoryLifecycle::StoryEdited(id) => Some(id),
            StoryLifecycle::NoStory | StoryLifecycle::StoryDeleted => None,
        }
    }
}

#[derive(thiserror::Error)]
pub enum SetupError {
    #[error("Failed to build the HTTP client.")]
    HttpClient(#[source] reqwest::Error),
    #[error("Invalid fixture story id: {0}")]
    InvalidFixture(String),
    #[error(transparent)]
    Authentication(#[from] AuthError),
}

impl std::fmt::Debug for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// State shared by the ordered scenarios of one suite run.
pub struct SuiteContext {
    client: StorySpoilerClient,
    credentials: Credentials,
    non_existent_story_id: StoryId,
    lifecycle: StoryLifecycle,
}

impl SuiteContext {
    pub fn new(
        client: StorySpoilerClient,
        credentials: Credentials,
        non_existent_story_id: StoryId,
    ) -> Self {
        Self {
            client,
            credentials,
            non_existent_story_id,
            lifecycle: StoryLifecycle::NoStory,
        }
    }

    /// Authenticate once and build the shared authorized client.
    #[tracing::instrument(name = "Setting up suite context", skip_all)]
    pub async fn build(settings: &Settings) -> Result<Self, SetupError> {
        let non_existent_story_id =
            StoryId::parse(settings.fixtures.non_existent_story_id.clone())
                .map_err(SetupError::InvalidFixture)?;
        let http_client = settings.api.http_client().map_err(SetupError::HttpClient)?;
        let credentials = settings.credentials.credentials();
        let access_token =
            authenticate(&http_client, &settings.api.base_url, &credentials).await?;
        let client =
            StorySpoilerClient::new(settings.api.base_url.clone(), http_client, access_token);
        Ok(Self::new(client, credentials, non_existent_story_id))
    }

    pub fn client(&self) -> &StorySpoilerClient {
        &self.client
    }

    pub fn lifecycle(&self) -> &StoryLifecycle {
        &self.lifecycle
    }

    pub fn non_existent_story_id(&self) -> &StoryId {
        &self.non_existent_story_id
    }

    /// Log in again and return a client carrying the fresh token.
    /// The shared client keeps its original token.
    pub async fn reauthenticate(&self) -> Result<StorySpoilerClient, AuthError> {
        let access_token = authenticate(
            self.client.http_client(),
            self.client.base_url(),
            &self.credentials,
        )
        .await?;
        Ok(self.client.with_token(access_token))
    }

    pub fn record_created(&mut self, story_id: StoryId) {
        self.lifecycle = StoryLifecycle::StoryCreated(story_id);
    }

    pub fn record_edited(&mut self) {
        let story_id = match &self.lifecycle {
            StoryLifecycle::StoryCreated(id) | StoryLifecycle::StoryEdited(id) => id.clone(),
            StoryLifecycle::NoStory | StoryLifecycle::StoryDeleted => return,
        };
        self.lifecycle = StoryLifecycle::StoryEdited(story_id);
    }

    pub fn record_deleted(&mut self) {
        self.lifecycle = StoryLifecycle::StoryDeleted;
    }
}
