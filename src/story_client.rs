use crate::domain::{ApiResponse, Story, StoryId};
use reqwest::{Client, Method, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;

pub const CREATE_PATH: &str = "/api/Story/Create";
pub const EDIT_PATH: &str = "/api/Story/Edit";
pub const DELETE_PATH: &str = "/api/Story/Delete";
pub const STORY_ID_QUERY_KEY: &str = "storyId";

/// Authorized client for the story endpoints.
///
/// Every request carries `Authorization: Bearer <token>`. Cloning is cheap:
/// the underlying `reqwest::Client` shares its connection pool.
#[derive(Clone, Debug)]
pub struct StorySpoilerClient {
    base_url: String,
    http_client: Client,
    access_token: Secret<String>,
}

/// Status code and raw body of a single call.
#[derive(Debug, Clone)]
pub struct ApiCallResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiCallResponse {
    pub fn envelope(&self) -> Result<ApiResponse, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    pub fn body_contains(&self, needle: &str) -> bool {
        self.body.contains(needle)
    }
}

impl StorySpoilerClient {
    pub fn new(base_url: String, http_client: Client, access_token: Secret<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
            access_token,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn http_client(&self) -> &Client {
        &self.http_client
    }

    /// Same connection pool, different bearer token.
    pub fn with_token(&self, access_token: Secret<String>) -> Self {
        Self {
            access_token,
            ..self.clone()
        }
    }

    #[tracing::instrument(
        name = "Calling Story Spoiler API",
        skip(self, body),
        fields(status = tracing::field::Empty)
    )]
    pub async fn execute<Body>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&Body>,
    ) -> Result<ApiCallResponse, reqwest::Error>
    where
        Body: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self
            .http_client
            .request(method, &url)
            .bearer_auth(self.access_token.expose_secret());
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let response = builder.send().await.map_err(|e| {
            tracing::error!("Failed to reach the Story Spoiler API: {:?}", e);
            e
        })?;
        let status = response.status();
        tracing::Span::current().record("status", tracing::field::display(status.as_u16()));
        let body = response.text().await?;
        Ok(ApiCallResponse { status, body })
    }

    pub async fn create_story(&self, story: &Story) -> Result<ApiCallResponse, reqwest::Error> {
        self.execute(Method::POST, CREATE_PATH, &[], Some(story)).await
    }

    pub async fn edit_story<Body>(
        &self,
        story_id: &StoryId,
        body: &Body,
    ) -> Result<ApiCallResponse, reqwest::Error>
    where
        Body: Serialize + ?Sized,
    {
        self.execute(
            Method::PUT,
            EDIT_PATH,
            &[(STORY_ID_QUERY_KEY, story_id.as_ref())],
            Some(body),
        )
        .await
    }

    pub async fn delete_story(
        &self,
        story_id: &StoryId,
    ) -> Result<ApiCallResponse, reqwest::Error> {
        self.execute::<()>(
            Method::DELETE,
            DELETE_PATH,
            &[(STORY_ID_QUERY_KEY, story_id.as_ref())],
            None,
        )
        .await
    }
}
