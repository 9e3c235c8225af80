use crate::common::TRACING;
use fake::Fake;
use fake::faker::internet::en::{Password, Username};
use secrecy::Secret;
use serde_json::json;
use std::sync::LazyLock;
use story_spoiler::authentication::AUTHENTICATION_PATH;
use story_spoiler::configuration::{Settings, get_configuration};
use story_spoiler::scenarios::{
    CREATED_MESSAGE, DELETED_MESSAGE, EDITED_MESSAGE, NO_SPOILERS_MESSAGE,
    NOT_FOUND_EDIT_QUERY_KEY, SuiteContext, UNABLE_TO_DELETE_MESSAGE,
};
use story_spoiler::story_client::{CREATE_PATH, DELETE_PATH, EDIT_PATH, STORY_ID_QUERY_KEY};
use uuid::Uuid;
use wiremock::matchers::{bearer_token, body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ACCESS_TOKEN: &str = "setup-token";
pub const FRESH_ACCESS_TOKEN: &str = "fresh-token";
pub const NON_EXISTENT_STORY_ID: &str = "123";

/// A mock server standing in for the Story Spoiler deployment.
pub struct TestApi {
    pub mock_server: MockServer,
    pub settings: Settings,
    pub story_id: String,
}

impl TestApi {
    /// Context authenticated against the mock server.
    pub async fn context(&self) -> SuiteContext {
        SuiteContext::build(&self.settings)
            .await
            .expect("Failed to build the suite context.")
    }

    /// The first login hands out the setup token, every later login a fresh one.
    pub async fn mount_authentication(&self) {
        Mock::given(method("POST"))
            .and(path(AUTHENTICATION_PATH))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "accessToken": ACCESS_TOKEN })),
            )
            .up_to_n_times(1)
            .with_priority(1)
            .mount(&self.mock_server)
            .await;
        Mock::given(method("POST"))
            .and(path(AUTHENTICATION_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "accessToken": FRESH_ACCESS_TOKEN })),
            )
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mount_create(&self) {
        Mock::given(method("POST"))
            .and(path(CREATE_PATH))
            .and(bearer_token(ACCESS_TOKEN))
            .and(body_partial_json(json!({ "title": "", "description": "" })))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "errors": { "Title": ["The Title field is required."] }
            })))
            .with_priority(1)
            .mount(&self.mock_server)
            .await;
        Mock::given(method("POST"))
            .and(path(CREATE_PATH))
            .and(bearer_token(ACCESS_TOKEN))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "msg": CREATED_MESSAGE,
                "storyId": self.story_id
            })))
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mount_edit(&self) {
        Mock::given(method("PUT"))
            .and(path(EDIT_PATH))
            .and(bearer_token(ACCESS_TOKEN))
            .and(query_param(STORY_ID_QUERY_KEY, self.story_id.as_str()))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "msg": EDITED_MESSAGE })),
            )
            .mount(&self.mock_server)
            .await;
        Mock::given(method("PUT"))
            .and(path(EDIT_PATH))
            .and(bearer_token(ACCESS_TOKEN))
            .and(query_param(NOT_FOUND_EDIT_QUERY_KEY, NON_EXISTENT_STORY_ID))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({ "msg": NO_SPOILERS_MESSAGE })),
            )
            .mount(&self.mock_server)
            .await;
    }

    /// The created story can be deleted once; anything else is refused.
    pub async fn mount_delete(&self) {
        Mock::given(method("DELETE"))
            .and(path(DELETE_PATH))
            .and(bearer_token(ACCESS_TOKEN))
            .and(query_param(STORY_ID_QUERY_KEY, self.story_id.as_str()))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "msg": DELETED_MESSAGE })),
            )
            .up_to_n_times(1)
            .with_priority(1)
            .mount(&self.mock_server)
            .await;
        Mock::given(method("DELETE"))
            .and(path(DELETE_PATH))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(json!({ "msg": UNABLE_TO_DELETE_MESSAGE })),
            )
            .mount(&self.mock_server)
            .await;
    }

    /// Mount the whole contract the suite expects from the real API.
    pub async fn mount_story_spoiler_contract(&self) {
        self.mount_authentication().await;
        self.mount_create().await;
        self.mount_edit().await;
        self.mount_delete().await;
    }

    /// Requests received so far for a given method and path.
    pub async fn received(&self, http_method: &str, request_path: &str) -> Vec<wiremock::Request> {
        self.mock_server
            .received_requests()
            .await
            .unwrap()
            .into_iter()
            .filter(|r| r.method.as_str() == http_method && r.url.path() == request_path)
            .collect()
    }
}

#[tracing::instrument(name = "Spawning mock Story Spoiler API", skip_all)]
pub async fn spawn_api() -> TestApi {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    LazyLock::force(&TRACING);

    let mock_server = MockServer::start().await;

    // Point the configuration at the mock server with throwaway credentials
    let settings = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        c.api.base_url = mock_server.uri();
        c.api.timeout_milliseconds = Some(2_000);
        c.credentials.username = Username().fake();
        c.credentials.password = Secret::new(Password(8..16).fake());
        c.fixtures.non_existent_story_id = NON_EXISTENT_STORY_ID.to_string();
        c
    };

    TestApi {
        mock_server,
        settings,
        story_id: Uuid::new_v4().to_string(),
    }
}
