use crate::utils::error_chain_fmt;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};

pub const AUTHENTICATION_PATH: &str = "/api/User/Authentication";

#[derive(thiserror::Error)]
pub enum AuthError {
    #[error("Authentication failed: {status}, {body}")]
    Rejected { status: StatusCode, body: String },
    #[error("The access token is missing or empty.")]
    MissingToken,
    #[error("The authentication response is not valid JSON.")]
    MalformedResponse(#[source] serde_json::Error),
    #[error("Failed to reach the authentication endpoint.")]
    Transport(#[from] reqwest::Error),
}

impl std::fmt::Debug for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: Secret<String>,
}

#[derive(serde::Serialize)]
struct AuthenticationRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthenticationResponse {
    access_token: Option<serde_json::Value>,
}

/// Log in against the Story Spoiler API and return the bearer token.
///
/// Only a 200 counts as success; any other status is reported together with
/// the raw body so the caller can see why the account was refused.
#[tracing::instrument(
    name = "Acquiring access token",
    skip(http_client, credentials),
    fields(username = %credentials.username)
)]
pub async fn authenticate(
    http_client: &Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<Secret<String>, AuthError> {
    let url = format!("{}{}", base_url.trim_end_matches('/'), AUTHENTICATION_PATH);
    let request_body = AuthenticationRequest {
        username: &credentials.username,
        password: credentials.password.expose_secret(),
    };
    let response = http_client.post(&url).json(&request_body).send().await?;
    let status = response.status();
    let body = response.text().await?;

    if status != StatusCode::OK {
        tracing::error!(%status, "Authentication was rejected");
        return Err(AuthError::Rejected { status, body });
    }

    let parsed: AuthenticationResponse =
        serde_json::from_str(&body).map_err(AuthError::MalformedResponse)?;
    match parsed.access_token {
        Some(serde_json::Value::String(token)) if !token.trim().is_empty() => {
            Ok(Secret::new(token))
        }
        _ => Err(AuthError::MissingToken),
    }
}
