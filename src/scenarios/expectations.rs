use crate::domain::ApiResponse;
use crate::story_client::ApiCallResponse;
use reqwest::StatusCode;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum AssertionFailure {
    #[error("Expected status {expected}, got {actual}.")]
    Status {
        expected: StatusCode,
        actual: StatusCode,
    },
    #[error("Expected message {expected:?}, got {actual:?}.")]
    Message {
        expected: &'static str,
        actual: Option<String>,
    },
    #[error("Expected the body to contain {expected:?}, got {body:?}.")]
    BodyContent { expected: &'static str, body: String },
    #[error("The create response carries no usable story id.")]
    MissingStoryId,
}

pub fn expect_status(
    response: &ApiCallResponse,
    expected: StatusCode,
) -> Result<(), AssertionFailure> {
    if response.status == expected {
        Ok(())
    } else {
        Err(AssertionFailure::Status {
            expected,
            actual: response.status,
        })
    }
}

pub fn expect_message(
    envelope: &ApiResponse,
    expected: &'static str,
) -> Result<(), AssertionFailure> {
    if envelope.message() == Some(expected) {
        Ok(())
    } else {
        Err(AssertionFailure::Message {
            expected,
            actual: envelope.msg.clone(),
        })
    }
}

pub fn expect_body_contains(
    response: &ApiCallResponse,
    expected: &'static str,
) -> Result<(), AssertionFailure> {
    if response.body_contains(expected) {
        Ok(())
    } else {
        Err(AssertionFailure::BodyContent {
            expected,
            body: response.body.clone(),
        })
    }
}
