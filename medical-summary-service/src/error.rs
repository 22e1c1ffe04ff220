use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use summary_core::{LlmError, MalformedOutput};
use thiserror::Error;

type ErrorBody = (StatusCode, Json<Value>);

/// Terminal failure of a request, by kind.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing field or unreadable body.
    #[error("{0}")]
    InvalidInput(String),

    /// The model call itself failed.
    #[error(transparent)]
    Upstream(#[from] LlmError),

    /// The model answered but not with JSON.
    #[error(transparent)]
    MalformedOutput(#[from] MalformedOutput),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) | ApiError::MalformedOutput(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

fn bad_request_error(message: &str) -> ErrorBody {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

fn internal_error(message: &str) -> ErrorBody {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
}

fn malformed_output_error(output: &MalformedOutput) -> ErrorBody {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": output.to_string(),
            "raw_response": output.raw_response
        })),
    )
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match &self {
            ApiError::InvalidInput(message) => bad_request_error(message),
            ApiError::Upstream(e) => internal_error(&e.to_string()),
            ApiError::MalformedOutput(output) => malformed_output_error(output),
        };
        body.into_response()
    }
}
