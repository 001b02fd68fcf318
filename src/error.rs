// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorResponse;
use crate::services::anthropic::LlmError;

pub const EMPTY_MESSAGE: &str = "Please enter a message.";
pub const RESPONSE_FAILED: &str = "Response Failed";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("upstream call failed: {0}")]
    Upstream(#[from] LlmError),

    #[error("request handling failed: {0}")]
    Internal(String),
}

impl AppError {
    pub fn empty_message() -> Self {
        AppError::BadRequest(EMPTY_MESSAGE.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            AppError::BadRequest(msg) => msg,
            other => {
                // The cause stays in the log, the caller only ever sees the flat message.
                tracing::error!(error = %other, "Error calling API");
                RESPONSE_FAILED.to_string()
            }
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}
