use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use super::json_response;

/// Every failure a request can end in. Each maps to a fixed status and error code.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    #[error("session name is empty or contains disallowed characters")]
    InvalidName,

    #[error("no such route or session")]
    NotFound,

    #[error("tmux could not create the session")]
    CreateFailed,
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl ApiError {
    pub fn status(self) -> StatusCode {
        match self {
            ApiError::InvalidName => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::CreateFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Value of the `error` key on the wire
    pub fn code(self) -> &'static str {
        match self {
            ApiError::InvalidName => "invalid_name",
            ApiError::NotFound => "not_found",
            ApiError::CreateFailed => "create_failed",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        json_response(self.status(), &ErrorBody { error: self.code() })
    }
}
