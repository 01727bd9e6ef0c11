mod error;
mod handlers;

use std::sync::Arc;

use axum::{
    http::{
        header::{CONTENT_LENGTH, CONTENT_TYPE},
        HeaderValue, StatusCode,
    },
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Serialize;

use crate::tmux::TmuxClient;

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Shared per-request state. tmux itself is the only stateful party.
#[derive(Clone)]
pub struct AppState {
    pub tmux: Arc<TmuxClient>,
}

impl AppState {
    pub fn new(tmux: TmuxClient) -> Self {
        Self {
            tmux: Arc::new(tmux),
        }
    }
}

/// Build the HTTP routes.
///
/// No request-tracing layer is installed: requests are not access-logged.
/// `get` would also answer HEAD, so HEAD is routed to not_found explicitly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/sessions",
            get(handlers::list_sessions)
                .head(handlers::not_found)
                .post(handlers::create_session)
                .fallback(handlers::not_found),
        )
        .fallback(handlers::fallback)
        .with_state(state)
}

/// Serialize `body` as UTF-8 JSON with an exact `Content-Length`
pub(crate) fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    let (status, bytes) = match serde_json::to_vec(body) {
        Ok(bytes) => (status, bytes),
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize response body");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                br#"{"error":"internal"}"#.to_vec(),
            )
        }
    };

    (
        status,
        [
            (CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE)),
            (CONTENT_LENGTH, HeaderValue::from(bytes.len())),
        ],
        bytes,
    )
        .into_response()
}
