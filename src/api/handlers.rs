use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{Method, StatusCode, Uri},
    response::Response,
};
use serde::Serialize;
use serde_json::Value;

use crate::tmux::{is_valid_session_name, TmuxSession};

use super::error::ApiError;
use super::{json_response, AppState};

#[derive(Serialize)]
struct SessionsResponse {
    sessions: Vec<TmuxSession>,
}

#[derive(Serialize)]
struct CreateResponse {
    ok: bool,
    name: String,
    created: bool,
}

#[derive(Serialize)]
struct DeleteResponse<'a> {
    ok: bool,
    name: &'a str,
}

/// `GET /sessions`. Never fails: if tmux cannot be queried there are no sessions.
pub(super) async fn list_sessions(State(state): State<AppState>) -> Response {
    let sessions = state.tmux.list_sessions().await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "could not list tmux sessions");
        Vec::new()
    });

    json_response(StatusCode::OK, &SessionsResponse { sessions })
}

/// `POST /sessions` with a `{"name": ...}` body.
///
/// A body that cannot be buffered (e.g. over the size limit) counts as empty.
pub(super) async fn create_session(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    let name = match body {
        Ok(body) => requested_name(&body),
        Err(e) => {
            tracing::debug!(error = %e, "unreadable request body");
            String::new()
        }
    };
    if !is_valid_session_name(&name) {
        return Err(ApiError::InvalidName);
    }

    let created = state.tmux.create_session(&name).await.map_err(|e| {
        tracing::warn!(session = %name, error = %e, "failed to create tmux session");
        ApiError::CreateFailed
    })?;

    Ok(json_response(
        StatusCode::OK,
        &CreateResponse {
            ok: true,
            name,
            created,
        },
    ))
}

/// Unmatched methods on a routed path
pub(super) async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Everything the route table does not match.
///
/// `DELETE /sessions/{name}` is served here so that the name is the raw path
/// suffix: empty, nested or percent-encoded names reach validation and get a 400.
pub(super) async fn fallback(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<Response, ApiError> {
    match uri.path().strip_prefix("/sessions/") {
        Some(name) if method == Method::DELETE => delete_session(&state, name).await,
        _ => Err(ApiError::NotFound),
    }
}

async fn delete_session(state: &AppState, name: &str) -> Result<Response, ApiError> {
    if !is_valid_session_name(name) {
        return Err(ApiError::InvalidName);
    }

    // An absent session and a tmux failure both surface as not_found.
    state.tmux.kill_session(name).await.map_err(|e| {
        tracing::debug!(session = name, error = %e, "kill-session failed");
        ApiError::NotFound
    })?;

    Ok(json_response(
        StatusCode::OK,
        &DeleteResponse { ok: true, name },
    ))
}

/// Pull the trimmed session name out of a request body.
///
/// A missing or malformed body counts as `{}`, which yields an empty name.
fn requested_name(body: &[u8]) -> String {
    let value: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
    match value.get("name") {
        Some(Value::String(name)) => name.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
