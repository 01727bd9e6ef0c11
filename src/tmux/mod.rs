mod client;
mod error;
#[cfg(test)]
pub(crate) mod testing;

pub use client::TmuxClient;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Names this service is willing to pass to tmux for create/kill
static RE_SESSION_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").unwrap());

/// Represents a tmux session as reported by `list-sessions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TmuxSession {
    /// Session name
    pub name: String,
    /// Number of windows in the session
    pub windows: u32,
    /// Whether at least one client is attached
    pub attached: bool,
}

/// Check a session name against the allowed character set.
///
/// Empty names are rejected. This runs before any name reaches a tmux argument list.
pub fn is_valid_session_name(name: &str) -> bool {
    RE_SESSION_NAME.is_match(name)
}
