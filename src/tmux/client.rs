use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::process::Command;

use super::error::{TmuxError, TmuxResult};
use super::TmuxSession;

/// Upper bound on a single tmux invocation unless overridden
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(5);

/// Format: session_name<TAB>session_windows<TAB>session_attached
const LIST_FORMAT: &str = "#{session_name}\t#{session_windows}\t#{session_attached}";

/// Client for interacting with tmux via CLI
#[derive(Debug, Clone)]
pub struct TmuxClient {
    /// Path to tmux binary
    tmux_path: String,
    /// Arguments placed before every subcommand, e.g. `-L <socket>`
    global_args: Vec<String>,
    /// How long a single invocation may run before it is killed
    timeout: Duration,
}

impl TmuxClient {
    pub fn new() -> Self {
        Self {
            tmux_path: "tmux".to_string(),
            global_args: Vec::new(),
            timeout: DEFAULT_COMMAND_TIMEOUT,
        }
    }

    /// Use a different tmux binary
    pub fn with_binary(mut self, path: impl Into<String>) -> Self {
        self.tmux_path = path.into();
        self
    }

    /// Talk to the tmux server listening on the named socket (`tmux -L`)
    pub fn with_socket_name(mut self, name: impl Into<String>) -> Self {
        self.global_args.push("-L".to_string());
        self.global_args.push(name.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[cfg(test)]
    pub(crate) fn with_global_arg(mut self, arg: impl Into<String>) -> Self {
        self.global_args.push(arg.into());
        self
    }

    pub fn tmux_path(&self) -> &str {
        &self.tmux_path
    }

    /// List all tmux sessions.
    ///
    /// A non-zero exit (typically "no server running") means there is nothing
    /// to list and yields an empty vector.
    pub async fn list_sessions(&self) -> TmuxResult<Vec<TmuxSession>> {
        let output = self
            .run(&["list-sessions", "-F", LIST_FORMAT], Stdio::piped())
            .await?;

        if !output.status.success() {
            tracing::debug!(
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "tmux list-sessions returned no sessions"
            );
            return Ok(Vec::new());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.lines().filter_map(parse_session_line).collect())
    }

    /// Check whether a session with exactly this name exists
    pub async fn session_exists(&self, name: &str) -> TmuxResult<bool> {
        let target = exact_target(name);
        let output = self
            .run(&["has-session", "-t", &target], Stdio::null())
            .await?;
        Ok(output.status.success())
    }

    /// Create a detached session.
    ///
    /// Returns `false` without touching tmux further when the session already exists.
    pub async fn create_session(&self, name: &str) -> TmuxResult<bool> {
        if self.session_exists(name).await? {
            return Ok(false);
        }

        self.run_checked(&["new-session", "-d", "-s", name]).await?;
        tracing::debug!(session = name, "created tmux session");
        Ok(true)
    }

    /// Kill a session
    pub async fn kill_session(&self, name: &str) -> TmuxResult<()> {
        let target = exact_target(name);
        self.run_checked(&["kill-session", "-t", &target]).await?;
        tracing::debug!(session = name, "killed tmux session");
        Ok(())
    }

    async fn run_checked(&self, args: &[&str]) -> TmuxResult<()> {
        let output = self.run(args, Stdio::null()).await?;

        if !output.status.success() {
            return Err(TmuxError::Failed {
                command: self.describe(args),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }

    async fn run(&self, args: &[&str], stdout: Stdio) -> TmuxResult<Output> {
        let mut command = Command::new(&self.tmux_path);
        command
            .args(&self.global_args)
            .args(args)
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        match tokio::time::timeout(self.timeout, command.output()).await {
            Ok(Ok(output)) => Ok(output),
            Ok(Err(source)) => Err(TmuxError::Spawn {
                command: self.describe(args),
                source,
            }),
            Err(_) => Err(TmuxError::TimedOut {
                command: self.describe(args),
                timeout: self.timeout,
            }),
        }
    }

    fn describe(&self, args: &[&str]) -> String {
        let mut parts = vec![self.tmux_path.as_str()];
        parts.extend(self.global_args.iter().map(String::as_str));
        parts.extend_from_slice(args);
        parts.join(" ")
    }
}

impl Default for TmuxClient {
    fn default() -> Self {
        Self::new()
    }
}

/// `=name` makes tmux match the session name exactly instead of by prefix
fn exact_target(name: &str) -> String {
    format!("={}", name)
}

fn parse_session_line(line: &str) -> Option<TmuxSession> {
    let parts: Vec<&str> = line.split('\t').collect();
    if parts.len() < 3 {
        return None;
    }

    let name = parts[0].to_string();
    let windows = parts[1].trim().parse().unwrap_or(0);
    let attached = parts[2].trim().parse::<u32>().map(|n| n > 0).unwrap_or(false);

    Some(TmuxSession {
        name,
        windows,
        attached,
    })
}
