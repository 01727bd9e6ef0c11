use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

/// Failure of a single tmux invocation
#[derive(Error, Debug)]
pub enum TmuxError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}: {stderr}")]
    Failed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("`{command}` did not finish within {timeout:?}")]
    TimedOut { command: String, timeout: Duration },
}

pub type TmuxResult<T> = Result<T, TmuxError>;
