//! Scripted stand-in for the tmux binary, used by tests that exercise the
//! real subprocess path without needing a tmux server.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use super::TmuxClient;

/// Keeps session names one per line in `sessions` next to the script.
/// Every session reports one window and no attached clients.
const SCRIPT: &str = r#"dir=$(dirname "$0")
state="$dir/sessions"
[ -f "$dir/hang" ] && sleep 30
case "$1" in
  list-sessions)
    if [ ! -s "$state" ]; then
      echo "no server running on $dir/default" >&2
      exit 1
    fi
    while IFS= read -r name; do
      printf '%s\t1\t0\n' "$name"
    done < "$state"
    ;;
  has-session)
    target=${3#=}
    [ -f "$state" ] && grep -qxF -- "$target" "$state"
    ;;
  new-session)
    if [ -f "$dir/broken" ]; then
      echo "server exited unexpectedly" >&2
      exit 1
    fi
    echo "$4" >> "$state"
    ;;
  kill-session)
    target=${3#=}
    if [ -f "$state" ] && grep -qxF -- "$target" "$state"; then
      grep -vxF -- "$target" "$state" > "$state.tmp"
      mv "$state.tmp" "$state"
    else
      echo "can't find session: $target" >&2
      exit 1
    fi
    ;;
  *)
    echo "unknown command: $1" >&2
    exit 1
    ;;
esac
"#;

pub(crate) struct FakeTmux {
    dir: TempDir,
    script: PathBuf,
}

impl FakeTmux {
    pub(crate) fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("tmux.sh");
        fs::write(&script, SCRIPT).unwrap();
        Self { dir, script }
    }

    /// A client whose every invocation runs the script through `sh`
    pub(crate) fn client(&self) -> TmuxClient {
        TmuxClient::new()
            .with_binary("sh")
            .with_global_arg(self.script.to_string_lossy().into_owned())
    }

    /// Make `new-session` fail as if the server could not start
    pub(crate) fn break_new_session(&self) {
        fs::write(self.dir.path().join("broken"), "").unwrap();
    }

    /// Make every command block long enough to hit any sane timeout
    pub(crate) fn hang(&self) {
        fs::write(self.dir.path().join("hang"), "").unwrap();
    }
}
