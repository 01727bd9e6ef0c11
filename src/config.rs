use std::time::Duration;

use clap::Parser;

use crate::tmux::TmuxClient;

/// Command line arguments. Each flag falls back to its environment variable, then its default.
#[derive(Parser, Debug)]
#[command(
    name = "tmux-api",
    version = env!("CARGO_PKG_VERSION"),
    about = "HTTP/JSON API for listing, creating and killing tmux sessions"
)]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "TMUX_API_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "TMUX_API_PORT", default_value_t = 7682)]
    pub port: u16,

    /// tmux binary to invoke
    #[arg(long, env = "TMUX_API_TMUX_BIN", default_value = "tmux")]
    pub tmux_bin: String,

    /// Use a dedicated tmux server socket (`tmux -L <name>`)
    #[arg(long, env = "TMUX_API_SOCKET")]
    pub socket_name: Option<String>,

    /// Kill a tmux invocation that runs longer than this
    #[arg(
        long,
        env = "TMUX_API_COMMAND_TIMEOUT_MS",
        default_value_t = 5000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub command_timeout_ms: u64,
}

impl Config {
    pub fn tmux_client(&self) -> TmuxClient {
        let client = TmuxClient::new()
            .with_binary(&self.tmux_bin)
            .with_timeout(Duration::from_millis(self.command_timeout_ms));

        match &self.socket_name {
            Some(name) => client.with_socket_name(name),
            None => client,
        }
    }
}
