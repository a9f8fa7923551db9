//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for chat-relay
#[derive(Parser, Debug)]
#[command(name = "chat-relay")]
#[command(
    author,
    version,
    about = "Relay chat messages to an LLM and record sessions with a backend"
)]
#[command(long_about = r#"
chat-relay accepts chat messages over HTTP, keeps a short rolling history
per conversation, forwards it to an OpenAI-compatible completion API and
returns the model's reply. On the second message of each conversation a
chatbot session is registered with the backend.

Configuration files are loaded from (in priority order):
1. CHAT_RELAY_<SECTION>__<KEY>   Environment variables
2. --config <path>               Explicit config file
3. ./chat-relay.toml             Project-level config
4. ~/.config/chat-relay/config.toml   Global config

Example:
  chat-relay --port 8080
  CHAT_RELAY_COMPLETION__API_KEY=sk-... chat-relay -v
"#)]
pub struct Cli {
    /// Address to bind (overrides server.host)
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to listen on (overrides server.port)
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Log filter implied by `-v` flags, if any were given
    pub fn verbosity_filter(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }
}
