// bases/extremote_server/src/config.rs
use std::time::Duration;

use clap::Parser;
use extremote_lingo::{ControlAck, LingoConfig, MetadataFallback};

pub const DEFAULT_LISTEN_URL: &str = "ipc:///tmp/extremote-commands";

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// nng URL to listen on
    pub listen: String,

    /// Upper bound for every call to the media player
    pub backend_timeout: Duration,

    /// Behaviour of the lingo handler
    pub lingo: LingoConfig,
}

/// Extended remote lingo server for the active Bluetooth media player
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// nng URL to listen on
    #[arg(short, long, default_value = DEFAULT_LISTEN_URL)]
    pub listen: String,

    /// Timeout for each call to the media player, in milliseconds
    #[arg(long, default_value_t = 2000)]
    pub backend_timeout_ms: u64,

    /// Acknowledge play controls with the action code instead of success
    #[arg(long)]
    pub echo_control_status: bool,

    /// Text sent for track fields that cannot be read.
    ///
    /// Without this option the backend error message is sent instead.
    #[arg(long)]
    pub metadata_fallback: Option<String>,
}

impl Config {
    /// Create configuration from CLI arguments
    pub fn from_args(args: CliArgs) -> Self {
        let control_ack = if args.echo_control_status {
            ControlAck::EchoAction
        } else {
            ControlAck::Success
        };

        let metadata_fallback = match args.metadata_fallback {
            Some(text) => MetadataFallback::Literal(text),
            None => MetadataFallback::ErrorText,
        };

        Self {
            listen: args.listen,
            backend_timeout: Duration::from_millis(args.backend_timeout_ms),
            lingo: LingoConfig {
                control_ack,
                metadata_fallback,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = CliArgs::parse_from(["extremote-server"]);
        let config = Config::from_args(args);

        assert_eq!(config.listen, DEFAULT_LISTEN_URL);
        assert_eq!(config.backend_timeout, Duration::from_secs(2));
        assert_eq!(config.lingo, LingoConfig::default());
    }

    #[test]
    fn echo_flag_selects_action_status() {
        let args = CliArgs::parse_from(["extremote-server", "--echo-control-status"]);
        let config = Config::from_args(args);

        assert_eq!(config.lingo.control_ack, ControlAck::EchoAction);
    }

    #[test]
    fn metadata_fallback_literal() {
        let args = CliArgs::parse_from(["extremote-server", "--metadata-fallback", "Unknown"]);
        let config = Config::from_args(args);

        assert_eq!(
            config.lingo.metadata_fallback,
            MetadataFallback::Literal("Unknown".to_string())
        );
    }

    #[test]
    fn custom_listen_and_timeout() {
        let args = CliArgs::parse_from([
            "extremote-server",
            "--listen",
            "tcp://0.0.0.0:5555",
            "--backend-timeout-ms",
            "250",
        ]);
        let config = Config::from_args(args);

        assert_eq!(config.listen, "tcp://0.0.0.0:5555");
        assert_eq!(config.backend_timeout, Duration::from_millis(250));
    }
}
