use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Clipboard history engine
#[derive(Debug, Parser)]
#[command(name = "clipstack", version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML config file (default: <config dir>/clipstack/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override `[watcher] poll_interval_ms`
    #[arg(long, global = true)]
    pub poll_interval_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Watch the pasteboard and keep a history until Ctrl-C
    Watch {
        /// Only print entries matching this text when exiting
        #[arg(short, long, default_value = "")]
        query: String,

        /// Print the history as JSON when exiting
        #[arg(long)]
        json: bool,
    },
    /// Read the pasteboard once and print what would be captured
    Peek,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_with_global_flags() {
        let cli = Cli::try_parse_from([
            "clipstack",
            "watch",
            "--poll-interval-ms",
            "250",
            "--query",
            "todo",
            "-c",
            "/tmp/clipstack.toml",
        ])
        .unwrap();

        assert_eq!(cli.poll_interval_ms, Some(250));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/clipstack.toml")));
        assert!(matches!(
            cli.command,
            Commands::Watch { ref query, json: false } if query == "todo"
        ));
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["clipstack"]).is_err());
    }

    #[test]
    fn test_peek() {
        let cli = Cli::try_parse_from(["clipstack", "peek"]).unwrap();
        assert!(matches!(cli.command, Commands::Peek));
        assert_eq!(cli.poll_interval_ms, None);
    }
}
