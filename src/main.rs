use std::time::Duration;

use clap::Parser;
use tracing::error;

use clipstack_lib::bootstrap::{self, run_peek, run_watch, wire_dependencies};
use clipstack_lib::cli::{Cli, Commands};
use cs_core::EngineSettings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::resolve_config(cli.config.as_deref())?;
    bootstrap::tracing::init_tracing_subscriber(config.log_to_file.unwrap_or(true))?;

    let mut settings = EngineSettings::from_config(&config);
    if let Some(ms) = cli.poll_interval_ms {
        settings = settings.with_poll_interval(Duration::from_millis(ms));
    }

    let runtime = wire_dependencies(settings).map_err(|err| {
        error!(error = %err, "Failed to wire dependencies");
        err
    })?;

    match cli.command {
        Commands::Watch { query, json } => run_watch(&runtime, &query, json).await,
        Commands::Peek => run_peek(&runtime),
    }
}
