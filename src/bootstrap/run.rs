//! Command execution for the `watch` and `peek` subcommands.

use std::io::Write;

use anyhow::Context;
use serde::Serialize;
use tracing::info;

use cs_app::models::DEFAULT_PREVIEW_CHARS;
use cs_core::ports::PasteboardPort;
use cs_core::PayloadKind;

use super::runtime::AppRuntime;

/// Watch the pasteboard until Ctrl-C, then print the history.
pub async fn run_watch(runtime: &AppRuntime, query: &str, json: bool) -> anyhow::Result<()> {
    let usecases = runtime.usecases();

    usecases.start_clipboard_watcher().execute().await?;
    info!(
        capacity = runtime.deps.settings.history_capacity,
        interval_ms = runtime.watcher().interval().as_millis() as u64,
        "Watching the pasteboard, press Ctrl-C to stop"
    );

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl-C")?;

    usecases.stop_clipboard_watcher().execute().await?;

    let rows = usecases.history_previews(query).await;
    let mut stdout = std::io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &rows)?;
        writeln!(stdout)?;
    } else {
        for (index, row) in rows.iter().enumerate() {
            writeln!(
                stdout,
                "{:>3}  {:<5}  {:<16}  {}",
                index,
                row.kind.to_string(),
                row.copied,
                row.preview
            )?;
        }
    }
    Ok(())
}

/// What a single tick would see right now.
#[derive(Debug, Serialize)]
pub struct PeekReport {
    pub change_token: Option<u64>,
    pub kind: Option<PayloadKind>,
    pub size_bytes: Option<usize>,
    pub preview: Option<String>,
}

impl PeekReport {
    pub fn read(pasteboard: &dyn PasteboardPort) -> Self {
        let change_token = pasteboard.current_change_token().ok().map(|t| t.value());
        match pasteboard.read_snapshot() {
            Some(payload) => Self {
                change_token,
                kind: Some(payload.kind()),
                size_bytes: Some(payload.size_bytes()),
                preview: Some(payload.preview(DEFAULT_PREVIEW_CHARS)),
            },
            None => Self {
                change_token,
                kind: None,
                size_bytes: None,
                preview: None,
            },
        }
    }
}

/// Read the pasteboard once and print a JSON report.
pub fn run_peek(runtime: &AppRuntime) -> anyhow::Result<()> {
    let report = PeekReport::read(runtime.pasteboard().as_ref());
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &report)?;
    writeln!(stdout)?;
    Ok(())
}
