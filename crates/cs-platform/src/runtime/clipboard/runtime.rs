//! Polling runtime for the clipboard poller.
//!
//! Drives `ClipboardPoller::check_once` from a tokio interval in a
//! background task. Ticks run sequentially inside that one task.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use async_trait::async_trait;
use tokio::{
    sync::Mutex,
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};
use tracing::{debug, info};

use cs_core::ports::{WatcherControlError, WatcherControlPort};

use super::{ClipboardPoller, TickOutcome};

pub struct PollingClipboardRuntime {
    poller: Arc<ClipboardPoller>,
    interval: Duration,
    running: AtomicBool,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl PollingClipboardRuntime {
    pub fn new(poller: Arc<ClipboardPoller>, interval: Duration) -> Self {
        Self {
            poller,
            interval,
            running: AtomicBool::new(false),
            handle: Mutex::new(None),
        }
    }

    pub fn poller(&self) -> &Arc<ClipboardPoller> {
        &self.poller
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub async fn start(&self) -> Result<(), WatcherControlError> {
        // Held across the flag flip and the spawn so a concurrent stop
        // cannot run between them and miss the handle.
        let mut handle_slot = self.handle.lock().await;
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Ok(()); // 幂等
        }

        if self.interval.is_zero() {
            self.running.store(false, Ordering::Release);
            return Err(WatcherControlError::StartFailed(
                "poll interval must be greater than zero".to_string(),
            ));
        }

        let poller = self.poller.clone();
        let period = self.interval;

        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;

                if let TickOutcome::Captured(kind) = poller.check_once().await {
                    debug!(%kind, "Clipboard tick captured content");
                }
            }
        });

        *handle_slot = Some(handle);
        info!(interval_ms = period.as_millis() as u64, "Clipboard poller started");

        Ok(())
    }

    pub async fn stop(&self) -> Result<(), WatcherControlError> {
        let mut handle_slot = self.handle.lock().await;
        if !self.running.swap(false, Ordering::AcqRel) {
            return Ok(());
        }

        if let Some(handle) = handle_slot.take() {
            handle.abort();
            match handle.await {
                Ok(()) => {}
                Err(err) if err.is_cancelled() => {}
                Err(err) => return Err(WatcherControlError::StopFailed(err.to_string())),
            }
        }

        info!("Clipboard poller stopped");
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}

#[async_trait]
impl WatcherControlPort for PollingClipboardRuntime {
    async fn start_watcher(&self) -> Result<(), WatcherControlError> {
        self.start().await
    }

    async fn stop_watcher(&self) -> Result<(), WatcherControlError> {
        self.stop().await
    }

    fn is_watching(&self) -> bool {
        self.is_running()
    }
}
