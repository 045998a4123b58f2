use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tokio::time::sleep;

use cs_core::ports::{
    ClipboardChangeHandler, ClipboardWriterPort, PasteboardPort, WatcherControlPort,
};
use cs_core::{ClipboardPayload, PayloadKind};
use cs_platform::adapters::InMemoryPasteboard;
use cs_platform::runtime::clipboard::{ClipboardPoller, PollingClipboardRuntime, TickOutcome};

const INTERVAL: Duration = Duration::from_millis(500);

#[derive(Default)]
struct Recorder {
    seen: Mutex<Vec<ClipboardPayload>>,
    fail: bool,
}

impl Recorder {
    fn texts(&self) -> Vec<String> {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .filter_map(|payload| payload.as_text().map(str::to_string))
            .collect()
    }
}

#[async_trait]
impl ClipboardChangeHandler for Recorder {
    async fn on_clipboard_changed(&self, payload: ClipboardPayload) -> Result<()> {
        self.seen.lock().unwrap().push(payload);
        if self.fail {
            return Err(anyhow!("history unavailable"));
        }
        Ok(())
    }
}

fn setup(
    recorder: Recorder,
) -> (Arc<InMemoryPasteboard>, Arc<Recorder>, PollingClipboardRuntime) {
    let pasteboard = Arc::new(InMemoryPasteboard::new());
    let recorder = Arc::new(recorder);
    let poller = Arc::new(ClipboardPoller::new(pasteboard.clone(), recorder.clone()));
    let runtime = PollingClipboardRuntime::new(poller, INTERVAL);
    (pasteboard, recorder, runtime)
}

#[tokio::test(start_paused = true)]
async fn test_runtime_captures_each_change_once() {
    let (pasteboard, recorder, runtime) = setup(Recorder::default());
    pasteboard.set_text("on the pasteboard at startup");

    runtime.start().await.unwrap();
    sleep(Duration::from_millis(10)).await;
    assert_eq!(recorder.texts(), vec!["on the pasteboard at startup"]);

    pasteboard.set_text("second");
    sleep(INTERVAL).await;
    sleep(INTERVAL).await;

    assert_eq!(
        recorder.texts(),
        vec!["on the pasteboard at startup", "second"]
    );
    runtime.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_no_tick_fires_after_stop() {
    let (pasteboard, recorder, runtime) = setup(Recorder::default());
    pasteboard.set_text("a");
    runtime.start().await.unwrap();
    sleep(Duration::from_millis(10)).await;

    runtime.stop().await.unwrap();
    pasteboard.set_text("b");
    sleep(INTERVAL * 4).await;

    assert_eq!(recorder.texts(), vec!["a"]);
    assert!(!runtime.is_watching());
}

#[tokio::test(start_paused = true)]
async fn test_start_and_stop_are_idempotent() {
    let (_pasteboard, _recorder, runtime) = setup(Recorder::default());

    runtime.start_watcher().await.unwrap();
    runtime.start_watcher().await.unwrap();
    assert!(runtime.is_watching());

    runtime.stop_watcher().await.unwrap();
    runtime.stop_watcher().await.unwrap();
    assert!(!runtime.is_watching());

    runtime.start_watcher().await.unwrap();
    assert!(runtime.is_watching());
    runtime.stop_watcher().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_zero_interval_refuses_to_start() {
    let pasteboard = Arc::new(InMemoryPasteboard::new());
    let poller = Arc::new(ClipboardPoller::new(
        pasteboard,
        Arc::new(Recorder::default()),
    ));
    let runtime = PollingClipboardRuntime::new(poller, Duration::ZERO);

    assert!(runtime.start().await.is_err());
    assert!(!runtime.is_watching());
}

#[tokio::test]
async fn test_text_wins_over_image_in_same_copy() {
    let (pasteboard, recorder, runtime) = setup(Recorder::default());
    pasteboard.set_text_and_image("caption", vec![0x89, b'P', b'N', b'G']);

    let outcome = runtime.poller().check_once().await;

    assert_eq!(outcome, TickOutcome::Captured(PayloadKind::Text));
    assert_eq!(recorder.texts(), vec!["caption"]);
}

#[tokio::test]
async fn test_image_captured_when_no_text() {
    let (pasteboard, recorder, runtime) = setup(Recorder::default());
    pasteboard.set_image(vec![1u8, 2, 3]);

    let outcome = runtime.poller().check_once().await;

    assert_eq!(outcome, TickOutcome::Captured(PayloadKind::Image));
    assert_eq!(recorder.seen.lock().unwrap()[0].kind(), PayloadKind::Image);
}

#[tokio::test]
async fn test_empty_copy_is_absorbed() {
    let (pasteboard, recorder, runtime) = setup(Recorder::default());
    pasteboard.set_empty();

    assert_eq!(runtime.poller().check_once().await, TickOutcome::Absorbed);
    assert_eq!(runtime.poller().check_once().await, TickOutcome::Unchanged);
    assert!(recorder.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_handler_failure_does_not_stall_the_poller() {
    let (pasteboard, recorder, runtime) = setup(Recorder {
        fail: true,
        ..Recorder::default()
    });
    pasteboard.set_text("a");

    assert_eq!(
        runtime.poller().check_once().await,
        TickOutcome::Captured(PayloadKind::Text)
    );
    assert_eq!(runtime.poller().check_once().await, TickOutcome::Unchanged);

    pasteboard.set_text("b");
    runtime.poller().check_once().await;
    assert_eq!(recorder.texts(), vec!["a", "b"]);
}

#[tokio::test(start_paused = true)]
async fn test_write_through_poller_is_not_recaptured_by_runtime() {
    let (pasteboard, recorder, runtime) = setup(Recorder::default());
    pasteboard.set_text("copied");
    runtime.start().await.unwrap();
    sleep(Duration::from_millis(10)).await;

    runtime
        .poller()
        .write(&ClipboardPayload::Text("selected from history".to_string()))
        .await
        .unwrap();
    sleep(INTERVAL * 3).await;

    assert_eq!(recorder.texts(), vec!["copied"]);
    assert_eq!(
        pasteboard.read_snapshot(),
        Some(ClipboardPayload::Text("selected from history".to_string()))
    );
    runtime.stop().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_start_and_stop_never_orphan_the_loop() {
    let pasteboard = Arc::new(InMemoryPasteboard::new());
    let recorder = Arc::new(Recorder::default());
    let poller = Arc::new(ClipboardPoller::new(pasteboard.clone(), recorder.clone()));
    let runtime = Arc::new(PollingClipboardRuntime::new(
        poller,
        Duration::from_millis(5),
    ));

    for _ in 0..50 {
        let starter = tokio::spawn({
            let runtime = runtime.clone();
            async move { runtime.start().await }
        });
        let stopper = tokio::spawn({
            let runtime = runtime.clone();
            async move { runtime.stop().await }
        });
        starter.await.unwrap().unwrap();
        stopper.await.unwrap().unwrap();
    }
    runtime.stop().await.unwrap();
    assert!(!runtime.is_watching());

    let seen_before = recorder.seen.lock().unwrap().len();
    pasteboard.set_text("after stop");
    sleep(Duration::from_millis(50)).await;

    assert_eq!(recorder.seen.lock().unwrap().len(), seen_before);

    runtime.start().await.unwrap();
    sleep(Duration::from_millis(50)).await;
    assert_eq!(recorder.texts().last().map(String::as_str), Some("after stop"));
    runtime.stop().await.unwrap();
}
