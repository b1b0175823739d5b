//! Integration tests for the fire-and-forget launcher.
//!
//! Failure reports go to the tracing sink, so these tests install a
//! thread-local subscriber writing into a buffer and assert on its
//! output. The default `#[tokio::test]` runtime is single-threaded,
//! which keeps the spawned tasks on the thread that owns the subscriber.

use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use keywork::spawn_task;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture_sink() -> (Capture, tracing::subscriber::DefaultGuard) {
    let sink = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(sink.clone())
        .with_ansi(false)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (sink, guard)
}

async fn fails() -> anyhow::Result<()> {
    anyhow::bail!("boom")
}

async fn blows_up() -> anyhow::Result<()> {
    panic!("kaboom")
}

// ---------------------------------------------------------------------------
// Execution and isolation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn spawned_work_executes() {
    let (tx, rx) = tokio::sync::oneshot::channel();

    let handle = spawn_task(
        async move {
            tx.send("done").ok();
            Ok(())
        },
        Some("worker"),
    );

    handle.await.unwrap();
    assert_eq!(rx.await.unwrap(), "done");
}

#[tokio::test]
async fn failure_is_reported_not_raised() {
    let (sink, _guard) = capture_sink();

    // Awaiting the handle succeeds: the failure was consumed and reported.
    let handle = spawn_task(fails(), Some("failing"));
    handle.await.unwrap();

    let output = sink.contents();
    assert!(output.contains("failing"), "missing task name: {output}");
    assert!(output.contains("boom"), "missing error text: {output}");
}

#[tokio::test]
async fn panic_is_reported_not_raised() {
    let (sink, _guard) = capture_sink();

    let handle = spawn_task(blows_up(), Some("panicky"));
    handle.await.unwrap();

    let output = sink.contents();
    assert!(output.contains("panicky"));
    assert!(output.contains("kaboom"));
}

#[tokio::test]
async fn unnamed_task_gets_generated_identifier() {
    let (sink, _guard) = capture_sink();

    let handle = spawn_task(fails(), None);
    handle.await.unwrap();

    assert!(sink.contents().contains("task-"));
}

// ---------------------------------------------------------------------------
// Cancellation is not a failure
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cancellation_produces_no_report() {
    let (sink, _guard) = capture_sink();

    let handle = spawn_task(
        async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        },
        Some("doomed"),
    );

    // Let the task start before cancelling it.
    tokio::task::yield_now().await;
    handle.abort();
    let join = handle.await;
    assert!(join.unwrap_err().is_cancelled());

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(
        !sink.contents().contains("background task"),
        "cancellation was reported as a failure"
    );
}
