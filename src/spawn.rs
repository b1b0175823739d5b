//! Fire-and-forget task launcher.
//!
//! A bare `tokio::spawn` lets a failed background task vanish: nobody
//! joins the handle, so the error or panic is dropped on the floor. The
//! launcher wraps every unit of work with a terminal observer that
//! reports uncaught failures to the tracing sink before the task ends.
//! No locking and no business logic live here.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures_util::FutureExt;
use tokio::task::JoinHandle;
use tracing::error;
use uuid::Uuid;

/// Spawn `work` to run independently of the caller.
///
/// The caller is free to drop the returned handle; failures are observed
/// regardless. An `Err` return or a panic inside `work` is reported to
/// the tracing sink under `name`, or a generated `task-<id>` when
/// unnamed, and never re-raised since no caller is left to catch it.
/// Aborting the task counts as deliberate cancellation and produces no
/// report.
pub fn spawn_task<F>(work: F, name: Option<&str>) -> JoinHandle<()>
where
    F: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    let task_name = match name {
        Some(n) => n.to_string(),
        None => format!("task-{}", &Uuid::new_v4().to_string()[..8]),
    };

    tokio::spawn(async move {
        match AssertUnwindSafe(work).catch_unwind().await {
            Ok(Ok(())) => {}
            Ok(Err(error)) => {
                error!(task = %task_name, "background task failed: {error:#}");
            }
            Err(panic) => {
                error!(
                    task = %task_name,
                    "background task panicked: {}",
                    panic_message(&panic)
                );
            }
        }
    })
}

/// Best-effort extraction of a panic payload's message.
fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(s) = panic.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s
    } else {
        "non-string panic payload"
    }
}
