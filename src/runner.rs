//! Scoped-lock task runner.
//!
//! Composes the registry with task execution: acquire the key's lock, run
//! the work, release on every exit path. Release is RAII. The owned guard
//! drops on normal return, on an error return, and on cancellation,
//! whether the task was still parked waiting or already running.

use std::fmt::Debug;
use std::future::Future;
use std::hash::Hash;

use crate::registry::LockRegistry;

/// Run `work` while holding the lock for `key`.
///
/// Suspends until the lock is free if another task holds it; waiters wake
/// in the order the underlying mutex chooses. Returns whatever `work`
/// returns. An error return or a cancellation mid-wait or mid-run still
/// releases the lock, so a later call on the same key cannot deadlock.
///
/// Nothing is caught or logged here. When invoked from inside a spawned
/// unit, failure observation is [`spawn_task`](crate::spawn_task)'s job.
pub async fn run_with_lock<K, F>(registry: &LockRegistry<K>, key: K, work: F) -> F::Output
where
    K: Eq + Hash + Clone + Debug,
    F: Future,
{
    let mutex = registry.get_or_create(key);
    let _guard = mutex.lock_owned().await;
    work.await
}
