//! Bounded per-key lock registry with least-recently-used eviction.
//!
//! Hands out one async mutex per resource key so that concurrently spawned
//! tasks touching the same resource serialize. The registry tracks a
//! bounded number of keys; inserting a previously untracked key past
//! capacity evicts the least-recently-used entry whose mutex nobody holds
//! or awaits. A lock that is in use is never evicted, even when that means
//! temporarily exceeding capacity.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::{Arc, Mutex as StdMutex};

use tokio::sync::Mutex;
use tracing::trace;

/// One tracked key: the shared mutex plus its recency tick.
struct LockEntry {
    mutex: Arc<Mutex<()>>,
    touched: u64,
}

impl LockEntry {
    /// True when nobody holds, awaits, or retains a handle to the mutex.
    ///
    /// The registry keeps exactly one reference; every caller-side handle,
    /// held guard, and parked `lock_owned` future keeps another. A count
    /// of one therefore means the entry is safe to evict.
    fn is_idle(&self) -> bool {
        Arc::strong_count(&self.mutex) == 1
    }
}

struct Inner<K> {
    entries: HashMap<K, LockEntry>,
    /// Logical clock for LRU ordering. Bumped on every access.
    tick: u64,
}

/// Registry of per-key async locks, bounded by LRU eviction.
///
/// Construct one per owning scope and hand it to every consumer; there is
/// no hidden process-wide instance. Cloning is cheap and shares the
/// underlying table, so a clone can move into a spawned task.
pub struct LockRegistry<K> {
    capacity: usize,
    inner: Arc<StdMutex<Inner<K>>>,
}

// Manual Clone so cloning the registry never requires K: Clone.
impl<K> Clone for LockRegistry<K> {
    fn clone(&self) -> Self {
        Self {
            capacity: self.capacity,
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K> LockRegistry<K>
where
    K: Eq + Hash + Clone + Debug,
{
    /// Create a registry tracking at most `capacity` distinct keys.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 1, "lock registry capacity must be at least 1");
        Self {
            capacity,
            inner: Arc::new(StdMutex::new(Inner {
                entries: HashMap::new(),
                tick: 0,
            })),
        }
    }

    /// Return the mutex for `key`, creating it on first access.
    ///
    /// Never blocks and never awaits; acquiring the returned mutex is the
    /// caller's business. Refreshes the key's recency on every call, not
    /// only on acquisition. Inserting a previously untracked key past
    /// capacity evicts least-recently-used idle entries; if every entry is
    /// busy the registry exceeds capacity rather than breaking a lock
    /// somebody is using.
    ///
    /// Two calls with the same key return the same mutex (pointer-equal
    /// `Arc`) until the entry is evicted.
    pub fn get_or_create(&self, key: K) -> Arc<Mutex<()>> {
        let mut inner = self.inner.lock().unwrap();
        inner.tick += 1;
        let tick = inner.tick;

        if let Some(entry) = inner.entries.get_mut(&key) {
            entry.touched = tick;
            return Arc::clone(&entry.mutex);
        }

        if inner.entries.len() >= self.capacity {
            Self::evict_to_capacity(&mut inner, self.capacity);
        }

        let mutex = Arc::new(Mutex::new(()));
        inner.entries.insert(
            key,
            LockEntry {
                mutex: Arc::clone(&mutex),
                touched: tick,
            },
        );
        mutex
    }

    /// Evict idle entries, least-recently-touched first, until the table
    /// has room for one more key.
    ///
    /// The scan skips busy entries. In the common case this removes a
    /// single entry; it removes more only when recovering from a period
    /// where busy locks forced the table over capacity. Stops early if
    /// every remaining entry is busy.
    fn evict_to_capacity(inner: &mut Inner<K>, capacity: usize) {
        while inner.entries.len() >= capacity {
            let candidate = inner
                .entries
                .iter()
                .filter(|(_, entry)| entry.is_idle())
                .min_by_key(|(_, entry)| entry.touched)
                .map(|(key, _)| key.clone());

            let Some(key) = candidate else {
                trace!(
                    tracked = inner.entries.len(),
                    capacity,
                    "every lock is busy, deferring eviction"
                );
                return;
            };

            inner.entries.remove(&key);
            trace!(?key, "evicted idle lock");
        }
    }

    /// Number of keys currently tracked.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `key` is currently tracked. Does not refresh recency.
    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().unwrap().entries.contains_key(key)
    }

    /// The soft bound on tracked keys.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
