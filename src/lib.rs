//! # keywork
//!
//! Per-key coordination primitives for background work in async servers.
//!
//! Provides a bounded, LRU-evicting registry of per-key async locks
//! ([`LockRegistry`]), a fire-and-forget task launcher that reports
//! uncaught failures instead of dropping them ([`spawn_task`]), a
//! scoped-lock runner that serializes work on a shared key
//! ([`run_with_lock`]), and a storage-agnostic progress logger
//! ([`EventLogger`]).

pub mod error;
pub mod logger;
pub mod model;
pub mod registry;
pub mod runner;
pub mod spawn;
pub mod telemetry;

pub use error::{Error, Result};
pub use logger::EventLogger;
pub use model::{LogLevel, TaskLogEvent};
pub use registry::LockRegistry;
pub use runner::run_with_lock;
pub use spawn::spawn_task;
