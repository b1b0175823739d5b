//! Work-scoped event logging with pluggable persistence.
//!
//! An [`EventLogger`] carries the correlation identifiers for one task run
//! and forwards each record to a caller-supplied async callback, keeping
//! the crate storage-agnostic. Every record is also mirrored through the
//! local tracing sink so operators see progress without querying storage.

use std::future::Future;

use chrono::Utc;

use crate::error::{Error, Result};
use crate::model::{LogLevel, TaskLogEvent};

/// Logger for one task run.
///
/// Holds nothing but the four constructor values. `log` calls are
/// independent, so one instance can be shared across concurrent tasks
/// without synchronization.
pub struct EventLogger<F> {
    resource_id: String,
    task_type: String,
    task_run_id: String,
    callback: F,
}

impl<F, Fut> EventLogger<F>
where
    F: Fn(TaskLogEvent) -> Fut,
    Fut: Future<Output = anyhow::Result<()>>,
{
    /// Create a logger bound to one `(resource, task type, run)` triple.
    ///
    /// `callback` receives every record and is responsible for durable
    /// persistence; the crate never interprets or retains the record.
    pub fn new(
        resource_id: impl Into<String>,
        task_type: impl Into<String>,
        task_run_id: impl Into<String>,
        callback: F,
    ) -> Self {
        Self {
            resource_id: resource_id.into(),
            task_type: task_type.into(),
            task_run_id: task_run_id.into(),
            callback,
        }
    }

    /// Record a progress message at `level`.
    ///
    /// Stamps the current time, mirrors the message through the tracing
    /// sink at the mapped severity, then hands the record to the
    /// persistence callback and awaits it. Unrecognized levels reach the
    /// callback as provided and mirror at `INFO`. A callback failure
    /// propagates as [`Error::Persist`]; persistence errors are the
    /// caller's to retry or escalate, never swallowed here.
    pub async fn log(&self, level: &str, message: impl Into<String>) -> Result<()> {
        let message = message.into();
        self.mirror(level, &message);

        let event = TaskLogEvent {
            resource_id: self.resource_id.clone(),
            task_type: self.task_type.clone(),
            task_run_id: self.task_run_id.clone(),
            timestamp: Utc::now(),
            level: level.to_string(),
            message,
        };

        (self.callback)(event).await.map_err(Error::Persist)
    }

    pub async fn debug(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Debug.as_str(), message).await
    }

    pub async fn info(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Info.as_str(), message).await
    }

    pub async fn success(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Success.as_str(), message).await
    }

    pub async fn warning(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Warning.as_str(), message).await
    }

    pub async fn error(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Error.as_str(), message).await
    }

    /// Write the record through the local sink at the mapped severity.
    ///
    /// Runs before the callback so a persistence outage never hides
    /// progress from local diagnostics. Unrecognized levels mirror at
    /// `INFO`.
    fn mirror(&self, level: &str, message: &str) {
        match LogLevel::parse(level).unwrap_or(LogLevel::Info) {
            LogLevel::Debug => tracing::debug!(
                resource_id = %self.resource_id,
                task_type = %self.task_type,
                run_id = %self.task_run_id,
                "{message}"
            ),
            LogLevel::Info | LogLevel::Success => tracing::info!(
                resource_id = %self.resource_id,
                task_type = %self.task_type,
                run_id = %self.task_run_id,
                "{message}"
            ),
            LogLevel::Warning => tracing::warn!(
                resource_id = %self.resource_id,
                task_type = %self.task_type,
                run_id = %self.task_run_id,
                "{message}"
            ),
            LogLevel::Error => tracing::error!(
                resource_id = %self.resource_id,
                task_type = %self.task_type,
                run_id = %self.task_run_id,
                "{message}"
            ),
        }
    }
}
