//! Core data model.
//!
//! A task log event is one progress record emitted by a running task. It
//! carries correlation identifiers (resource, task type, run) so a storage
//! backend can group records without this crate knowing the schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Log Level
// ---------------------------------------------------------------------------

/// Severity levels recognized by the event logger.
///
/// Levels travel through [`TaskLogEvent`] as the raw string the caller
/// supplied; this enum is the recognized subset, used to pick a severity
/// for the local tracing sink. Unrecognized level strings pass through the
/// event unchanged and mirror at `INFO`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Debug,
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    /// Parse a level name. Returns `None` for unrecognized names.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "success" => Some(LogLevel::Success),
            "warning" => Some(LogLevel::Warning),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Success => "success",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        }
    }

}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Task Log Event
// ---------------------------------------------------------------------------

/// One progress record emitted by a task.
///
/// Produced by [`EventLogger::log`](crate::EventLogger::log), handed to the
/// persistence callback, and not retained by this crate afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskLogEvent {
    /// The resource the task is operating on.
    pub resource_id: String,

    /// What kind of task produced this (e.g., "reindex").
    pub task_type: String,

    /// Correlation id for one run of the task.
    pub task_run_id: String,

    /// When the record was emitted.
    pub timestamp: DateTime<Utc>,

    /// Severity as supplied by the caller. Recognized values are the
    /// [`LogLevel`] names; anything else passes through unchanged.
    pub level: String,

    /// Human-readable progress text.
    pub message: String,
}
