//! Error types for keywork.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The caller-supplied log persistence callback failed.
    #[error("log persistence failed: {0}")]
    Persist(#[source] anyhow::Error),

    /// The tracing subscriber could not be installed.
    #[error("telemetry init failed: {0}")]
    Telemetry(String),
}

pub type Result<T> = std::result::Result<T, Error>;
