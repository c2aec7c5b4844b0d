use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Engine failure described only by its reason.
    #[error("{0}")]
    Engine(String),
    #[error("failed to connect to clamd at {address}: {message}")]
    ConnectionFailed {
        address: String,
        message: String,
    },
    #[error("clamd I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("clamd did not reply within {0:?}")]
    Timeout(Duration),
    #[error("context closed during scanning: {0}")]
    Cancelled(String),
    #[error("clamd reported an error: {0}")]
    EngineReported(String),
    #[error("unexpected clamd reply: {0}")]
    UnexpectedReply(String),
    #[error("failed to read content: {0}")]
    Source(String),
    #[error("failed to parse DB date \"{raw}\": {message}")]
    DatabaseDate {
        raw: String,
        message: String,
    },
}
