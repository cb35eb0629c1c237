// SPDX-License-Identifier: MPL-2.0
use crate::notifications::NotificationId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// The id generator produced an id that is still live.
    #[error("Duplicate notification id: {0}")]
    DuplicateId(NotificationId),

    /// `TokioScheduler` was created outside of a tokio runtime.
    #[error("No tokio runtime available for scheduling timers")]
    NoRuntime,

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),
}

/// Caller mistakes rejected by `notify` before any state changes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    #[error("notification message is empty")]
    EmptyMessage,

    #[error("unknown severity: {0}")]
    UnknownSeverity(String),

    #[error("negative display duration: {0}ms")]
    NegativeDuration(i64),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
