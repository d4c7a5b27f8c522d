use thiserror::Error;

/// Failures surfaced to the embedding UI. All of them are recoverable at the
/// call site and rendered as a transient notification, never a crash.
#[derive(Debug, Error)]
pub enum Error {
    /// A candidate record broke a shape or constraint rule. Carries the
    /// offending field so forms can highlight it.
    #[error("{field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// No record matched, e.g. an email/password pair with no owner.
    #[error("{0}")]
    NotFound(String),

    /// A uniqueness rule was broken, e.g. registering an email twice.
    #[error("{0}")]
    Conflict(String),

    /// The storage backend refused a write. Reads never produce this; a
    /// missing or malformed entry degrades to an empty default instead.
    #[error("storage error: {0}")]
    Storage(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl Error {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
