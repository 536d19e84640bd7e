//! Errors raised by the session store.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// A required credential field was left empty.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The backend refused a read or write.
    #[error("storage error: {0}")]
    Storage(String),

    #[error("could not encode session record: {0}")]
    Serialization(#[from] serde_json::Error),
}
