//! Error types for saving and loading widget state.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StateError {
    /// The state file could not be opened, created or written.
    #[error("state file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The state file is not valid JSON or does not match the state layout.
    #[error("malformed state file: {0}")]
    Json(#[from] serde_json::Error),
}
