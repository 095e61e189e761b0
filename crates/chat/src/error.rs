//! Chat error types.

use thiserror::Error;

/// Errors that can occur in the chat session controller.
///
/// Network trouble never appears here. The controller converts it into
/// substitute assistant replies, so these variants cover only the send
/// preconditions and local state handling.
#[derive(Debug, Error)]
pub enum ChatError {
    /// A send was attempted while a prior one is unresolved.
    #[error("a message is already being sent")]
    SendInProgress,

    /// The submitted text is empty after trimming.
    #[error("message text is empty")]
    EmptyMessage,

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Underlying storage failure.
    #[error("storage error: {0}")]
    Storage(#[from] storage::StorageError),

    /// Persisted state could not be serialized or deserialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for chat operations.
pub type ChatResult<T> = Result<T, ChatError>;
