/// Errors surfaced at the store's message boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The message kind is not part of the wire contract; fatal, not retryable
    UnknownMessage(String),
    /// The payload does not fit the message kind's shape
    InvalidPayload(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::UnknownMessage(kind) => write!(f, "Unknown message: {}", kind),
            StoreError::InvalidPayload(msg) => write!(f, "Invalid payload: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

pub type StoreResult<T> = Result<T, StoreError>;
