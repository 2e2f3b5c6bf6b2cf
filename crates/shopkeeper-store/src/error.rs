//! Error types for catalog storage.

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in storage operations.
///
/// Either variant means the backing file cannot be trusted for the current
/// operation. Callers report them upward without retrying.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The document file could not be created, read, or replaced.
    #[error("storage unavailable: {0}")]
    Unavailable(#[from] std::io::Error),

    /// The persisted document does not parse as a catalog.
    #[error("catalog document corrupted: {0}")]
    Corrupted(#[from] serde_json::Error),
}
