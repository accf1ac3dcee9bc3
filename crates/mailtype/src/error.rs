//! Error types for the Directory.

use mailtype_core::InvalidAddress;
use mailtype_store::StoreError;
use mailtype_wire::WireError;
use thiserror::Error;

/// Errors that can occur during Directory operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// A candidate string failed validation.
    #[error(transparent)]
    Invalid(#[from] InvalidAddress),

    /// Storage error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Wire codec error during import or export.
    #[error("wire error: {0}")]
    Wire(#[from] WireError),
}

/// Result type for Directory operations.
pub type Result<T> = std::result::Result<T, DirectoryError>;
