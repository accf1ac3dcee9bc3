//! Error types for the store module.

use mailtype_core::InvalidAddress;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The connection could not be reached (poisoned lock or a failed
    /// blocking task).
    #[error("connection unavailable: {0}")]
    Unavailable(String),

    /// Migration error.
    #[error("migration error: {0}")]
    Migration(String),

    /// A stored row failed re-validation on read.
    #[error("stored row failed re-validation: {0}")]
    InvalidData(#[from] InvalidAddress),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
