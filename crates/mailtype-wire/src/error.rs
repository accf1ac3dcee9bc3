//! Error types for the wire codec.

use mailtype_core::InvalidAddress;
use thiserror::Error;

/// Errors that can occur while encoding or decoding an address record.
#[derive(Debug, Error)]
pub enum WireError {
    /// The buffer ended before the record did.
    #[error("record truncated: needed {needed} more bytes, had {had}")]
    Truncated { needed: usize, had: usize },

    /// A field length exceeds the per-field wire bound, either in a
    /// decoded length prefix or in an address offered for encoding.
    #[error("field length {0} exceeds the wire bound")]
    FieldTooLong(usize),

    /// A field held bytes that are not UTF-8.
    #[error("field is not valid UTF-8")]
    InvalidUtf8,

    /// The recovered text failed validation.
    #[error(transparent)]
    Invalid(#[from] InvalidAddress),
}

/// Result type for wire operations.
pub type Result<T> = std::result::Result<T, WireError>;
