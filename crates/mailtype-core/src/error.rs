//! Error types for address parsing.

use std::fmt;

use thiserror::Error;

/// Why a candidate string was rejected by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidReason {
    /// The input did not contain exactly one `@`.
    SeparatorCount,

    /// Nothing before the `@`.
    EmptyLocal,

    /// Nothing after the `@`.
    EmptyDomain,

    /// The local part violated the name-part grammar.
    LocalGrammar,

    /// The domain part violated the name-part grammar, including a
    /// missing dot or too few labels.
    DomainGrammar,

    /// A name part ended in `-`.
    TrailingHyphen,

    /// The local or domain part exceeded the configured length bound.
    FieldTooLong,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            InvalidReason::SeparatorCount => "expected exactly one '@'",
            InvalidReason::EmptyLocal => "local part is empty",
            InvalidReason::EmptyDomain => "domain part is empty",
            InvalidReason::LocalGrammar => "local part is not a valid name-part sequence",
            InvalidReason::DomainGrammar => "domain part requires two or more valid labels",
            InvalidReason::TrailingHyphen => "a name part may not end in '-'",
            InvalidReason::FieldTooLong => "local or domain part exceeds the length bound",
        };
        f.write_str(msg)
    }
}

/// A candidate string rejected by [`Address::parse`](crate::Address::parse).
///
/// This is the only error the validator surfaces. It carries the
/// original raw input for diagnostics; callers decide whether a
/// rejection aborts a transaction, skips a record, or is merely logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid input syntax for email address \"{raw}\": {reason}")]
pub struct InvalidAddress {
    /// Which rule the input broke.
    pub reason: InvalidReason,
    /// The raw input as given, before normalization.
    pub raw: String,
}
