//! # Mailtype Wire
//!
//! Binary record codec for validated addresses: a length-prefixed pair
//! of strings. This is the wire-format collaborator of the core; the
//! core itself never sees bytes off a wire.
//!
//! ## Record Layout
//!
//! ```text
//! [local_len: u8][local bytes][domain_len: u8][domain bytes]
//! ```
//!
//! Field lengths are bounded by [`mailtype_core::MAX_FIELD_LEN`], so a
//! single length byte suffices; the encoder rejects wider fields that
//! relaxed parse limits can admit. Records carry no padding or
//! terminator; a stream of records is framed by the lengths alone.
//!
//! ## Invariant
//!
//! Decoding runs the core validator over the recovered text, so a wire
//! record can never yield an [`Address`] the validator would reject.

pub mod error;
pub mod record;

pub use error::WireError;
pub use record::{decode_record, decode_records, encode_record, encode_records};

pub use mailtype_core::Address;
