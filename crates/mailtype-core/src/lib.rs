//! # Mailtype Core
//!
//! Pure primitives for the mailtype datatype: a recursive-descent
//! validator and canonical parser for a restricted e-mail grammar
//! (`Local '@' Domain`, each made of dot-separated alphanumeric-and-
//! hyphen name parts), plus the ordering and hashing derived from the
//! parsed pair.
//!
//! This crate contains no I/O, no storage, no async. It is pure
//! computation over its inputs: every function is safe to call from any
//! number of concurrent callers without coordination.
//!
//! ## Key Types
//!
//! - [`Address`] - A validated, normalized `(local, domain)` pair
//! - [`InvalidAddress`] - The single parse error, carrying the raw input
//! - [`ParseLimits`] - Configurable per-field length bound
//!
//! ## Entry Points
//!
//! - [`Address::parse`] - raw text to `Address` (fails closed)
//! - [`Address`]'s `Display` impl - canonical `local@domain` text
//! - [`compare`] - three-way ordering, domain-major
//! - [`hash_code`] - position-weighted 32-bit hash
//!
//! The grammar recognized here is deliberately a simplified subset of
//! RFC 5321/5322: ASCII letters, digits, hyphens, dot-separated
//! segments, case-insensitive.

pub mod address;
pub mod error;
mod grammar;
pub mod normalize;
pub mod ordering;

pub use address::{Address, ParseLimits, MAX_FIELD_LEN, MAX_TEXT_LEN};
pub use error::{InvalidAddress, InvalidReason};
pub use normalize::fold_case;
pub use ordering::{compare, hash_code, same_domain};
