//! # Mailtype Testkit
//!
//! Testing utilities for the mailtype datatype.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known inputs with expected canonical text or
//!   rejection reason, shared across crates and implementations
//! - **Generators**: Proptest strategies for valid candidate strings
//! - **Fixtures**: Helpers for setting up store-backed test scenarios
//!
//! ## Golden Vectors
//!
//! ```rust
//! use mailtype_testkit::vectors::{all_vectors, check_vector};
//!
//! for vector in all_vectors() {
//!     check_vector(&vector).unwrap();
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use mailtype_testkit::generators::CandidateParams;
//!
//! proptest! {
//!     #[test]
//!     fn parses(params: CandidateParams) {
//!         prop_assert!(mailtype::Address::parse(&params.raw()).is_ok());
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{addr, sample_addresses, TestFixture};
pub use generators::{address, domain_part, local_part, valid_candidate, CandidateParams};
pub use vectors::{all_vectors, check_vector, Expected, GoldenVector};
