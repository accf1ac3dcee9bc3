//! # Mailtype
//!
//! A validated e-mail address datatype with the glue its collaborators
//! need: a canonical parser over a restricted grammar, a total order
//! and 32-bit hash for index structures, a binary record codec, and
//! storage backends that rank addresses exactly as the comparator does.
//!
//! ## Key Concepts
//!
//! - **Address**: Immutable `(local, domain)` pair. Only the validator
//!   constructs one; there is no way to hold un-validated text.
//! - **Canonical form**: lowercase `local@domain`, no brackets, no
//!   whitespace.
//! - **Ordering**: domain-major, local-minor, byte-wise. Every derived
//!   comparison routes through the one three-way function.
//! - **Directory**: the unified API tying parser, store, and wire
//!   codec together.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mailtype::{Directory, DirectoryConfig};
//! use mailtype::store::SqliteStore;
//!
//! async fn example() {
//!     let store = SqliteStore::open("addresses.db").unwrap();
//!     let directory = Directory::new(store, DirectoryConfig::default());
//!
//!     let addr = directory.add("User@Example.COM").await.unwrap();
//!     assert_eq!(addr.to_string(), "user@example.com");
//!
//!     let neighbors = directory.in_domain("example.com").await.unwrap();
//!     println!("{} addresses share the domain", neighbors.len());
//! }
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `mailtype::core` - Parser, ordering, hashing
//! - `mailtype::store` - Storage abstraction, SQLite and memory
//! - `mailtype::wire` - Binary record codec

pub mod directory;
pub mod error;

// Re-export component crates
pub use mailtype_core as core;
pub use mailtype_store as store;
pub use mailtype_wire as wire;

// Re-export main types for convenience
pub use directory::{Directory, DirectoryConfig};
pub use error::{DirectoryError, Result};

pub use mailtype_core::{
    compare, fold_case, hash_code, same_domain, Address, InvalidAddress, InvalidReason,
    ParseLimits, MAX_FIELD_LEN, MAX_TEXT_LEN,
};
pub use mailtype_store::{InsertResult, MemoryStore, SqliteStore, Store};
