//! # Mailtype Store
//!
//! Storage abstraction for validated addresses. Provides a trait-based
//! interface with SQLite and in-memory implementations, both ranking
//! addresses by the core comparator.
//!
//! ## Key Types
//!
//! - [`Store`] - The async trait for all storage operations
//! - [`SqliteStore`] - SQLite-based persistent storage
//! - [`MemoryStore`] - In-memory storage for tests
//! - [`InsertResult`] - Result of inserting an address
//!
//! ## Design Notes
//!
//! - **Idempotent inserts**: Inserting an address twice returns
//!   `AlreadyExists`, never an error.
//! - **Comparator agreement**: Every implementation iterates in exactly
//!   the order of [`mailtype_core::compare`]. `MemoryStore` gets this
//!   from `Address`'s `Ord`; `SqliteStore` persists a sort key whose
//!   byte-wise text order is the same ordering.
//! - **Fail closed on corrupt rows**: Rows are re-validated on read;
//!   a row the validator rejects surfaces as [`StoreError::InvalidData`],
//!   never as a forged address.

pub mod error;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::{InsertResult, Store, StoreExt};
