//! Store trait: the abstract interface for address persistence.
//!
//! This trait is where the core's comparison and hash functions meet an
//! index structure: implementations must rank addresses exactly as
//! [`mailtype_core::compare`] does, or range scans and uniqueness
//! checks drift apart.

use async_trait::async_trait;
use mailtype_core::Address;

use crate::error::Result;

/// Result of inserting an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertResult {
    /// Address was inserted.
    Inserted,
    /// Address already present (idempotent, not an error).
    AlreadyExists,
}

/// The Store trait: async interface for address persistence.
///
/// All methods are async to support both sync (SQLite) and async
/// backends. For SQLite, `spawn_blocking` is used internally to avoid
/// blocking the runtime.
#[async_trait]
pub trait Store: Send + Sync {
    /// Insert a validated address.
    ///
    /// Returns `Inserted` if new, `AlreadyExists` if already present.
    async fn insert(&self, addr: &Address) -> Result<InsertResult>;

    /// Whether the address is present.
    async fn contains(&self, addr: &Address) -> Result<bool>;

    /// Remove an address. Returns whether it was present.
    async fn remove(&self, addr: &Address) -> Result<bool>;

    /// Number of stored addresses.
    async fn count(&self) -> Result<u64>;

    /// Every stored address, ordered by the core comparator
    /// (domain-major, local-minor).
    async fn all(&self) -> Result<Vec<Address>>;

    /// Every stored address in the given domain, ordered by local
    /// part. The argument is case-folded before matching.
    async fn in_domain(&self, domain: &str) -> Result<Vec<Address>>;
}

/// Extension trait for common store patterns.
#[async_trait]
pub trait StoreExt: Store {
    /// Insert a batch, returning how many were newly inserted.
    async fn insert_all(&self, addrs: &[Address]) -> Result<usize> {
        let mut inserted = 0;
        for addr in addrs {
            if matches!(self.insert(addr).await?, InsertResult::Inserted) {
                inserted += 1;
            }
        }
        Ok(inserted)
    }
}

#[async_trait]
impl<S: Store + ?Sized> StoreExt for S {}
