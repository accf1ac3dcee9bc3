//! In-memory implementation of the Store trait.
//!
//! Primarily for testing. Same semantics as SQLite but nothing is
//! persisted; all data is lost when the store is dropped.

use std::collections::BTreeSet;
use std::sync::RwLock;

use async_trait::async_trait;

use mailtype_core::{fold_case, Address};

use crate::error::{Result, StoreError};
use crate::traits::{InsertResult, Store};

/// In-memory store implementation.
///
/// The `BTreeSet` is keyed by `Address`'s `Ord`, which delegates to the
/// core comparator, so iteration order is the index order by
/// construction. Thread-safe via `RwLock`.
pub struct MemoryStore {
    inner: RwLock<BTreeSet<Address>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BTreeSet::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> StoreError {
    StoreError::Unavailable(format!("lock poisoned: {e}"))
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert(&self, addr: &Address) -> Result<InsertResult> {
        let mut inner = self.inner.write().map_err(poisoned)?;
        if inner.insert(addr.clone()) {
            Ok(InsertResult::Inserted)
        } else {
            Ok(InsertResult::AlreadyExists)
        }
    }

    async fn contains(&self, addr: &Address) -> Result<bool> {
        let inner = self.inner.read().map_err(poisoned)?;
        Ok(inner.contains(addr))
    }

    async fn remove(&self, addr: &Address) -> Result<bool> {
        let mut inner = self.inner.write().map_err(poisoned)?;
        Ok(inner.remove(addr))
    }

    async fn count(&self) -> Result<u64> {
        let inner = self.inner.read().map_err(poisoned)?;
        Ok(inner.len() as u64)
    }

    async fn all(&self) -> Result<Vec<Address>> {
        let inner = self.inner.read().map_err(poisoned)?;
        Ok(inner.iter().cloned().collect())
    }

    async fn in_domain(&self, domain: &str) -> Result<Vec<Address>> {
        let domain = fold_case(domain);
        let inner = self.inner.read().map_err(poisoned)?;
        // Addresses sharing a domain are contiguous under the
        // domain-major order; a filter keeps this simple and correct.
        Ok(inner
            .iter()
            .filter(|a| a.domain() == domain)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::StoreExt;

    fn addr(raw: &str) -> Address {
        Address::parse(raw).unwrap()
    }

    #[tokio::test]
    async fn test_insert_is_idempotent() {
        let store = MemoryStore::new();
        let a = addr("a@b.c");
        assert_eq!(store.insert(&a).await.unwrap(), InsertResult::Inserted);
        assert_eq!(store.insert(&a).await.unwrap(), InsertResult::AlreadyExists);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_contains_and_remove() {
        let store = MemoryStore::new();
        let a = addr("a@b.c");
        store.insert(&a).await.unwrap();
        assert!(store.contains(&a).await.unwrap());
        assert!(store.remove(&a).await.unwrap());
        assert!(!store.contains(&a).await.unwrap());
        assert!(!store.remove(&a).await.unwrap());
    }

    #[tokio::test]
    async fn test_all_is_ordered_by_comparator() {
        let store = MemoryStore::new();
        for raw in ["c@z.z", "a@b.c", "z@a.a", "b@b.c"] {
            store.insert(&addr(raw)).await.unwrap();
        }
        let texts: Vec<String> = store
            .all()
            .await
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(texts, vec!["z@a.a", "a@b.c", "b@b.c", "c@z.z"]);
    }

    #[tokio::test]
    async fn test_in_domain_folds_argument() {
        let store = MemoryStore::new();
        store.insert(&addr("bob@example.com")).await.unwrap();
        store.insert(&addr("alice@example.com")).await.unwrap();
        store.insert(&addr("eve@other.org")).await.unwrap();

        let hits = store.in_domain("Example.COM").await.unwrap();
        let texts: Vec<String> = hits.iter().map(ToString::to_string).collect();
        assert_eq!(texts, vec!["alice@example.com", "bob@example.com"]);
    }

    #[tokio::test]
    async fn test_insert_all_counts_new_only() {
        let store = MemoryStore::new();
        store.insert(&addr("a@b.c")).await.unwrap();
        let batch = vec![addr("a@b.c"), addr("d@e.f")];
        assert_eq!(store.insert_all(&batch).await.unwrap(), 1);
    }
}
