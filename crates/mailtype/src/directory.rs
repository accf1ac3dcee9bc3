//! The Directory: unified API over parser, store, and wire codec.

use tracing::{debug, info};

use mailtype_core::{Address, ParseLimits};
use mailtype_store::{Store, StoreExt};
use mailtype_wire::{decode_records, encode_records};

use crate::error::Result;

/// Configuration for the Directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryConfig {
    /// Length bounds applied when parsing candidate strings.
    pub limits: ParseLimits,
}

/// A directory of validated addresses over a storage backend.
///
/// All raw text enters through the validator here; the store below
/// only ever sees `Address` values.
pub struct Directory<S: Store> {
    store: S,
    config: DirectoryConfig,
}

impl<S: Store> Directory<S> {
    /// Create a new directory over the given store.
    pub fn new(store: S, config: DirectoryConfig) -> Self {
        Self { store, config }
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Parse a candidate string under the directory's limits.
    pub fn parse(&self, raw: &str) -> Result<Address> {
        Ok(Address::parse_with_limits(raw, self.config.limits)?)
    }

    /// Parse and insert a candidate string.
    ///
    /// Returns the canonical address whether or not it was already
    /// present; inserting twice is not an error.
    pub async fn add(&self, raw: &str) -> Result<Address> {
        let addr = self.parse(raw)?;
        let result = self.store.insert(&addr).await?;
        debug!(address = %addr, ?result, "directory add");
        Ok(addr)
    }

    /// Whether the candidate, once canonicalized, is present.
    pub async fn contains(&self, raw: &str) -> Result<bool> {
        let addr = self.parse(raw)?;
        Ok(self.store.contains(&addr).await?)
    }

    /// Remove the canonicalized candidate. Returns whether it was
    /// present.
    pub async fn remove(&self, raw: &str) -> Result<bool> {
        let addr = self.parse(raw)?;
        let removed = self.store.remove(&addr).await?;
        debug!(address = %addr, removed, "directory remove");
        Ok(removed)
    }

    /// Number of stored addresses.
    pub async fn count(&self) -> Result<u64> {
        Ok(self.store.count().await?)
    }

    /// Every stored address, in comparator order.
    pub async fn all(&self) -> Result<Vec<Address>> {
        Ok(self.store.all().await?)
    }

    /// Every stored address in the given domain, ordered by local part.
    pub async fn in_domain(&self, domain: &str) -> Result<Vec<Address>> {
        Ok(self.store.in_domain(domain).await?)
    }

    /// Export every stored address as a stream of binary records, in
    /// comparator order.
    ///
    /// Fails if any stored address exceeds the wire codec's field
    /// bound, which relaxed [`ParseLimits`] can admit.
    pub async fn export_records(&self) -> Result<Vec<u8>> {
        let addrs = self.store.all().await?;
        info!(count = addrs.len(), "exporting address records");
        Ok(encode_records(&addrs)?)
    }

    /// Import a stream of binary records.
    ///
    /// Records are decoded and re-validated before anything is
    /// inserted; a corrupt stream imports nothing. Returns how many
    /// addresses were newly inserted, skipping duplicates.
    pub async fn import_records(&self, bytes: &[u8]) -> Result<usize> {
        let addrs = decode_records(bytes)?;
        let inserted = self.store.insert_all(&addrs).await?;
        info!(
            decoded = addrs.len(),
            inserted, "imported address records"
        );
        Ok(inserted)
    }
}
