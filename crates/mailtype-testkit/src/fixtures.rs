//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use mailtype::{Directory, DirectoryConfig};
use mailtype_core::Address;
use mailtype_store::MemoryStore;

/// Parse a known-good literal, panicking loudly if it is not.
///
/// For test setup only; production code goes through
/// [`Address::parse`] and handles the error.
pub fn addr(raw: &str) -> Address {
    Address::parse(raw).expect("fixture address must parse")
}

/// A small, deliberately unsorted set of distinct addresses.
pub fn sample_addresses() -> Vec<Address> {
    vec![
        addr("carol@zoo.example"),
        addr("alice@example.com"),
        addr("zed@a.b"),
        addr("bob@example.com"),
        addr("dave@host-1.net"),
    ]
}

/// A test fixture with an in-memory store.
pub struct TestFixture {
    pub store: MemoryStore,
}

impl TestFixture {
    /// Create a new empty fixture.
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(),
        }
    }

    /// Wrap the fixture store in a directory with default config.
    pub fn directory(self) -> Directory<MemoryStore> {
        Directory::new(self.store, DirectoryConfig::default())
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailtype_store::Store;

    #[test]
    fn test_samples_are_distinct() {
        let mut samples = sample_addresses();
        samples.sort();
        samples.dedup();
        assert_eq!(samples.len(), 5);
    }

    #[tokio::test]
    async fn test_fixture_store_starts_empty() {
        let fixture = TestFixture::new();
        assert_eq!(fixture.store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_fixture_directory_accepts_samples() {
        let directory = TestFixture::new().directory();
        for sample in sample_addresses() {
            directory.add(&sample.to_string()).await.unwrap();
        }
        assert_eq!(directory.count().await.unwrap(), 5);
    }
}
