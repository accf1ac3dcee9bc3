//! SQLite implementation of the Store trait.
//!
//! The primary storage backend. Uses rusqlite with bundled SQLite,
//! wrapped in async via `tokio::spawn_blocking`.
//!
//! The `addresses` table keys rows by `(domain, local)`: SQLite
//! compares TEXT byte-wise, so the primary-key index order is exactly
//! the core comparator's order. That agreement is the contract this
//! backend exists to honor.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, warn};

use mailtype_core::{fold_case, Address};

use crate::error::{Result, StoreError};
use crate::migration::{self, now_millis};
use crate::traits::{InsertResult, Store};

/// SQLite-based store implementation.
///
/// Thread-safe via an internal mutex. All trait methods run on the
/// blocking pool to keep the async runtime free.
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the file and runs migrations if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut conn = Connection::open(path)?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory SQLite database. Useful for testing.
    pub fn open_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run a closure against the connection on the blocking pool.
    async fn with_conn<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let conn = conn
                .lock()
                .map_err(|e| StoreError::Unavailable(format!("mutex poisoned: {e}")))?;
            f(&conn)
        })
        .await
        .map_err(|e| StoreError::Unavailable(format!("blocking task failed: {e}")))?
    }
}

/// Rebuild an `Address` from stored columns through the validator.
fn revalidate(local: &str, domain: &str) -> Result<Address> {
    Address::parse(&format!("{local}@{domain}")).map_err(|e| {
        warn!(%local, %domain, "stored row failed re-validation");
        StoreError::InvalidData(e)
    })
}

fn collect_addresses(rows: Vec<(String, String)>) -> Result<Vec<Address>> {
    rows.iter()
        .map(|(local, domain)| revalidate(local, domain))
        .collect()
}

#[async_trait]
impl Store for SqliteStore {
    async fn insert(&self, addr: &Address) -> Result<InsertResult> {
        let addr = addr.clone();
        self.with_conn(move |conn| {
            let existing: Option<i64> = conn
                .query_row(
                    "SELECT 1 FROM addresses WHERE domain = ?1 AND local = ?2",
                    params![addr.domain(), addr.local()],
                    |row| row.get(0),
                )
                .optional()?;
            if existing.is_some() {
                return Ok(InsertResult::AlreadyExists);
            }

            conn.execute(
                "INSERT INTO addresses (domain, local, hash, added_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    addr.domain(),
                    addr.local(),
                    i64::from(addr.hash_code()),
                    now_millis(),
                ],
            )?;

            debug!(address = %addr, "address inserted");
            Ok(InsertResult::Inserted)
        })
        .await
    }

    async fn contains(&self, addr: &Address) -> Result<bool> {
        let addr = addr.clone();
        self.with_conn(move |conn| {
            let found: Option<i64> = conn
                .query_row(
                    "SELECT 1 FROM addresses WHERE domain = ?1 AND local = ?2",
                    params![addr.domain(), addr.local()],
                    |row| row.get(0),
                )
                .optional()?;
            Ok(found.is_some())
        })
        .await
    }

    async fn remove(&self, addr: &Address) -> Result<bool> {
        let addr = addr.clone();
        self.with_conn(move |conn| {
            let removed = conn.execute(
                "DELETE FROM addresses WHERE domain = ?1 AND local = ?2",
                params![addr.domain(), addr.local()],
            )?;
            if removed > 0 {
                debug!(address = %addr, "address removed");
            }
            Ok(removed > 0)
        })
        .await
    }

    async fn count(&self) -> Result<u64> {
        self.with_conn(|conn| {
            let n: i64 = conn.query_row("SELECT COUNT(*) FROM addresses", [], |row| row.get(0))?;
            Ok(n as u64)
        })
        .await
    }

    async fn all(&self) -> Result<Vec<Address>> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare("SELECT local, domain FROM addresses ORDER BY domain, local")?;
            let rows = stmt
                .query_map([], |row| Ok((row.get("local")?, row.get("domain")?)))?
                .collect::<rusqlite::Result<Vec<(String, String)>>>()?;
            collect_addresses(rows)
        })
        .await
    }

    async fn in_domain(&self, domain: &str) -> Result<Vec<Address>> {
        let domain = fold_case(domain);
        self.with_conn(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT local, domain FROM addresses WHERE domain = ?1 ORDER BY local",
            )?;
            let rows = stmt
                .query_map(params![domain], |row| {
                    Ok((row.get("local")?, row.get("domain")?))
                })?
                .collect::<rusqlite::Result<Vec<(String, String)>>>()?;
            collect_addresses(rows)
        })
        .await
    }
}
