//! Key-value storage shared by the signup and login operations.
//!
//! Layout:
//! - `memory.rs`: in-process map, used as test double and for ephemeral runs
//! - `schema.rs`: SQL DDL for the SQLite backend
//! - `sqlite.rs`: SQLite-backed persistent store

pub mod memory;
pub mod schema;
pub mod sqlite;

use std::future::Future;

use crate::config::{Config, StoreKind};
use crate::error::UdaanError;

pub use memory::MemoryStore;
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, SqliteStore};

/// Key under which the registered email is stored.
pub const USER_EMAIL_KEY: &str = "userEmail";
/// Key under which the registered password is stored.
pub const USER_PASSWORD_KEY: &str = "userPassword";

/// Get/set contract over string keys. Writes overwrite; last writer wins.
pub trait KeyValueStore: Clone + Send + Sync + 'static {
    fn get(&self, key: &str)
    -> impl Future<Output = Result<Option<String>, UdaanError>> + Send;

    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<(), UdaanError>> + Send;

    /// Writes every entry or none of them.
    fn set_many(
        &self,
        entries: &[(&str, &str)],
    ) -> impl Future<Output = Result<(), UdaanError>> + Send;
}

/// Backend selected at startup from [`Config::store`].
#[derive(Clone)]
pub enum AnyStore {
    Memory(MemoryStore),
    Sqlite(SqliteStore),
}

impl AnyStore {
    pub async fn open(cfg: &Config) -> Result<Self, UdaanError> {
        match cfg.store {
            StoreKind::Memory => Ok(AnyStore::Memory(MemoryStore::new())),
            StoreKind::Sqlite => Ok(AnyStore::Sqlite(
                SqliteStore::connect(&cfg.database_url).await?,
            )),
        }
    }
}

impl KeyValueStore for AnyStore {
    async fn get(&self, key: &str) -> Result<Option<String>, UdaanError> {
        match self {
            AnyStore::Memory(s) => s.get(key).await,
            AnyStore::Sqlite(s) => s.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), UdaanError> {
        match self {
            AnyStore::Memory(s) => s.set(key, value).await,
            AnyStore::Sqlite(s) => s.set(key, value).await,
        }
    }

    async fn set_many(&self, entries: &[(&str, &str)]) -> Result<(), UdaanError> {
        match self {
            AnyStore::Memory(s) => s.set_many(entries).await,
            AnyStore::Sqlite(s) => s.set_many(entries).await,
        }
    }
}
