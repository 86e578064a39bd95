//! # Shop Repository
//!
//! Concrete repository implementations (adapters) for the storefront.
//! This crate provides database adapters that implement the `StoreRepository` port.

#[cfg(not(any(feature = "mysql", feature = "sqlite")))]
compile_error!("Enable a repo feature: `mysql` or `sqlite`.");

use shop_types::RepoError;

mod queries;
mod store;

#[cfg(feature = "mysql")]
pub mod mysql;
#[cfg(feature = "sqlite")]
pub mod sqlite;


#[cfg(feature = "mysql")]
pub use mysql::MySqlRepo;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepo;

/// Database backend selected from the scheme of a connection URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    MySql,
    Sqlite,
}

impl Backend {
    /// Picks the backend for `database_url`, e.g. `mysql://root@localhost/store`
    /// or `sqlite://store.db?mode=rwc`.
    pub fn from_url(database_url: &str) -> anyhow::Result<Self> {
        if database_url.starts_with("mysql:") || database_url.starts_with("mariadb:") {
            Ok(Self::MySql)
        } else if database_url.starts_with("sqlite:") {
            Ok(Self::Sqlite)
        } else {
            anyhow::bail!("Unsupported database URL scheme: {}", database_url)
        }
    }
}

pub(crate) fn db_error(err: sqlx::Error) -> RepoError {
    RepoError::Database(err.to_string())
}
