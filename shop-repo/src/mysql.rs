//! MySQL repository adapter.

use sqlx::MySqlPool;
use sqlx::mysql::{MySqlPoolOptions, MySqlQueryResult};

use crate::store::impl_store_repository;

/// MySQL repository implementation.
pub struct MySqlRepo {
    pool: MySqlPool,
}

impl MySqlRepo {
    /// Connects a pool of at most `max_connections` and creates missing tables.
    pub async fn new(database_url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        let ddl = include_str!("../migrations/mysql/0001_create_tables.sql");
        sqlx::raw_sql(ddl).execute(&pool).await?;

        tracing::info!(max_connections, "MySQL pool ready");
        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    fn last_insert_id(result: &MySqlQueryResult) -> i64 {
        result.last_insert_id() as i64
    }
}

impl_store_repository!(MySqlRepo);
