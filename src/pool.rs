//! Connection pool lifecycle: bounded PostgreSQL pool, schema at init, close at shutdown.

use crate::config::PoolSettings;
use crate::migration::apply_schema;
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool, Postgres};
use std::str::FromStr;

/// Owned handle to the process-wide pool. Cheap to clone; all clones share one pool.
#[derive(Clone, Debug)]
pub struct Database {
    pool: PgPool,
}

fn pool_options(settings: &PoolSettings) -> PgPoolOptions {
    PgPoolOptions::new()
        .min_connections(settings.min_connections)
        .max_connections(settings.max_connections)
}

impl Database {
    /// Open the pool and apply the schema. Fails if the database is unreachable.
    pub async fn init(settings: &PoolSettings) -> Result<Self, sqlx::Error> {
        let pool = pool_options(settings).connect(&settings.database_url).await?;
        apply_schema(&pool).await?;
        tracing::info!(
            min_connections = settings.min_connections,
            max_connections = settings.max_connections,
            "database pool initialized"
        );
        Ok(Database { pool })
    }

    /// Pool that opens connections on first use and skips schema setup.
    pub fn connect_lazy(settings: &PoolSettings) -> Result<Self, sqlx::Error> {
        let pool = pool_options(settings).connect_lazy(&settings.database_url)?;
        Ok(Database { pool })
    }

    /// Wait for a free connection. The connection goes back to the pool when dropped.
    pub async fn acquire(&self) -> Result<PoolConnection<Postgres>, sqlx::Error> {
        self.pool.acquire().await
    }

    /// Return a connection to the pool ahead of its scope end.
    pub fn release(&self, conn: PoolConnection<Postgres>) {
        drop(conn);
    }

    /// Close every connection; later `acquire` calls fail with `PoolClosed`.
    pub async fn shutdown(&self) {
        self.pool.close().await;
        tracing::info!("database pool closed");
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }

    /// Connections currently open (idle or in use).
    pub fn size(&self) -> u32 {
        self.pool.size()
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Ensure the database named in `database_url` exists, creating it through the
/// `postgres` maintenance database if not. Used for the isolated test database.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), sqlx::Error> {
    let opts = PgConnectOptions::from_str(database_url)?;
    let db_name = match opts.get_database() {
        Some(name) if !name.is_empty() && name != "postgres" => name.to_string(),
        _ => return Ok(()),
    };
    let mut conn = opts.clone().database("postgres").connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "database created");
    }
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
