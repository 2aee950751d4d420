//! Persistence collaborator backed by SQLite through sqlx.
//!
//! Every query function takes any [`SqliteExecutor`](sqlx::SqliteExecutor), so it runs the same way
//! against a pool or inside an open transaction (`&mut *tx`).

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod article;
pub mod comment;

const SCHEMA: &str = include_str!("schema.sql");
const SEED: &str = include_str!("seed.sql");

/// Returns `true` if `url` points at an in-memory database.
#[must_use]
pub fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Open a connection pool for `url`.
///
/// In-memory databases live only as long as their connection, so they get a single connection
/// that is never recycled, whatever `max_connections` says.
pub async fn connect(url: &str, max_connections: u32) -> sqlx::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = if is_in_memory(url) {
        SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections.max(1))
    };
    let pool = pool.connect_with(options).await?;
    tracing::debug!(url, "database pool opened");
    Ok(pool)
}

/// Create the `article` and `comment` tables when they do not exist yet.
pub async fn init_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}

/// Insert the sample articles and comments into a database that holds no article yet.
///
/// A database that already has articles is left untouched, so rows removed since the last start
/// stay removed.
pub async fn seed(pool: &SqlitePool) -> sqlx::Result<()> {
    let (articles,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM article").fetch_one(pool).await?;
    if articles > 0 {
        tracing::debug!(articles, "database already holds articles, sample data skipped");
        return Ok(());
    }
    let result = sqlx::raw_sql(SEED).execute(pool).await?;
    tracing::info!(rows = result.rows_affected(), "sample data loaded");
    Ok(())
}

/// Open an in-memory pool with the schema and the sample data in place.
pub async fn memory_with_samples() -> sqlx::Result<SqlitePool> {
    let pool = connect("sqlite::memory:", 1).await?;
    init_schema(&pool).await?;
    seed(&pool).await?;
    Ok(pool)
}
