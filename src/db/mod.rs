pub mod entities;
pub mod favorites;
pub mod pool;
pub mod users;

pub use pool::create_pool;

use sqlx::SqlitePool;

use crate::error::Result;

/// Database handle type (pool is internally reference counted)
pub type Db = SqlitePool;

/// Open the database at the given URL and bring the schema up to date
///
/// Runs the migrations embedded from `./migrations` on every start; already
/// applied migrations are skipped.
pub async fn open_database(database_url: &str, max_connections: u32) -> Result<Db> {
    tracing::info!("Opening database at: {}", database_url);

    let pool = create_pool(database_url, max_connections).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database initialized successfully");

    Ok(pool)
}
