mod migrations;
mod models;
mod repository;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

use crate::error::AppError;

pub use migrations::run_migrations;
pub use models::{FavoritePlayer, NewFavoritePlayer, NewSavedMatch, SavedMatch};
pub use repository::Repository;

/// Open (creating if needed) the favorites database and bring its schema up to date.
pub async fn connect(database_url: &str) -> Result<Repository, AppError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    // In-memory databases are per connection, keep a single one around.
    let max_connections = if database_url.contains(":memory:") { 1 } else { 4 };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;
    info!(database_url, "🗄️ Database ready");

    Ok(Repository::new(pool))
}

/// Current time as stored in `saved_at` columns.
pub fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}
