use sqlx::SqlitePool;
use tracing::info;

use crate::error::AppError;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS favorite_players (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    tag TEXT NOT NULL,
    name TEXT NOT NULL,
    trophies INTEGER,
    saved_at INTEGER NOT NULL DEFAULT (unixepoch())
);

CREATE TABLE IF NOT EXISTS saved_matches (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    battle_time TEXT NOT NULL,
    player_tag TEXT NOT NULL,
    opponent_name TEXT,
    team_crowns INTEGER,
    opponent_crowns INTEGER,
    victory INTEGER NOT NULL,
    battle_type TEXT,
    trophy_change INTEGER,
    saved_at INTEGER NOT NULL DEFAULT (unixepoch())
);

CREATE INDEX IF NOT EXISTS idx_favorite_players_saved_at ON favorite_players(saved_at);
CREATE INDEX IF NOT EXISTS idx_saved_matches_saved_at ON saved_matches(saved_at);
"#;

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    info!("🗄️ Database migrations completed");
    Ok(())
}
