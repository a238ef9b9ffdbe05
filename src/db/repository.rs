use sqlx::SqlitePool;

use super::models::{FavoritePlayer, NewFavoritePlayer, NewSavedMatch, SavedMatch};
use crate::error::AppError;

const FAVORITE_PLAYER_COLUMNS: &str = "id, tag, name, trophies, saved_at";
const SAVED_MATCH_COLUMNS: &str = "id, battle_time, player_tag, opponent_name, team_crowns, \
     opponent_crowns, victory, battle_type, trophy_change, saved_at";

/// Local store for favorite players and saved matches.
///
/// Records are only ever inserted or deleted; saving the same player twice
/// yields two rows.
#[derive(Clone, Debug)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // === Favorite players ===

    pub async fn insert_favorite_player(
        &self,
        player: &NewFavoritePlayer,
    ) -> Result<FavoritePlayer, AppError> {
        let favorite = sqlx::query_as::<_, FavoritePlayer>(&format!(
            r#"
            INSERT INTO favorite_players (tag, name, trophies, saved_at)
            VALUES (?, ?, ?, ?)
            RETURNING {FAVORITE_PLAYER_COLUMNS}
            "#
        ))
        .bind(&player.tag)
        .bind(&player.name)
        .bind(player.trophies)
        .bind(player.saved_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(favorite)
    }

    /// Most recently saved first.
    pub async fn list_favorite_players(&self) -> Result<Vec<FavoritePlayer>, AppError> {
        let favorites = sqlx::query_as::<_, FavoritePlayer>(&format!(
            "SELECT {FAVORITE_PLAYER_COLUMNS} FROM favorite_players ORDER BY saved_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(favorites)
    }

    pub async fn delete_favorite_player(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM favorite_players WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // === Saved matches ===

    pub async fn insert_saved_match(&self, saved: &NewSavedMatch) -> Result<SavedMatch, AppError> {
        let saved = sqlx::query_as::<_, SavedMatch>(&format!(
            r#"
            INSERT INTO saved_matches (
                battle_time, player_tag, opponent_name, team_crowns, opponent_crowns,
                victory, battle_type, trophy_change, saved_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {SAVED_MATCH_COLUMNS}
            "#
        ))
        .bind(&saved.battle_time)
        .bind(&saved.player_tag)
        .bind(&saved.opponent_name)
        .bind(saved.team_crowns)
        .bind(saved.opponent_crowns)
        .bind(saved.victory)
        .bind(&saved.battle_type)
        .bind(saved.trophy_change)
        .bind(saved.saved_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(saved)
    }

    /// Most recently saved first.
    pub async fn list_saved_matches(&self) -> Result<Vec<SavedMatch>, AppError> {
        let matches = sqlx::query_as::<_, SavedMatch>(&format!(
            "SELECT {SAVED_MATCH_COLUMNS} FROM saved_matches ORDER BY saved_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(matches)
    }

    pub async fn delete_saved_match(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM saved_matches WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
