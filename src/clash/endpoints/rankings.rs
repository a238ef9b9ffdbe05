use tracing::instrument;

use crate::clash::client::ClashClient;
use crate::clash::scope::LocationScope;
use crate::clash::types::{ItemsPage, TopPlayer};
use crate::error::AppError;

pub const DEFAULT_RANKING_LIMIT: u32 = 50;
/// Largest page the rankings endpoints accept.
pub const MAX_RANKING_LIMIT: u32 = 200;

pub fn clamp_limit(limit: u32) -> u32 {
    limit.clamp(1, MAX_RANKING_LIMIT)
}

impl ClashClient {
    /// Get the player leaderboard, either worldwide or for one location
    #[instrument(skip_all, fields(scope = %scope, limit = limit))]
    pub async fn fetch_top_players(
        &self,
        scope: LocationScope,
        limit: u32,
    ) -> Result<Vec<TopPlayer>, AppError> {
        let query = [("limit", clamp_limit(limit).to_string())];

        let page: ItemsPage<TopPlayer> = self.get(&scope.rankings_path(), &query).await?;
        Ok(page.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_is_clamped() {
        assert_eq!(clamp_limit(250), MAX_RANKING_LIMIT);
        assert_eq!(clamp_limit(200), 200);
        assert_eq!(clamp_limit(50), 50);
        assert_eq!(clamp_limit(0), 1);
    }
}
