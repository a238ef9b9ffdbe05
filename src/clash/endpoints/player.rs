use tracing::instrument;

use crate::clash::client::ClashClient;
use crate::clash::tag::PlayerTag;
use crate::clash::types::Player;
use crate::error::AppError;

impl ClashClient {
    /// Get a player profile by tag
    #[instrument(skip_all, fields(tag = %tag))]
    pub async fn fetch_player(&self, tag: &PlayerTag) -> Result<Player, AppError> {
        let path = format!("players/{}", tag.encoded());

        self.get(&path, &[]).await
    }
}
