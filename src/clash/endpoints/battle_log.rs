use tracing::instrument;

use crate::clash::client::ClashClient;
use crate::clash::tag::PlayerTag;
use crate::clash::types::Battle;
use crate::error::AppError;

impl ClashClient {
    /// Get the recent battles of a player, most recent first as returned by the API
    #[instrument(skip_all, fields(tag = %tag))]
    pub async fn fetch_battles(&self, tag: &PlayerTag) -> Result<Vec<Battle>, AppError> {
        let path = format!("players/{}/battlelog", tag.encoded());

        self.get(&path, &[]).await
    }
}
