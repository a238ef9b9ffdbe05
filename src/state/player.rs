use std::sync::Arc;

use tracing::instrument;

use crate::clash::{ClashClient, Player, PlayerTag};
use crate::db::NewFavoritePlayer;

use super::{FetchState, LoadOutcome};

/// State behind the player search screen.
#[derive(Debug)]
pub struct PlayerSearch {
    client: Arc<ClashClient>,
    state: FetchState<Player>,
}

impl PlayerSearch {
    pub fn new(client: Arc<ClashClient>) -> Self {
        Self {
            client,
            state: FetchState::new("player_search"),
        }
    }

    pub fn state(&self) -> &FetchState<Player> {
        &self.state
    }

    #[instrument(skip(self))]
    pub async fn load(&self, tag: &str) -> LoadOutcome {
        self.state
            .run(async {
                let tag = PlayerTag::parse(tag)?;
                self.client.fetch_player(&tag).await
            })
            .await
    }

    /// Win rate of the loaded player, `None` until a player has been loaded.
    pub fn win_rate(&self) -> Option<f64> {
        self.state
            .read(|s| s.result.as_ref().map(Player::win_rate))
    }

    /// Favorite entry for the loaded player, ready to be stored.
    pub fn favorite_record(&self, saved_at: i64) -> Option<NewFavoritePlayer> {
        self.state.read(|s| {
            s.result
                .as_ref()
                .map(|player| NewFavoritePlayer::from_player(player, saved_at))
        })
    }
}
