use std::sync::Arc;

use tracing::instrument;

use crate::clash::{Battle, ClashClient, PlayerTag};
use crate::db::NewSavedMatch;

use super::{FetchState, LoadOutcome};

/// Aggregates shown above a battle log.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BattleStats {
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
    /// Wins over all battles (draws included) as a percentage.
    pub win_rate: f64,
    /// Own-side crowns per battle.
    pub average_crowns: f64,
}

impl BattleStats {
    pub fn from_battles(battles: &[Battle]) -> Self {
        if battles.is_empty() {
            return Self::default();
        }

        let total = battles.len();
        let wins = battles.iter().filter(|b| b.is_victory()).count();
        let draws = battles.iter().filter(|b| b.is_draw()).count();
        let crowns: i64 = battles
            .iter()
            .filter_map(|b| b.own().and_then(|p| p.crowns))
            .map(i64::from)
            .sum();

        Self {
            wins,
            losses: total - wins - draws,
            draws,
            win_rate: wins as f64 / total as f64 * 100.0,
            average_crowns: crowns as f64 / total as f64,
        }
    }
}

/// State behind the battle log screen.
#[derive(Debug)]
pub struct BattleLog {
    client: Arc<ClashClient>,
    state: FetchState<Vec<Battle>>,
}

impl BattleLog {
    pub fn new(client: Arc<ClashClient>) -> Self {
        Self {
            client,
            state: FetchState::new("battle_log"),
        }
    }

    pub fn state(&self) -> &FetchState<Vec<Battle>> {
        &self.state
    }

    #[instrument(skip(self))]
    pub async fn load(&self, tag: &str) -> LoadOutcome {
        self.state
            .run(async {
                let tag = PlayerTag::parse(tag)?;
                self.client.fetch_battles(&tag).await
            })
            .await
    }

    /// Recomputed from the current result on every call.
    pub fn stats(&self) -> BattleStats {
        self.state.read(|s| {
            s.result
                .as_deref()
                .map(BattleStats::from_battles)
                .unwrap_or_default()
        })
    }

    /// Saved-match entry for the most recent loaded battle.
    pub fn latest_match_record(&self, player_tag: &PlayerTag, saved_at: i64) -> Option<NewSavedMatch> {
        self.state.read(|s| {
            s.result
                .as_ref()
                .and_then(|battles| battles.first())
                .map(|battle| NewSavedMatch::from_battle(battle, player_tag, saved_at))
        })
    }
}
