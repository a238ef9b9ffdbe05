use std::sync::Arc;

use tracing::instrument;

use crate::clash::{ClashClient, Location, LocationScope, TopPlayer};

use super::{FetchState, LoadOutcome};

/// State behind the leaderboard screen and its region picker.
#[derive(Debug)]
pub struct Leaderboard {
    client: Arc<ClashClient>,
    players: FetchState<Vec<TopPlayer>>,
    locations: FetchState<Vec<Location>>,
}

impl Leaderboard {
    pub fn new(client: Arc<ClashClient>) -> Self {
        Self {
            client,
            players: FetchState::new("leaderboard"),
            locations: FetchState::new("locations"),
        }
    }

    pub fn players(&self) -> &FetchState<Vec<TopPlayer>> {
        &self.players
    }

    pub fn locations(&self) -> &FetchState<Vec<Location>> {
        &self.locations
    }

    #[instrument(skip(self))]
    pub async fn load(&self, scope: LocationScope, limit: u32) -> LoadOutcome {
        self.players
            .run(self.client.fetch_top_players(scope, limit))
            .await
    }

    #[instrument(skip(self))]
    pub async fn load_locations(&self) -> LoadOutcome {
        self.locations.run(self.client.fetch_locations()).await
    }

    /// Loaded locations that are countries, sorted by name.
    pub fn countries(&self) -> Vec<Location> {
        let mut countries: Vec<Location> = self.locations.read(|s| {
            s.result
                .iter()
                .flatten()
                .filter(|l| l.is_country)
                .cloned()
                .collect()
        });
        countries.sort_by(|a, b| a.name.cmp(&b.name));
        countries
    }
}
