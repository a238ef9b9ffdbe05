use tracing::instrument;

use crate::clash::client::ClashClient;
use crate::clash::types::{ItemsPage, Location};
use crate::error::AppError;

impl ClashClient {
    /// Get every location known to the API (regions and countries)
    #[instrument(skip_all)]
    pub async fn fetch_locations(&self) -> Result<Vec<Location>, AppError> {
        let page: ItemsPage<Location> = self.get("locations", &[]).await?;
        Ok(page.items)
    }
}
