use crate::config::{insights::InsightsConfig, server::ServerConfig};
use crate::services::insights::{InsightsClient, InsightsService};
use crate::store::DataStore;

/// Session state shared by every handler through an `Extension` layer.
#[derive(Clone)]
pub struct AppState {
    pub store: DataStore,
    pub insights: InsightsService,
}

impl AppState {
    pub fn new(store: DataStore, insights: InsightsService) -> Self {
        Self { store, insights }
    }

    pub fn from_config(server: &ServerConfig, insights: InsightsConfig) -> anyhow::Result<Self> {
        let store = if server.seed_fixtures {
            DataStore::seeded()
        } else {
            DataStore::new()
        };
        let insights = InsightsService::new(InsightsClient::new(insights)?);
        Ok(Self::new(store, insights))
    }
}
