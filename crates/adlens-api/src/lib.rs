//! Async client layer for the adlens campaign data store.
//!
//! Two interchangeable backends sit behind the [`Backend`] enum:
//!
//! - **[`RestClient`]** — thin wrapper over the store's PostgREST
//!   surface (`/rest/v1/campaigns`, `/rest/v1/inventory`). Rows pass
//!   through with their wire field names; domain mapping belongs to
//!   `adlens-core::convert`.
//! - **[`MockBackend`]** — in-memory sample data with simulated latency,
//!   for offline use and tests.
//!
//! Both expose the same operations: `list`, `create`, `update`, and
//! `delete` per table. There is no notification channel at this layer;
//! change subscription is provided by the core's data store.

pub mod error;
pub mod mock;
pub mod rest;
pub mod transport;
pub mod types;

pub use error::Error;
pub use mock::{MockBackend, sample_campaigns, sample_inventory};
pub use rest::RestClient;
pub use transport::{TlsMode, TransportConfig};
pub use types::{
    CampaignChanges, CampaignRecord, InventoryChanges, InventoryRecord, NewCampaign, NewInventory,
};

/// A handle to whichever backend the caller configured.
#[derive(Debug, Clone)]
pub enum Backend {
    Rest(RestClient),
    Mock(MockBackend),
}

impl Backend {
    pub async fn list_campaigns(&self) -> Result<Vec<CampaignRecord>, Error> {
        match self {
            Self::Rest(c) => c.list_campaigns().await,
            Self::Mock(m) => m.list_campaigns().await,
        }
    }

    pub async fn create_campaign(&self, new: &NewCampaign) -> Result<CampaignRecord, Error> {
        match self {
            Self::Rest(c) => c.create_campaign(new).await,
            Self::Mock(m) => m.create_campaign(new).await,
        }
    }

    pub async fn update_campaign(
        &self,
        id: &str,
        changes: &CampaignChanges,
    ) -> Result<CampaignRecord, Error> {
        match self {
            Self::Rest(c) => c.update_campaign(id, changes).await,
            Self::Mock(m) => m.update_campaign(id, changes).await,
        }
    }

    pub async fn delete_campaign(&self, id: &str) -> Result<(), Error> {
        match self {
            Self::Rest(c) => c.delete_campaign(id).await,
            Self::Mock(m) => m.delete_campaign(id).await,
        }
    }

    pub async fn list_inventory(&self) -> Result<Vec<InventoryRecord>, Error> {
        match self {
            Self::Rest(c) => c.list_inventory().await,
            Self::Mock(m) => m.list_inventory().await,
        }
    }

    pub async fn create_inventory(&self, new: &NewInventory) -> Result<InventoryRecord, Error> {
        match self {
            Self::Rest(c) => c.create_inventory(new).await,
            Self::Mock(m) => m.create_inventory(new).await,
        }
    }

    pub async fn update_inventory(
        &self,
        id: &str,
        changes: &InventoryChanges,
    ) -> Result<InventoryRecord, Error> {
        match self {
            Self::Rest(c) => c.update_inventory(id, changes).await,
            Self::Mock(m) => m.update_inventory(id, changes).await,
        }
    }

    pub async fn delete_inventory(&self, id: &str) -> Result<(), Error> {
        match self {
            Self::Rest(c) => c.delete_inventory(id).await,
            Self::Mock(m) => m.delete_inventory(id).await,
        }
    }
}
