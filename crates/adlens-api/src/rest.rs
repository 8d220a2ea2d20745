// ── REST client for the remote data store ──
//
// Thin wrapper over the store's PostgREST surface. Field-name mapping
// and domain validation are deliberately NOT done here; rows pass
// through as the store serves them.

use reqwest::header::HeaderValue;
use secrecy::SecretString;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;
use crate::types::{
    CampaignChanges, CampaignRecord, InventoryChanges, InventoryRecord, NewCampaign, NewInventory,
};

const CAMPAIGNS_TABLE: &str = "campaigns";
const INVENTORY_TABLE: &str = "inventory";

/// Async client for the campaign data store.
///
/// Cheap to clone — the underlying `reqwest::Client` is an `Arc`.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base: Url,
}

impl RestClient {
    /// Build a client from the store URL and service key.
    pub fn new(base: Url, api_key: &SecretString, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client(api_key)?;
        Ok(Self { http, base })
    }

    /// Build a client around a preconfigured `reqwest::Client` (tests).
    pub fn with_client(http: reqwest::Client, base: Url) -> Self {
        Self { http, base }
    }

    fn table_url(&self, table: &str) -> Result<Url, Error> {
        let base = self.base.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/rest/v1/{table}"))?)
    }

    // ── Campaigns ────────────────────────────────────────────────────

    /// Fetch all campaigns, newest first.
    pub async fn list_campaigns(&self) -> Result<Vec<CampaignRecord>, Error> {
        self.list(CAMPAIGNS_TABLE).await
    }

    /// Insert a campaign and return the stored row.
    pub async fn create_campaign(&self, new: &NewCampaign) -> Result<CampaignRecord, Error> {
        self.create(CAMPAIGNS_TABLE, new).await
    }

    /// Apply a partial update to a campaign and return the stored row.
    pub async fn update_campaign(
        &self,
        id: &str,
        changes: &CampaignChanges,
    ) -> Result<CampaignRecord, Error> {
        self.update(CAMPAIGNS_TABLE, id, changes).await
    }

    /// Delete a campaign by id.
    pub async fn delete_campaign(&self, id: &str) -> Result<(), Error> {
        self.delete(CAMPAIGNS_TABLE, id).await
    }

    // ── Inventory ────────────────────────────────────────────────────

    /// Fetch all inventory rows, newest first.
    pub async fn list_inventory(&self) -> Result<Vec<InventoryRecord>, Error> {
        self.list(INVENTORY_TABLE).await
    }

    /// Insert an inventory row and return the stored row.
    pub async fn create_inventory(&self, new: &NewInventory) -> Result<InventoryRecord, Error> {
        self.create(INVENTORY_TABLE, new).await
    }

    /// Apply a partial update to an inventory row and return the stored row.
    pub async fn update_inventory(
        &self,
        id: &str,
        changes: &InventoryChanges,
    ) -> Result<InventoryRecord, Error> {
        self.update(INVENTORY_TABLE, id, changes).await
    }

    /// Delete an inventory row by id.
    pub async fn delete_inventory(&self, id: &str) -> Result<(), Error> {
        self.delete(INVENTORY_TABLE, id).await
    }

    // ── Generic table operations ─────────────────────────────────────

    async fn list<T: DeserializeOwned>(&self, table: &str) -> Result<Vec<T>, Error> {
        debug!(table, "listing rows");
        let response = self
            .http
            .get(self.table_url(table)?)
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?;
        expect_rows(response).await
    }

    async fn create<T, B>(&self, table: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + Sync,
    {
        debug!(table, "inserting row");
        let response = self
            .http
            .post(self.table_url(table)?)
            .header("Prefer", HeaderValue::from_static("return=representation"))
            .json(body)
            .send()
            .await?;
        expect_single(response).await
    }

    async fn update<T, B>(&self, table: &str, id: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + Sync,
    {
        debug!(table, id, "updating row");
        let response = self
            .http
            .patch(self.table_url(table)?)
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", HeaderValue::from_static("return=representation"))
            .json(body)
            .send()
            .await?;
        expect_single(response).await
    }

    async fn delete(&self, table: &str, id: &str) -> Result<(), Error> {
        debug!(table, id, "deleting row");
        let response = self
            .http
            .delete(self.table_url(table)?)
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Error::from_response(response).await)
        }
    }
}

/// Deserialize a successful response as a row set.
async fn expect_rows<T: DeserializeOwned>(response: reqwest::Response) -> Result<Vec<T>, Error> {
    if !response.status().is_success() {
        return Err(Error::from_response(response).await);
    }
    response.json().await.map_err(|e| Error::Deserialization {
        message: e.to_string(),
    })
}

/// PostgREST wraps single-row mutations in a one-element array.
async fn expect_single<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, Error> {
    let mut rows: Vec<T> = expect_rows(response).await?;
    match rows.pop() {
        Some(row) if rows.is_empty() => Ok(row),
        Some(_) => Err(Error::Deserialization {
            message: "expected exactly one row, got several".into(),
        }),
        None => Err(Error::Deserialization {
            message: "expected exactly one row, got none".into(),
        }),
    }
}
