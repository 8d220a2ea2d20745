// ── Wire types ──
//
// Row shapes exactly as the data store serves them: snake_case columns,
// ISO-8601 date strings. Conversion to domain types lives in
// `adlens-core::convert`, NOT here.

use serde::{Deserialize, Serialize};

/// A campaign row as stored in the `campaigns` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignRecord {
    pub id: String,
    pub name: String,
    pub media_type: String,
    pub channel: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    pub budget: f64,
    pub impressions: u64,
    pub clicks: u64,
    pub reach: u64,
    pub roi: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// An inventory row as stored in the `inventory` table.
///
/// `kind` maps to the store's `type` column — `type` is reserved in Rust.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub media_owner: String,
    pub size: String,
    pub availability_start: String,
    pub availability_end: String,
    pub price: f64,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Insert payload for a new campaign — the store assigns `id` and the
/// audit columns.
#[derive(Debug, Clone, Serialize)]
pub struct NewCampaign {
    pub name: String,
    pub media_type: String,
    pub channel: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    pub budget: f64,
    pub impressions: u64,
    pub clicks: u64,
    pub reach: u64,
    pub roi: f64,
}

/// Insert payload for a new inventory row.
#[derive(Debug, Clone, Serialize)]
pub struct NewInventory {
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub media_owner: String,
    pub size: String,
    pub availability_start: String,
    pub availability_end: String,
    pub price: f64,
    pub status: String,
}

/// Partial update for a campaign row. Only populated fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CampaignChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impressions: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clicks: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reach: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roi: Option<f64>,
}

impl CampaignChanges {
    /// True when no field is populated — callers skip the round trip.
    pub fn is_empty(&self) -> bool {
        serde_json::to_value(self)
            .map(|v| v.as_object().is_some_and(serde_json::Map::is_empty))
            .unwrap_or(true)
    }
}

/// Partial update for an inventory row.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InventoryChanges {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
