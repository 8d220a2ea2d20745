// ── Mock backend ──
//
// In-memory stand-in for the remote data store, seeded with a canned
// sample set. Mutations edit the in-memory rows; an artificial delay
// simulates network latency so consumers exercise their async paths.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tracing::debug;

use crate::error::Error;
use crate::types::{
    CampaignChanges, CampaignRecord, InventoryChanges, InventoryRecord, NewCampaign, NewInventory,
};

const DEFAULT_LATENCY: Duration = Duration::from_millis(150);

/// Offline backend with sample campaigns and inventory.
#[derive(Debug, Clone)]
pub struct MockBackend {
    campaigns: Arc<Mutex<Vec<CampaignRecord>>>,
    inventory: Arc<Mutex<Vec<InventoryRecord>>>,
    latency: Duration,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    /// Backend seeded with the sample data set.
    pub fn new() -> Self {
        Self {
            campaigns: Arc::new(Mutex::new(sample_campaigns())),
            inventory: Arc::new(Mutex::new(sample_inventory())),
            latency: DEFAULT_LATENCY,
        }
    }

    /// Backend with no rows (tests).
    pub fn empty() -> Self {
        Self {
            campaigns: Arc::new(Mutex::new(Vec::new())),
            inventory: Arc::new(Mutex::new(Vec::new())),
            latency: Duration::ZERO,
        }
    }

    /// Override the simulated latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn campaigns_mut(&self) -> MutexGuard<'_, Vec<CampaignRecord>> {
        // Poisoning cannot corrupt plain row data; recover the guard.
        self.campaigns.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn inventory_mut(&self) -> MutexGuard<'_, Vec<InventoryRecord>> {
        self.inventory.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn next_id(existing: impl Iterator<Item = u64>) -> String {
        (existing.max().unwrap_or(0) + 1).to_string()
    }

    // ── Campaigns ────────────────────────────────────────────────────

    pub async fn list_campaigns(&self) -> Result<Vec<CampaignRecord>, Error> {
        self.simulate_latency().await;
        Ok(self.campaigns_mut().clone())
    }

    pub async fn create_campaign(&self, new: &NewCampaign) -> Result<CampaignRecord, Error> {
        self.simulate_latency().await;
        let mut rows = self.campaigns_mut();
        let id = Self::next_id(rows.iter().filter_map(|r| r.id.parse().ok()));
        let record = CampaignRecord {
            id,
            name: new.name.clone(),
            media_type: new.media_type.clone(),
            channel: new.channel.clone(),
            start_date: new.start_date.clone(),
            end_date: new.end_date.clone(),
            status: new.status.clone(),
            budget: new.budget,
            impressions: new.impressions,
            clicks: new.clicks,
            reach: new.reach,
            roi: new.roi,
            created_at: None,
            updated_at: None,
        };
        debug!(id = %record.id, "mock: campaign created");
        rows.push(record.clone());
        Ok(record)
    }

    pub async fn update_campaign(
        &self,
        id: &str,
        changes: &CampaignChanges,
    ) -> Result<CampaignRecord, Error> {
        self.simulate_latency().await;
        let mut rows = self.campaigns_mut();
        let row = rows.iter_mut().find(|r| r.id == id).ok_or(Error::Api {
            status: 404,
            message: format!("campaign {id} not found"),
        })?;

        if let Some(ref name) = changes.name {
            row.name = name.clone();
        }
        if let Some(ref media_type) = changes.media_type {
            row.media_type = media_type.clone();
        }
        if let Some(ref channel) = changes.channel {
            row.channel = channel.clone();
        }
        if let Some(ref start_date) = changes.start_date {
            row.start_date = start_date.clone();
        }
        if let Some(ref end_date) = changes.end_date {
            row.end_date = end_date.clone();
        }
        if let Some(ref status) = changes.status {
            row.status = status.clone();
        }
        if let Some(budget) = changes.budget {
            row.budget = budget;
        }
        if let Some(impressions) = changes.impressions {
            row.impressions = impressions;
        }
        if let Some(clicks) = changes.clicks {
            row.clicks = clicks;
        }
        if let Some(reach) = changes.reach {
            row.reach = reach;
        }
        if let Some(roi) = changes.roi {
            row.roi = roi;
        }
        Ok(row.clone())
    }

    pub async fn delete_campaign(&self, id: &str) -> Result<(), Error> {
        self.simulate_latency().await;
        let mut rows = self.campaigns_mut();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        if rows.len() == before {
            return Err(Error::Api {
                status: 404,
                message: format!("campaign {id} not found"),
            });
        }
        Ok(())
    }

    // ── Inventory ────────────────────────────────────────────────────

    pub async fn list_inventory(&self) -> Result<Vec<InventoryRecord>, Error> {
        self.simulate_latency().await;
        Ok(self.inventory_mut().clone())
    }

    pub async fn create_inventory(&self, new: &NewInventory) -> Result<InventoryRecord, Error> {
        self.simulate_latency().await;
        let mut rows = self.inventory_mut();
        let id = Self::next_id(rows.iter().filter_map(|r| r.id.parse().ok()));
        let record = InventoryRecord {
            id,
            kind: new.kind.clone(),
            location: new.location.clone(),
            media_owner: new.media_owner.clone(),
            size: new.size.clone(),
            availability_start: new.availability_start.clone(),
            availability_end: new.availability_end.clone(),
            price: new.price,
            status: new.status.clone(),
            created_at: None,
            updated_at: None,
        };
        debug!(id = %record.id, "mock: inventory row created");
        rows.push(record.clone());
        Ok(record)
    }

    pub async fn update_inventory(
        &self,
        id: &str,
        changes: &InventoryChanges,
    ) -> Result<InventoryRecord, Error> {
        self.simulate_latency().await;
        let mut rows = self.inventory_mut();
        let row = rows.iter_mut().find(|r| r.id == id).ok_or(Error::Api {
            status: 404,
            message: format!("inventory row {id} not found"),
        })?;

        if let Some(ref kind) = changes.kind {
            row.kind = kind.clone();
        }
        if let Some(ref location) = changes.location {
            row.location = location.clone();
        }
        if let Some(ref media_owner) = changes.media_owner {
            row.media_owner = media_owner.clone();
        }
        if let Some(ref size) = changes.size {
            row.size = size.clone();
        }
        if let Some(ref availability_start) = changes.availability_start {
            row.availability_start = availability_start.clone();
        }
        if let Some(ref availability_end) = changes.availability_end {
            row.availability_end = availability_end.clone();
        }
        if let Some(price) = changes.price {
            row.price = price;
        }
        if let Some(ref status) = changes.status {
            row.status = status.clone();
        }
        Ok(row.clone())
    }

    pub async fn delete_inventory(&self, id: &str) -> Result<(), Error> {
        self.simulate_latency().await;
        let mut rows = self.inventory_mut();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        if rows.len() == before {
            return Err(Error::Api {
                status: 404,
                message: format!("inventory row {id} not found"),
            });
        }
        Ok(())
    }
}

// ── Sample data ──────────────────────────────────────────────────────

fn campaign(
    id: &str,
    name: &str,
    media_type: &str,
    channel: &str,
    dates: (&str, &str),
    status: &str,
    budget: f64,
    impressions: u64,
    clicks: u64,
    reach: u64,
    roi: f64,
) -> CampaignRecord {
    CampaignRecord {
        id: id.into(),
        name: name.into(),
        media_type: media_type.into(),
        channel: channel.into(),
        start_date: dates.0.into(),
        end_date: dates.1.into(),
        status: status.into(),
        budget,
        impressions,
        clicks,
        reach,
        roi,
        created_at: None,
        updated_at: None,
    }
}

/// The canned campaign sample set.
pub fn sample_campaigns() -> Vec<CampaignRecord> {
    vec![
        campaign(
            "1", "Summer Fashion Campaign", "Digital", "Google Ads",
            ("2024-06-01", "2024-08-31"), "Active", 50_000.0, 1_250_000, 25_000, 850_000, 3.2,
        ),
        campaign(
            "2", "Billboard Downtown", "Outdoor", "Clear Channel",
            ("2024-07-15", "2024-09-15"), "Active", 75_000.0, 2_100_000, 0, 1_200_000, 2.8,
        ),
        campaign(
            "3", "TV Prime Time Spots", "TV", "NBC",
            ("2024-05-01", "2024-07-31"), "Completed", 120_000.0, 3_500_000, 0, 2_800_000, 4.1,
        ),
        campaign(
            "4", "Social Media Blitz", "Social", "Meta Ads",
            ("2024-08-01", "2024-10-31"), "Active", 35_000.0, 980_000, 45_000, 650_000, 5.2,
        ),
        campaign(
            "5", "Radio Morning Drive", "Radio", "iHeartRadio",
            ("2024-09-01", "2024-11-30"), "Paused", 25_000.0, 750_000, 0, 450_000, 2.1,
        ),
        campaign(
            "6", "Print Magazine Ads", "Print", "Vogue",
            ("2024-10-01", "2024-12-31"), "Draft", 40_000.0, 0, 0, 0, 0.0,
        ),
        campaign(
            "7", "Digital Display Network", "Digital", "Google Display",
            ("2024-07-01", "2024-09-30"), "Active", 60_000.0, 1_800_000, 32_000, 950_000, 3.7,
        ),
        campaign(
            "8", "Transit Advertising", "Outdoor", "JCDecaux",
            ("2024-06-15", "2024-08-15"), "Completed", 45_000.0, 1_600_000, 0, 780_000, 2.9,
        ),
    ]
}

fn inventory(
    id: &str,
    kind: &str,
    location: &str,
    media_owner: &str,
    size: &str,
    window: (&str, &str),
    price: f64,
    status: &str,
) -> InventoryRecord {
    InventoryRecord {
        id: id.into(),
        kind: kind.into(),
        location: location.into(),
        media_owner: media_owner.into(),
        size: size.into(),
        availability_start: window.0.into(),
        availability_end: window.1.into(),
        price,
        status: status.into(),
        created_at: None,
        updated_at: None,
    }
}

/// The canned inventory sample set.
pub fn sample_inventory() -> Vec<InventoryRecord> {
    vec![
        inventory(
            "1", "Billboard", "Times Square, NYC", "Clear Channel", "14x48 ft",
            ("2024-11-01", "2024-12-31"), 85_000.0, "Available",
        ),
        inventory(
            "2", "Digital Display", "Los Angeles, CA", "Lamar Advertising", "10x20 ft",
            ("2024-10-15", "2024-11-30"), 45_000.0, "Booked",
        ),
        inventory(
            "3", "Transit Shelter", "Chicago, IL", "JCDecaux", "6x4 ft",
            ("2024-11-15", "2025-01-15"), 12_000.0, "Available",
        ),
        inventory(
            "4", "TV Commercial Slot", "National", "NBC Universal", "30 seconds",
            ("2024-12-01", "2024-12-31"), 150_000.0, "Pending",
        ),
        inventory(
            "5", "Radio Spot", "New York Metro", "iHeartRadio", "60 seconds",
            ("2024-10-01", "2024-12-31"), 8_000.0, "Available",
        ),
        inventory(
            "6", "Digital Banner", "San Francisco, CA", "Outfront Media", "12x24 ft",
            ("2024-11-01", "2025-02-28"), 32_000.0, "Available",
        ),
        inventory(
            "7", "Mall Kiosk", "Miami, FL", "Simon Property Group", "8x10 ft",
            ("2024-12-15", "2025-03-15"), 18_000.0, "Booked",
        ),
        inventory(
            "8", "Airport Display", "LAX Terminal", "Clear Channel Airports", "20x10 ft",
            ("2024-11-01", "2024-12-31"), 95_000.0, "Available",
        ),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_backend_lists_sample_rows() {
        let backend = MockBackend::new().with_latency(Duration::ZERO);
        assert_eq!(backend.list_campaigns().await.unwrap().len(), 8);
        assert_eq!(backend.list_inventory().await.unwrap().len(), 8);
    }

    #[tokio::test]
    async fn create_assigns_next_numeric_id() {
        let backend = MockBackend::new().with_latency(Duration::ZERO);
        let new = NewCampaign {
            name: "Holiday Push".into(),
            media_type: "Digital".into(),
            channel: "Google Ads".into(),
            start_date: "2024-12-01".into(),
            end_date: "2024-12-31".into(),
            status: "Draft".into(),
            budget: 10_000.0,
            impressions: 0,
            clicks: 0,
            reach: 0,
            roi: 0.0,
        };
        let created = backend.create_campaign(&new).await.unwrap();
        assert_eq!(created.id, "9");
        assert_eq!(backend.list_campaigns().await.unwrap().len(), 9);
    }

    #[tokio::test]
    async fn update_applies_only_populated_fields() {
        let backend = MockBackend::new().with_latency(Duration::ZERO);
        let changes = CampaignChanges {
            status: Some("Paused".into()),
            ..CampaignChanges::default()
        };
        let updated = backend.update_campaign("1", &changes).await.unwrap();
        assert_eq!(updated.status, "Paused");
        assert_eq!(updated.name, "Summer Fashion Campaign");
    }

    #[tokio::test]
    async fn missing_row_maps_to_api_404() {
        let backend = MockBackend::empty();
        let result = backend.delete_campaign("42").await;
        assert!(matches!(result, Err(Error::Api { status: 404, .. })));
    }
}
