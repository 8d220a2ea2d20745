// ── Snapshot store ──
//
// Holds the last successfully fetched entity collections. Readers get
// cheap `Arc` snapshots; a watch channel carries change notification.
// There is exactly one logical writer (the refresh path), so snapshots
// are replaced wholesale rather than merged.

use std::sync::Arc;

use arc_swap::ArcSwap;
use tokio::sync::watch;

use crate::model::{Campaign, InventoryItem};

/// Last-known-good entity snapshots.
pub struct DataStore {
    campaigns: ArcSwap<Vec<Campaign>>,
    inventory: ArcSwap<Vec<InventoryItem>>,
    /// Bumped on every snapshot replacement.
    version: watch::Sender<u64>,
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DataStore {
    pub fn new() -> Self {
        let (version, _) = watch::channel(0u64);
        Self {
            campaigns: ArcSwap::from_pointee(Vec::new()),
            inventory: ArcSwap::from_pointee(Vec::new()),
            version,
        }
    }

    /// Current campaign snapshot (cheap `Arc` clone).
    pub fn campaigns_snapshot(&self) -> Arc<Vec<Campaign>> {
        self.campaigns.load_full()
    }

    /// Current inventory snapshot (cheap `Arc` clone).
    pub fn inventory_snapshot(&self) -> Arc<Vec<InventoryItem>> {
        self.inventory.load_full()
    }

    /// Replace the campaign snapshot and notify subscribers.
    pub fn set_campaigns(&self, campaigns: Vec<Campaign>) {
        self.campaigns.store(Arc::new(campaigns));
        self.bump_version();
    }

    /// Replace the inventory snapshot and notify subscribers.
    pub fn set_inventory(&self, inventory: Vec<InventoryItem>) {
        self.inventory.store(Arc::new(inventory));
        self.bump_version();
    }

    /// Subscribe to snapshot changes. The receiver yields the current
    /// version immediately and on every subsequent replacement.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.version.subscribe()
    }

    pub fn version(&self) -> u64 {
        *self.version.borrow()
    }

    fn bump_version(&self) {
        // `send_modify` updates even with zero receivers.
        self.version.send_modify(|v| *v += 1);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::model::{CampaignStatus, MediaType};

    fn campaign(name: &str) -> Campaign {
        Campaign {
            id: name.into(),
            name: name.into(),
            media_type: MediaType::Digital,
            channel: "ch".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 8, 31).unwrap(),
            status: CampaignStatus::Active,
            budget: 1.0,
            impressions: 0,
            clicks: 0,
            reach: 0,
            roi: 1.0,
        }
    }

    #[test]
    fn snapshots_start_empty() {
        let store = DataStore::new();
        assert!(store.campaigns_snapshot().is_empty());
        assert!(store.inventory_snapshot().is_empty());
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn replacement_bumps_version() {
        let store = DataStore::new();
        store.set_campaigns(vec![campaign("A")]);
        assert_eq!(store.version(), 1);
        assert_eq!(store.campaigns_snapshot().len(), 1);

        store.set_campaigns(Vec::new());
        assert_eq!(store.version(), 2);
        assert!(store.campaigns_snapshot().is_empty());
    }

    #[test]
    fn subscribers_observe_changes() {
        let store = DataStore::new();
        let mut rx = store.subscribe();
        assert_eq!(*rx.borrow_and_update(), 0);

        store.set_campaigns(vec![campaign("A")]);
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), 1);
    }

    #[test]
    fn old_snapshots_remain_readable() {
        let store = DataStore::new();
        store.set_campaigns(vec![campaign("A")]);
        let old = store.campaigns_snapshot();
        store.set_campaigns(vec![campaign("B"), campaign("C")]);

        // The earlier Arc still sees the data it captured.
        assert_eq!(old.len(), 1);
        assert_eq!(store.campaigns_snapshot().len(), 2);
    }
}
