// ── Refresh logic ──
//
// Pulls both tables from the backend, converts to domain types, and
// replaces the store snapshots. On fetch failure the store is left
// untouched, so consumers keep operating on the last good data.
// Rows that fail conversion are dropped with a warning rather than
// poisoning the whole refresh.

use tracing::{debug, warn};

use adlens_api::Backend;

use super::DataStore;
use crate::error::CoreError;
use crate::model::{Campaign, InventoryItem};

/// Row counts from one refresh cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshStats {
    pub campaigns: usize,
    pub inventory: usize,
    /// Wire rows dropped because they failed conversion.
    pub skipped: usize,
}

impl DataStore {
    /// Fetch everything from `backend` and replace both snapshots.
    ///
    /// Errors propagate to the caller without touching the store; the
    /// previous (possibly stale or empty) snapshots stay in place.
    pub async fn refresh(&self, backend: &Backend) -> Result<RefreshStats, CoreError> {
        let (campaigns_res, inventory_res) =
            tokio::join!(backend.list_campaigns(), backend.list_inventory());

        let campaign_records = campaigns_res?;
        let inventory_records = inventory_res?;

        let mut skipped = 0usize;

        let campaigns: Vec<Campaign> = campaign_records
            .into_iter()
            .filter_map(|record| match Campaign::try_from(record) {
                Ok(campaign) => Some(campaign),
                Err(e) => {
                    warn!(error = %e, "dropping malformed campaign row");
                    skipped += 1;
                    None
                }
            })
            .collect();

        let inventory: Vec<InventoryItem> = inventory_records
            .into_iter()
            .filter_map(|record| match InventoryItem::try_from(record) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!(error = %e, "dropping malformed inventory row");
                    skipped += 1;
                    None
                }
            })
            .collect();

        let stats = RefreshStats {
            campaigns: campaigns.len(),
            inventory: inventory.len(),
            skipped,
        };

        self.set_campaigns(campaigns);
        self.set_inventory(inventory);

        debug!(
            campaigns = stats.campaigns,
            inventory = stats.inventory,
            skipped = stats.skipped,
            "data refresh complete"
        );
        Ok(stats)
    }
}
