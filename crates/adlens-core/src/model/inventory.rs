// ── Inventory domain types ──

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Booking state of an inventory placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum InventoryStatus {
    Available,
    Booked,
    Pending,
}

impl InventoryStatus {
    pub fn is_bookable(&self) -> bool {
        matches!(self, Self::Available)
    }
}

/// A purchasable ad placement.
///
/// `kind`, `location`, `media_owner`, and `size` are free text as
/// entered by media owners — "Billboard", "30 seconds", "14x48 ft".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub kind: String,
    pub location: String,
    pub media_owner: String,
    pub size: String,
    pub availability_start: NaiveDate,
    pub availability_end: NaiveDate,
    pub price: f64,
    pub status: InventoryStatus,
}
