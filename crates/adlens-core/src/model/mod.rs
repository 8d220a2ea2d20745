//! Canonical domain types for campaigns and ad inventory.

pub mod campaign;
pub mod inventory;

pub use campaign::{Campaign, CampaignStatus, MediaType};
pub use inventory::{InventoryItem, InventoryStatus};
