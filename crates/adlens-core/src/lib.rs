//! Domain model, tabular data engine, and shared services for adlens.
//!
//! This crate owns everything between the wire client (`adlens-api`)
//! and the UI layer (the CLI):
//!
//! - **Domain model** ([`model`]) — canonical [`Campaign`] and
//!   [`InventoryItem`] types with typed enums for media type and status.
//! - **[`TableController`]** — the per-table state machine driving the
//!   filter → sort → paginate pipeline, with the page-reset and
//!   sort-toggle rules every table in the product relies on.
//! - **[`DataStore`]** — last-known-good entity snapshots with watch
//!   based change notification; [`DataStore::refresh`] pulls from a
//!   backend and keeps stale data on failure.
//! - **Conversion** ([`convert`]) — pure wire→domain transforms mapping
//!   the store's snake_case rows onto the model.
//! - **[`export`]** — ordered-column CSV serialization of processed
//!   row sets.
//! - **[`kpi`]** — summary figures and media-type breakdowns behind the
//!   dashboard cards.
//! - **[`Assistant`]** — the scripted keyword-matching helper; a rule
//!   table, not a model.

pub mod assistant;
pub mod config;
pub mod convert;
pub mod error;
pub mod export;
pub mod fmt;
pub mod import;
pub mod kpi;
pub mod model;
pub mod store;
pub mod table;

// ── Primary re-exports ──────────────────────────────────────────────
pub use assistant::{Assistant, AssistantReply};
pub use config::{StoreConfig, mock_backend};
pub use error::CoreError;
pub use kpi::{KpiSummary, MediaTypeSlice, media_type_breakdown, top_by_roi};
pub use store::{DataStore, RefreshStats};
pub use table::{
    DEFAULT_PAGE_SIZE, DateRange, FilterState, FilterUpdate, Filterable, MediaTypeFilter,
    NumericRange, SortAccessor, SortDirection, SortState, StatusFilter, TableController,
    parse_range, validate_range,
};

// Re-export model types at the crate root for ergonomics.
pub use model::{Campaign, CampaignStatus, InventoryItem, InventoryStatus, MediaType};
