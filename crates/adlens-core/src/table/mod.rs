//! The generic tabular data engine: filter → sort → paginate.
//!
//! Every data table is driven by one [`TableController`], which owns
//! the filter/sort/page state for that table and recomputes the
//! pipeline synchronously on each state change. The stages themselves
//! ([`filter::filter`], [`sort::sort`], [`page::page_slice`]) are pure
//! functions, usable on their own.

pub mod controller;
pub mod filter;
pub mod page;
pub mod range;
pub mod sort;

pub use controller::{DEFAULT_PAGE_SIZE, TableController};
pub use filter::{
    DateRange, Filterable, FilterState, FilterUpdate, MediaTypeFilter, NumericRange, StatusFilter,
};
pub use range::{parse_range, validate_range};
pub use sort::{SortAccessor, SortDirection, SortState, SortValue};
