// ── Table data controller ──
//
// Owns one table's filter/sort/page state and recomputes the
// filter → sort → paginate pipeline on every mutation. The pipeline is
// pure over (rows, filters, sort), so recomputation on identical
// inputs yields identical output.

use super::filter::{Filterable, FilterState, FilterUpdate, filter};
use super::page::{clamp_page, page_slice, total_pages};
use super::range::parse_range;
use super::sort::{SortAccessor, SortState, sort};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// State and pipeline for a single data table.
///
/// Every mutator below keeps the invariants from the state model:
/// filter and page-size changes reset to page 1, sort changes do not,
/// and the current page is always clamped into `[1, total_pages]`
/// (page 1 when the filtered set is empty).
#[derive(Debug, Clone)]
pub struct TableController<T> {
    rows: Vec<T>,
    filters: FilterState,
    sort_state: SortState,
    current_page: usize,
    page_size: usize,
    /// Filtered + sorted rows, rebuilt whenever an input changes.
    processed: Vec<T>,
}

impl<T: Filterable + SortAccessor + Clone> TableController<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self::with_page_size(rows, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(rows: Vec<T>, page_size: usize) -> Self {
        let mut controller = Self {
            rows,
            filters: FilterState::default(),
            sort_state: SortState::default(),
            current_page: 1,
            page_size: page_size.max(1),
            processed: Vec::new(),
        };
        controller.recompute();
        controller
    }

    fn recompute(&mut self) {
        let filtered = filter(&self.rows, &self.filters);
        self.processed = sort(&filtered, &self.sort_state);
        self.current_page = clamp_page(self.current_page, self.total_pages());
    }

    // ── Mutators ─────────────────────────────────────────────────────

    /// Replace the raw rows (data refresh). Filter and sort state are
    /// kept; the current page is re-clamped against the new total.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.recompute();
    }

    /// Merge a partial filter change and reset to page 1.
    pub fn update_filters(&mut self, update: FilterUpdate) {
        self.filters.apply(update);
        self.current_page = 1;
        self.recompute();
    }

    /// Validate and apply a budget range from raw input text.
    ///
    /// Returns `false` — and leaves the previous valid range active —
    /// when the input does not validate.
    pub fn set_budget_range(&mut self, min_text: &str, max_text: &str) -> bool {
        let Some(range) = parse_range(min_text, max_text) else {
            return false;
        };
        self.update_filters(FilterUpdate {
            budget_range: Some(range),
            ..FilterUpdate::default()
        });
        true
    }

    /// Validate and apply a price range from raw input text.
    pub fn set_price_range(&mut self, min_text: &str, max_text: &str) -> bool {
        let Some(range) = parse_range(min_text, max_text) else {
            return false;
        };
        self.update_filters(FilterUpdate {
            price_range: Some(range),
            ..FilterUpdate::default()
        });
        true
    }

    /// Header click: toggle or switch the sort column. Does NOT reset
    /// the current page.
    pub fn handle_sort(&mut self, field: &str) {
        self.sort_state.cycle(field);
        self.recompute();
    }

    /// Replace the page size and reset to page 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.current_page = 1;
        self.recompute();
    }

    /// Jump to a page, clamped into range. No wraparound.
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = clamp_page(page, self.total_pages());
    }

    /// Advance one page; a no-op on the last page.
    pub fn next_page(&mut self) {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
        }
    }

    /// Step back one page; a no-op on the first page.
    pub fn previous_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    // ── Views ────────────────────────────────────────────────────────

    /// Rows on the current page.
    pub fn visible_rows(&self) -> &[T] {
        page_slice(&self.processed, self.current_page, self.page_size)
    }

    /// The full filtered + sorted collection. Exports read this, never
    /// just the visible page.
    pub fn sorted(&self) -> &[T] {
        &self.processed
    }

    /// Total rows matching the current filters.
    pub fn total_filtered(&self) -> usize {
        self.processed.len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.processed.len(), self.page_size)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort_state
    }
}
