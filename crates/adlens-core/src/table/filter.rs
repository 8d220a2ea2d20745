// ── Filter state and predicates ──
//
// Pure, order-preserving narrowing of a row collection. All predicates
// compose with logical AND; there is no OR or grouping support.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{Campaign, InventoryItem, MediaType};

/// Media-type selector. `All` disables the predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MediaTypeFilter {
    #[default]
    All,
    Only(MediaType),
}

/// Status selector, matched against the entity's status label so one
/// filter state serves both campaign and inventory tables.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(String),
}

impl StatusFilter {
    fn admits(&self, status_label: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted.eq_ignore_ascii_case(status_label),
        }
    }
}

/// An optional date window. Bounds are independent; either may be unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Containment check: the item's span must start on or after the
    /// range start AND end on or before the range end. An item that
    /// merely overlaps the window is excluded.
    pub fn contains_span(&self, item_start: NaiveDate, item_end: NaiveDate) -> bool {
        if self.start.is_some_and(|bound| item_start < bound) {
            return false;
        }
        if self.end.is_some_and(|bound| item_end > bound) {
            return false;
        }
        true
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// An optional numeric window, used for budget and price filters.
///
/// Construct through [`crate::table::range::parse_range`] so invalid
/// input (negative, non-numeric, min > max) never reaches a filter.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumericRange {
    pub fn contains(&self, value: f64) -> bool {
        if self.min.is_some_and(|min| value < min) {
            return false;
        }
        if self.max.is_some_and(|max| value > max) {
            return false;
        }
        true
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// The complete filter state for one table.
///
/// `budget_range` only applies to campaigns, `price_range` only to
/// inventory; the other table ignores it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub search: String,
    pub media_type: MediaTypeFilter,
    pub status: StatusFilter,
    pub date_range: DateRange,
    pub budget_range: NumericRange,
    pub price_range: NumericRange,
}

/// Partial filter change, merged into a [`FilterState`] by the
/// controller. Unset fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct FilterUpdate {
    pub search: Option<String>,
    pub media_type: Option<MediaTypeFilter>,
    pub status: Option<StatusFilter>,
    pub date_range: Option<DateRange>,
    pub budget_range: Option<NumericRange>,
    pub price_range: Option<NumericRange>,
}

impl FilterState {
    /// Merge a partial update into this state.
    pub fn apply(&mut self, update: FilterUpdate) {
        if let Some(search) = update.search {
            self.search = search;
        }
        if let Some(media_type) = update.media_type {
            self.media_type = media_type;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(date_range) = update.date_range {
            self.date_range = date_range;
        }
        if let Some(budget_range) = update.budget_range {
            self.budget_range = budget_range;
        }
        if let Some(price_range) = update.price_range {
            self.price_range = price_range;
        }
    }
}

/// A row type that can be narrowed by a [`FilterState`].
pub trait Filterable {
    fn matches(&self, filters: &FilterState) -> bool;
}

/// Narrow `items` to the rows admitted by `filters`.
///
/// Pure and stable: surviving rows keep their relative input order.
pub fn filter<T: Filterable + Clone>(items: &[T], filters: &FilterState) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.matches(filters))
        .cloned()
        .collect()
}

/// Case-insensitive substring match over a fixed set of text fields.
fn search_matches(needle: &str, haystacks: &[&str]) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    haystacks
        .iter()
        .any(|hay| hay.to_lowercase().contains(&needle))
}

impl Filterable for Campaign {
    fn matches(&self, filters: &FilterState) -> bool {
        let media_label = self.media_type.to_string();
        if !search_matches(&filters.search, &[&self.name, &self.channel, &media_label]) {
            return false;
        }
        if let MediaTypeFilter::Only(wanted) = filters.media_type {
            if self.media_type != wanted {
                return false;
            }
        }
        if !filters.status.admits(&self.status.to_string()) {
            return false;
        }
        if !filters.date_range.contains_span(self.start_date, self.end_date) {
            return false;
        }
        filters.budget_range.contains(self.budget)
    }
}

impl Filterable for InventoryItem {
    // The media-type selector does not apply to inventory rows; an
    // inventory table simply never sets it.
    fn matches(&self, filters: &FilterState) -> bool {
        if !search_matches(
            &filters.search,
            &[&self.kind, &self.location, &self.media_owner],
        ) {
            return false;
        }
        if !filters.status.admits(&self.status.to_string()) {
            return false;
        }
        if !filters
            .date_range
            .contains_span(self.availability_start, self.availability_end)
        {
            return false;
        }
        filters.price_range.contains(self.price)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::CampaignStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn campaign(name: &str, media_type: MediaType, budget: f64) -> Campaign {
        Campaign {
            id: name.into(),
            name: name.into(),
            media_type,
            channel: "Google Ads".into(),
            start_date: date(2024, 6, 1),
            end_date: date(2024, 8, 31),
            status: CampaignStatus::Active,
            budget,
            impressions: 1000,
            clicks: 10,
            reach: 500,
            roi: 2.0,
        }
    }

    #[test]
    fn empty_filter_admits_everything() {
        let rows = vec![
            campaign("A", MediaType::Digital, 50_000.0),
            campaign("B", MediaType::Tv, 35_000.0),
        ];
        assert_eq!(filter(&rows, &FilterState::default()).len(), 2);
    }

    #[test]
    fn search_is_case_insensitive_over_fixed_fields() {
        let rows = vec![
            campaign("Summer Fashion", MediaType::Digital, 50_000.0),
            campaign("Billboard Downtown", MediaType::Outdoor, 75_000.0),
        ];
        let filters = FilterState {
            search: "summer".into(),
            ..FilterState::default()
        };
        let hits = filter(&rows, &filters);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Summer Fashion");

        // Media-type label is part of the searchable tuple.
        let filters = FilterState {
            search: "outdoor".into(),
            ..FilterState::default()
        };
        assert_eq!(filter(&rows, &filters)[0].name, "Billboard Downtown");
    }

    #[test]
    fn media_type_all_is_a_sentinel() {
        let rows = vec![
            campaign("A", MediaType::Digital, 50_000.0),
            campaign("B", MediaType::Tv, 35_000.0),
        ];
        let filters = FilterState {
            media_type: MediaTypeFilter::Only(MediaType::Tv),
            ..FilterState::default()
        };
        assert_eq!(filter(&rows, &filters).len(), 1);
        assert_eq!(filter(&rows, &FilterState::default()).len(), 2);
    }

    #[test]
    fn status_filter_matches_label() {
        let mut paused = campaign("B", MediaType::Tv, 35_000.0);
        paused.status = CampaignStatus::Paused;
        let rows = vec![campaign("A", MediaType::Digital, 50_000.0), paused];

        let filters = FilterState {
            status: StatusFilter::Only("Paused".into()),
            ..FilterState::default()
        };
        let hits = filter(&rows, &filters);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "B");
    }

    #[test]
    fn date_range_uses_containment_semantics() {
        // Spans 2024-06-01 .. 2024-08-31.
        let rows = vec![campaign("A", MediaType::Digital, 50_000.0)];

        // Fully containing window admits.
        let filters = FilterState {
            date_range: DateRange {
                start: Some(date(2024, 5, 1)),
                end: Some(date(2024, 9, 30)),
            },
            ..FilterState::default()
        };
        assert_eq!(filter(&rows, &filters).len(), 1);

        // Overlapping-but-not-containing window excludes.
        let filters = FilterState {
            date_range: DateRange {
                start: Some(date(2024, 7, 1)),
                end: None,
            },
            ..FilterState::default()
        };
        assert!(filter(&rows, &filters).is_empty());
    }

    #[test]
    fn budget_range_bounds_are_inclusive() {
        let rows = vec![
            campaign("A", MediaType::Digital, 50_000.0),
            campaign("B", MediaType::Tv, 35_000.0),
            campaign("C", MediaType::Radio, 40_000.0),
        ];
        let filters = FilterState {
            budget_range: NumericRange {
                min: Some(40_000.0),
                max: None,
            },
            ..FilterState::default()
        };
        let hits = filter(&rows, &filters);
        assert_eq!(
            hits.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            vec!["A", "C"]
        );
    }

    #[test]
    fn predicates_compose_with_and() {
        let rows = vec![
            campaign("Summer Digital", MediaType::Digital, 50_000.0),
            campaign("Summer TV", MediaType::Tv, 120_000.0),
        ];
        let filters = FilterState {
            search: "summer".into(),
            media_type: MediaTypeFilter::Only(MediaType::Digital),
            ..FilterState::default()
        };
        let hits = filter(&rows, &filters);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Summer Digital");
    }

    #[test]
    fn tightening_a_range_never_grows_the_result() {
        let rows: Vec<Campaign> = (0..20)
            .map(|i| campaign(&format!("C{i}"), MediaType::Digital, f64::from(i) * 10_000.0))
            .collect();

        let mut last_len = rows.len();
        for min in [0.0, 30_000.0, 60_000.0, 90_000.0, 500_000.0] {
            let filters = FilterState {
                budget_range: NumericRange {
                    min: Some(min),
                    max: None,
                },
                ..FilterState::default()
            };
            let len = filter(&rows, &filters).len();
            assert!(len <= last_len, "raising min grew the result set");
            last_len = len;
        }
    }

    #[test]
    fn filter_update_merges_partially() {
        let mut state = FilterState {
            search: "summer".into(),
            ..FilterState::default()
        };
        state.apply(FilterUpdate {
            status: Some(StatusFilter::Only("Active".into())),
            ..FilterUpdate::default()
        });
        assert_eq!(state.search, "summer");
        assert_eq!(state.status, StatusFilter::Only("Active".into()));
    }
}
