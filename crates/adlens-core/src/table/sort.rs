// ── Comparator-based sorter ──
//
// Generic single-column sort over an accessor. The sort is stable:
// rows with equal keys keep their relative input order, in both
// directions. `slice::sort_by` guarantees that.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Active sort column and direction. `field: None` means no sort —
/// the pipeline passes rows through in input order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub field: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    /// Apply a header click: same field flips the direction, a new
    /// field starts ascending.
    pub fn cycle(&mut self, field: &str) {
        if self.field.as_deref() == Some(field) {
            self.direction = self.direction.flip();
        } else {
            self.field = Some(field.to_owned());
            self.direction = SortDirection::Ascending;
        }
    }
}

/// A single comparable cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Date(NaiveDate),
    Number(f64),
    Text(String),
}

/// A row type exposing sortable fields by name.
///
/// Returns `None` for unknown fields; such rows compare as equal and
/// keep their input order.
pub trait SortAccessor {
    fn sort_value(&self, field: &str) -> Option<SortValue>;
}

/// The comparison ladder: temporal when both sides are dates, numeric
/// when both are numbers, otherwise case-insensitive text over the
/// value's display form.
pub fn compare_values(a: &SortValue, b: &SortValue) -> Ordering {
    match (a, b) {
        (SortValue::Date(x), SortValue::Date(y)) => x.cmp(y),
        (SortValue::Number(x), SortValue::Number(y)) => x.total_cmp(y),
        _ => text_key(a).cmp(&text_key(b)),
    }
}

fn text_key(value: &SortValue) -> String {
    match value {
        SortValue::Date(d) => d.to_string(),
        SortValue::Number(n) => n.to_string(),
        SortValue::Text(s) => s.to_lowercase(),
    }
}

/// Return a new vector ordered by `state`. The input is never mutated;
/// with no active field this is an order-preserving copy.
pub fn sort<T: SortAccessor + Clone>(items: &[T], state: &SortState) -> Vec<T> {
    let Some(ref field) = state.field else {
        return items.to_vec();
    };

    let mut out = items.to_vec();
    out.sort_by(|a, b| {
        let ordering = match (a.sort_value(field), b.sort_value(field)) {
            (Some(x), Some(y)) => compare_values(&x, &y),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        };
        match state.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    out
}

// ── Field accessors for the domain types ─────────────────────────────

impl SortAccessor for crate::model::Campaign {
    fn sort_value(&self, field: &str) -> Option<SortValue> {
        #[allow(clippy::cast_precision_loss)]
        let value = match field {
            "name" => SortValue::Text(self.name.clone()),
            "media_type" => SortValue::Text(self.media_type.to_string()),
            "channel" => SortValue::Text(self.channel.clone()),
            "start_date" => SortValue::Date(self.start_date),
            "end_date" => SortValue::Date(self.end_date),
            "status" => SortValue::Text(self.status.to_string()),
            "budget" => SortValue::Number(self.budget),
            "impressions" => SortValue::Number(self.impressions as f64),
            "clicks" => SortValue::Number(self.clicks as f64),
            "reach" => SortValue::Number(self.reach as f64),
            "roi" => SortValue::Number(self.roi),
            _ => return None,
        };
        Some(value)
    }
}

impl SortAccessor for crate::model::InventoryItem {
    fn sort_value(&self, field: &str) -> Option<SortValue> {
        let value = match field {
            "kind" => SortValue::Text(self.kind.clone()),
            "location" => SortValue::Text(self.location.clone()),
            "media_owner" => SortValue::Text(self.media_owner.clone()),
            "size" => SortValue::Text(self.size.clone()),
            "availability_start" => SortValue::Date(self.availability_start),
            "availability_end" => SortValue::Date(self.availability_end),
            "price" => SortValue::Number(self.price),
            "status" => SortValue::Text(self.status.to_string()),
            _ => return None,
        };
        Some(value)
    }
}
