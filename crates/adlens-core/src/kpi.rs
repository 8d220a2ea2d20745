// ── KPI aggregation ──
//
// The figures behind the dashboard's summary cards and charts. Pure
// fold over the campaign collection; rendering belongs to the UI layer.

use serde::Serialize;
use strum::IntoEnumIterator;

use crate::model::{Campaign, MediaType};

/// Headline figures across all campaigns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiSummary {
    pub total_spend: f64,
    pub total_impressions: u64,
    /// Clicks stand in for conversions, as tracked by the store.
    pub total_conversions: u64,
    /// Mean ROI over all campaigns, 0 when there are none.
    pub average_roi: f64,
}

impl KpiSummary {
    #[allow(clippy::cast_precision_loss)]
    pub fn from_campaigns(campaigns: &[Campaign]) -> Self {
        let total_spend = campaigns.iter().map(|c| c.budget).sum();
        let total_impressions = campaigns.iter().map(|c| c.impressions).sum();
        let total_conversions = campaigns.iter().map(|c| c.clicks).sum();
        let average_roi = if campaigns.is_empty() {
            0.0
        } else {
            campaigns.iter().map(|c| c.roi).sum::<f64>() / campaigns.len() as f64
        };
        Self {
            total_spend,
            total_impressions,
            total_conversions,
            average_roi,
        }
    }
}

/// Spend distribution for one media type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaTypeSlice {
    pub media_type: MediaType,
    pub campaigns: usize,
    pub budget: f64,
    /// Share of total budget, in percent. 0 when there is no spend.
    pub budget_share_pct: f64,
}

/// Per-media-type breakdown, ordered by budget descending. Media types
/// with no campaigns are omitted.
pub fn media_type_breakdown(campaigns: &[Campaign]) -> Vec<MediaTypeSlice> {
    let total_budget: f64 = campaigns.iter().map(|c| c.budget).sum();

    let mut slices: Vec<MediaTypeSlice> = MediaType::iter()
        .filter_map(|media_type| {
            let matching: Vec<&Campaign> = campaigns
                .iter()
                .filter(|c| c.media_type == media_type)
                .collect();
            if matching.is_empty() {
                return None;
            }
            let budget: f64 = matching.iter().map(|c| c.budget).sum();
            let budget_share_pct = if total_budget > 0.0 {
                budget / total_budget * 100.0
            } else {
                0.0
            };
            Some(MediaTypeSlice {
                media_type,
                campaigns: matching.len(),
                budget,
                budget_share_pct,
            })
        })
        .collect();

    slices.sort_by(|a, b| b.budget.total_cmp(&a.budget));
    slices
}

/// The `n` best campaigns by ROI, ties keeping input order.
pub fn top_by_roi(campaigns: &[Campaign], n: usize) -> Vec<&Campaign> {
    let mut ranked: Vec<&Campaign> = campaigns.iter().collect();
    ranked.sort_by(|a, b| b.roi.total_cmp(&a.roi));
    ranked.truncate(n);
    ranked
}
