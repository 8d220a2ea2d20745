// ── Campaign domain types ──

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Media channel category for a campaign.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum MediaType {
    Outdoor,
    Digital,
    #[serde(rename = "TV")]
    #[strum(serialize = "TV")]
    Tv,
    Radio,
    Print,
    Social,
}

/// Campaign lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum CampaignStatus {
    Active,
    Paused,
    Completed,
    Draft,
}

impl CampaignStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// The canonical campaign type.
///
/// Budget, impressions, clicks, reach, and ROI are all non-negative;
/// [`crate::convert`] enforces that at the wire boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub media_type: MediaType,
    pub channel: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: CampaignStatus,
    pub budget: f64,
    pub impressions: u64,
    pub clicks: u64,
    pub reach: u64,
    pub roi: f64,
}

impl Campaign {
    /// Click-through rate, when the campaign has recorded impressions.
    #[allow(clippy::cast_precision_loss)]
    pub fn click_through_rate(&self) -> Option<f64> {
        (self.impressions > 0).then(|| self.clicks as f64 / self.impressions as f64)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn media_type_round_trips_through_display() {
        assert_eq!(MediaType::Tv.to_string(), "TV");
        assert_eq!(MediaType::from_str("TV").unwrap(), MediaType::Tv);
        assert_eq!(MediaType::from_str("outdoor").unwrap(), MediaType::Outdoor);
        assert!(MediaType::from_str("Podcast").is_err());
    }

    #[test]
    fn media_type_serde_uses_wire_spelling() {
        let json = serde_json::to_string(&MediaType::Tv).unwrap();
        assert_eq!(json, "\"TV\"");
        let back: MediaType = serde_json::from_str("\"TV\"").unwrap();
        assert_eq!(back, MediaType::Tv);
    }

    #[test]
    fn ctr_requires_impressions() {
        let mut campaign = Campaign {
            id: "1".into(),
            name: "Test".into(),
            media_type: MediaType::Digital,
            channel: "Google Ads".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 8, 31).unwrap(),
            status: CampaignStatus::Active,
            budget: 50_000.0,
            impressions: 0,
            clicks: 0,
            reach: 0,
            roi: 0.0,
        };
        assert_eq!(campaign.click_through_rate(), None);

        campaign.impressions = 1000;
        campaign.clicks = 20;
        assert!((campaign.click_through_rate().unwrap() - 0.02).abs() < f64::EPSILON);
    }
}
