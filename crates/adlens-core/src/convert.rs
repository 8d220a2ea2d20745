// ── Wire → domain conversion ──
//
// The data store speaks snake_case columns with ISO-8601 date strings;
// the domain speaks typed enums and `NaiveDate`. Each conversion is a
// pure struct-to-struct transform with no hidden state, and it is the
// single place where the non-negativity invariants are enforced.

use std::str::FromStr;

use chrono::NaiveDate;

use adlens_api::{CampaignRecord, InventoryRecord};

use crate::error::CoreError;
use crate::model::{Campaign, CampaignStatus, InventoryItem, InventoryStatus, MediaType};

const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a domain date for the wire.
pub fn wire_date(date: NaiveDate) -> String {
    date.format(WIRE_DATE_FORMAT).to_string()
}

/// Parse a wire date. Timestamp columns are tolerated by reading only
/// the leading `YYYY-MM-DD`.
fn parse_date(entity: &'static str, id: &str, field: &str, raw: &str) -> Result<NaiveDate, CoreError> {
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, WIRE_DATE_FORMAT).map_err(|e| CoreError::Conversion {
        entity,
        id: id.to_owned(),
        reason: format!("{field}: {e}"),
    })
}

fn require_non_negative(
    entity: &'static str,
    id: &str,
    field: &str,
    value: f64,
) -> Result<f64, CoreError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CoreError::Conversion {
            entity,
            id: id.to_owned(),
            reason: format!("{field} must be a non-negative number, got {value}"),
        })
    }
}

impl TryFrom<CampaignRecord> for Campaign {
    type Error = CoreError;

    fn try_from(record: CampaignRecord) -> Result<Self, Self::Error> {
        const ENTITY: &str = "campaign";
        let id = record.id;

        let media_type = MediaType::from_str(&record.media_type).map_err(|_| {
            CoreError::Conversion {
                entity: ENTITY,
                id: id.clone(),
                reason: format!("unknown media type '{}'", record.media_type),
            }
        })?;
        let status = CampaignStatus::from_str(&record.status).map_err(|_| {
            CoreError::Conversion {
                entity: ENTITY,
                id: id.clone(),
                reason: format!("unknown status '{}'", record.status),
            }
        })?;

        Ok(Campaign {
            start_date: parse_date(ENTITY, &id, "start_date", &record.start_date)?,
            end_date: parse_date(ENTITY, &id, "end_date", &record.end_date)?,
            budget: require_non_negative(ENTITY, &id, "budget", record.budget)?,
            roi: require_non_negative(ENTITY, &id, "roi", record.roi)?,
            name: record.name,
            media_type,
            channel: record.channel,
            status,
            impressions: record.impressions,
            clicks: record.clicks,
            reach: record.reach,
            id,
        })
    }
}

impl TryFrom<InventoryRecord> for InventoryItem {
    type Error = CoreError;

    fn try_from(record: InventoryRecord) -> Result<Self, Self::Error> {
        const ENTITY: &str = "inventory";
        let id = record.id;

        let status = InventoryStatus::from_str(&record.status).map_err(|_| {
            CoreError::Conversion {
                entity: ENTITY,
                id: id.clone(),
                reason: format!("unknown status '{}'", record.status),
            }
        })?;

        Ok(InventoryItem {
            availability_start: parse_date(
                ENTITY,
                &id,
                "availability_start",
                &record.availability_start,
            )?,
            availability_end: parse_date(
                ENTITY,
                &id,
                "availability_end",
                &record.availability_end,
            )?,
            price: require_non_negative(ENTITY, &id, "price", record.price)?,
            kind: record.kind,
            location: record.location,
            media_owner: record.media_owner,
            size: record.size,
            status,
            id,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn record() -> CampaignRecord {
        CampaignRecord {
            id: "1".into(),
            name: "Summer Fashion Campaign".into(),
            media_type: "Digital".into(),
            channel: "Google Ads".into(),
            start_date: "2024-06-01".into(),
            end_date: "2024-08-31".into(),
            status: "Active".into(),
            budget: 50_000.0,
            impressions: 1_250_000,
            clicks: 25_000,
            reach: 850_000,
            roi: 3.2,
            created_at: Some("2024-05-20T09:00:00Z".into()),
            updated_at: None,
        }
    }

    #[test]
    fn campaign_record_converts() {
        let campaign = Campaign::try_from(record()).unwrap();
        assert_eq!(campaign.media_type, MediaType::Digital);
        assert_eq!(campaign.status, CampaignStatus::Active);
        assert_eq!(
            campaign.start_date,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
    }

    #[test]
    fn tv_spelling_converts() {
        let mut r = record();
        r.media_type = "TV".into();
        assert_eq!(Campaign::try_from(r).unwrap().media_type, MediaType::Tv);
    }

    #[test]
    fn timestamp_dates_are_truncated() {
        let mut r = record();
        r.start_date = "2024-06-01T00:00:00+00:00".into();
        let campaign = Campaign::try_from(r).unwrap();
        assert_eq!(
            campaign.start_date,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
    }

    #[test]
    fn unknown_media_type_is_rejected() {
        let mut r = record();
        r.media_type = "Skywriting".into();
        let err = Campaign::try_from(r).unwrap_err();
        assert!(matches!(err, CoreError::Conversion { entity: "campaign", .. }));
    }

    #[test]
    fn negative_budget_is_rejected() {
        let mut r = record();
        r.budget = -1.0;
        assert!(Campaign::try_from(r).is_err());
    }

    #[test]
    fn inventory_record_converts() {
        let record = InventoryRecord {
            id: "1".into(),
            kind: "Billboard".into(),
            location: "Times Square, NYC".into(),
            media_owner: "Clear Channel".into(),
            size: "14x48 ft".into(),
            availability_start: "2024-11-01".into(),
            availability_end: "2024-12-31".into(),
            price: 85_000.0,
            status: "Available".into(),
            created_at: None,
            updated_at: None,
        };
        let item = InventoryItem::try_from(record).unwrap();
        assert_eq!(item.status, InventoryStatus::Available);
        assert_eq!(item.kind, "Billboard");
    }

    #[test]
    fn wire_date_round_trips() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(wire_date(date), "2024-12-31");
    }
}
