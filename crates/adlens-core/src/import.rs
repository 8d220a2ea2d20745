// ── Bulk CSV import ──
//
// Parses the published import templates into insert payloads. Header
// names must match the template exactly; every row is validated with
// the same rules the wire boundary enforces, and the first bad row
// aborts the import with its line number.

use std::io::Read;
use std::str::FromStr;

use serde::Deserialize;

use adlens_api::{NewCampaign, NewInventory};

use crate::convert::wire_date;
use crate::error::CoreError;
use crate::model::{CampaignStatus, InventoryStatus, MediaType};

/// Downloadable template for campaign imports.
pub const CAMPAIGN_TEMPLATE: &str = "\
campaign_name,media_type,channel,start_date,end_date,budget,status
Sample Campaign,Digital,Google Ads,2024-01-01,2024-03-31,50000,Active
";

/// Downloadable template for inventory imports.
pub const INVENTORY_TEMPLATE: &str = "\
type,location,media_owner,size,availability_start,availability_end,price,status
Billboard,Times Square NYC,Clear Channel,14x48 ft,2024-01-01,2024-12-31,85000,Available
";

#[derive(Debug, Deserialize)]
struct CampaignImportRow {
    campaign_name: String,
    media_type: String,
    channel: String,
    start_date: String,
    end_date: String,
    budget: f64,
    status: String,
}

#[derive(Debug, Deserialize)]
struct InventoryImportRow {
    #[serde(rename = "type")]
    kind: String,
    location: String,
    media_owner: String,
    size: String,
    availability_start: String,
    availability_end: String,
    price: f64,
    status: String,
}

fn row_error(entity: &'static str, line: usize, reason: impl Into<String>) -> CoreError {
    CoreError::Conversion {
        entity,
        id: format!("line {line}"),
        reason: reason.into(),
    }
}

fn parse_template_date(
    entity: &'static str,
    line: usize,
    field: &str,
    raw: &str,
) -> Result<String, CoreError> {
    let date = chrono::NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| row_error(entity, line, format!("{field}: {e}")))?;
    Ok(wire_date(date))
}

/// Read campaign rows in the [`CAMPAIGN_TEMPLATE`] column layout.
///
/// Imported campaigns start with zeroed performance counters; the
/// store fills those in as data arrives.
pub fn read_campaign_template<R: Read>(reader: R) -> Result<Vec<NewCampaign>, CoreError> {
    const ENTITY: &str = "campaign import";
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();

    for (index, result) in csv_reader.deserialize::<CampaignImportRow>().enumerate() {
        let line = index + 2; // 1-based, after the header row
        let row = result.map_err(|e| row_error(ENTITY, line, e.to_string()))?;

        let media_type = MediaType::from_str(row.media_type.trim())
            .map_err(|_| row_error(ENTITY, line, format!("unknown media type '{}'", row.media_type)))?;
        let status = CampaignStatus::from_str(row.status.trim())
            .map_err(|_| row_error(ENTITY, line, format!("unknown status '{}'", row.status)))?;
        if !row.budget.is_finite() || row.budget < 0.0 {
            return Err(row_error(ENTITY, line, "budget must be a non-negative number"));
        }

        rows.push(NewCampaign {
            name: row.campaign_name.trim().to_owned(),
            media_type: media_type.to_string(),
            channel: row.channel.trim().to_owned(),
            start_date: parse_template_date(ENTITY, line, "start_date", &row.start_date)?,
            end_date: parse_template_date(ENTITY, line, "end_date", &row.end_date)?,
            status: status.to_string(),
            budget: row.budget,
            impressions: 0,
            clicks: 0,
            reach: 0,
            roi: 0.0,
        });
    }
    Ok(rows)
}

/// Read inventory rows in the [`INVENTORY_TEMPLATE`] column layout.
pub fn read_inventory_template<R: Read>(reader: R) -> Result<Vec<NewInventory>, CoreError> {
    const ENTITY: &str = "inventory import";
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();

    for (index, result) in csv_reader.deserialize::<InventoryImportRow>().enumerate() {
        let line = index + 2;
        let row = result.map_err(|e| row_error(ENTITY, line, e.to_string()))?;

        let status = InventoryStatus::from_str(row.status.trim())
            .map_err(|_| row_error(ENTITY, line, format!("unknown status '{}'", row.status)))?;
        if !row.price.is_finite() || row.price < 0.0 {
            return Err(row_error(ENTITY, line, "price must be a non-negative number"));
        }

        rows.push(NewInventory {
            kind: row.kind.trim().to_owned(),
            location: row.location.trim().to_owned(),
            media_owner: row.media_owner.trim().to_owned(),
            size: row.size.trim().to_owned(),
            availability_start: parse_template_date(
                ENTITY,
                line,
                "availability_start",
                &row.availability_start,
            )?,
            availability_end: parse_template_date(
                ENTITY,
                line,
                "availability_end",
                &row.availability_end,
            )?,
            price: row.price,
            status: status.to_string(),
        });
    }
    Ok(rows)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn campaign_template_parses() {
        let rows = read_campaign_template(CAMPAIGN_TEMPLATE.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Sample Campaign");
        assert_eq!(rows[0].media_type, "Digital");
        assert_eq!(rows[0].start_date, "2024-01-01");
        assert_eq!(rows[0].impressions, 0);
    }

    #[test]
    fn inventory_template_parses() {
        let rows = read_inventory_template(INVENTORY_TEMPLATE.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind, "Billboard");
        assert_eq!(rows[0].price, 85_000.0);
    }

    #[test]
    fn bad_media_type_reports_the_line() {
        let csv_text = "\
campaign_name,media_type,channel,start_date,end_date,budget,status
Good,Digital,Google Ads,2024-01-01,2024-03-31,50000,Active
Bad,Skywriting,Google Ads,2024-01-01,2024-03-31,50000,Active
";
        let err = read_campaign_template(csv_text.as_bytes()).unwrap_err();
        match err {
            CoreError::Conversion { id, reason, .. } => {
                assert_eq!(id, "line 3");
                assert!(reason.contains("Skywriting"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn bad_date_is_rejected() {
        let csv_text = "\
campaign_name,media_type,channel,start_date,end_date,budget,status
Bad,Digital,Google Ads,01/01/2024,2024-03-31,50000,Active
";
        assert!(read_campaign_template(csv_text.as_bytes()).is_err());
    }

    #[test]
    fn negative_budget_is_rejected() {
        let csv_text = "\
campaign_name,media_type,channel,start_date,end_date,budget,status
Bad,Digital,Google Ads,2024-01-01,2024-03-31,-5,Active
";
        assert!(read_campaign_template(csv_text.as_bytes()).is_err());
    }

    #[test]
    fn tv_spelling_is_accepted() {
        let csv_text = "\
campaign_name,media_type,channel,start_date,end_date,budget,status
Spots,TV,NBC,2024-01-01,2024-03-31,120000,Paused
";
        let rows = read_campaign_template(csv_text.as_bytes()).unwrap();
        assert_eq!(rows[0].media_type, "TV");
    }
}
