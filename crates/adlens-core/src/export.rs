// ── CSV export ──
//
// Serializes a processed row collection in the order it was handed in;
// the caller decides what's in scope (the controller always passes the
// full filtered + sorted set, never just the visible page).
//
// Quoting goes through the `csv` crate with minimal quoting, which
// also doubles embedded quote characters. That is stricter than the
// legacy exporter, which only quoted on embedded delimiters — the
// laxer behavior produced unparseable rows and is not preserved.

use std::io::Write;

use chrono::NaiveDate;

use crate::error::CoreError;
use crate::model::{Campaign, InventoryItem};

/// Human-readable date format used in exported files ("Jun 1, 2024").
const EXPORT_DATE_FORMAT: &str = "%b %-d, %Y";

/// One exportable cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum CsvField {
    Text(String),
    Integer(u64),
    Number(f64),
    Date(NaiveDate),
}

impl CsvField {
    fn render(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Integer(n) => n.to_string(),
            Self::Number(n) => n.to_string(),
            Self::Date(d) => d.format(EXPORT_DATE_FORMAT).to_string(),
        }
    }
}

/// An ordered column spec: display label plus value accessor. Header
/// order follows the slice order the caller supplies.
pub struct Column<T> {
    pub label: &'static str,
    pub value: fn(&T) -> CsvField,
}

/// Write `rows` as CSV: one header row from the column labels, then one
/// record per row in input order.
pub fn write_csv<T, W: Write>(rows: &[T], columns: &[Column<T>], out: W) -> Result<(), CoreError> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(out);

    writer.write_record(columns.iter().map(|c| c.label))?;
    for row in rows {
        writer.write_record(columns.iter().map(|c| (c.value)(row).render()))?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Render `rows` to an in-memory CSV string.
pub fn csv_string<T>(rows: &[T], columns: &[Column<T>]) -> Result<String, CoreError> {
    let mut buf = Vec::new();
    write_csv(rows, columns, &mut buf)?;
    String::from_utf8(buf).map_err(|e| CoreError::ValidationFailed {
        field: "csv".into(),
        reason: e.to_string(),
    })
}

/// Default column order for campaign exports.
pub fn campaign_columns() -> Vec<Column<Campaign>> {
    vec![
        Column { label: "Campaign Name", value: |c| CsvField::Text(c.name.clone()) },
        Column { label: "Media Type", value: |c| CsvField::Text(c.media_type.to_string()) },
        Column { label: "Channel", value: |c| CsvField::Text(c.channel.clone()) },
        Column { label: "Start Date", value: |c| CsvField::Date(c.start_date) },
        Column { label: "End Date", value: |c| CsvField::Date(c.end_date) },
        Column { label: "Status", value: |c| CsvField::Text(c.status.to_string()) },
        Column { label: "Budget", value: |c| CsvField::Number(c.budget) },
        Column { label: "Impressions", value: |c| CsvField::Integer(c.impressions) },
        Column { label: "Clicks", value: |c| CsvField::Integer(c.clicks) },
        Column { label: "Reach", value: |c| CsvField::Integer(c.reach) },
        Column { label: "ROI", value: |c| CsvField::Number(c.roi) },
    ]
}

/// Default column order for inventory exports.
pub fn inventory_columns() -> Vec<Column<InventoryItem>> {
    vec![
        Column { label: "Type", value: |i| CsvField::Text(i.kind.clone()) },
        Column { label: "Location", value: |i| CsvField::Text(i.location.clone()) },
        Column { label: "Media Owner", value: |i| CsvField::Text(i.media_owner.clone()) },
        Column { label: "Size", value: |i| CsvField::Text(i.size.clone()) },
        Column { label: "Available From", value: |i| CsvField::Date(i.availability_start) },
        Column { label: "Available To", value: |i| CsvField::Date(i.availability_end) },
        Column { label: "Price", value: |i| CsvField::Number(i.price) },
        Column { label: "Status", value: |i| CsvField::Text(i.status.to_string()) },
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::model::{CampaignStatus, MediaType};

    fn campaign(name: &str, channel: &str) -> Campaign {
        Campaign {
            id: "1".into(),
            name: name.into(),
            media_type: MediaType::Digital,
            channel: channel.into(),
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 8, 31).unwrap(),
            status: CampaignStatus::Active,
            budget: 50_000.0,
            impressions: 1_250_000,
            clicks: 25_000,
            reach: 850_000,
            roi: 3.2,
        }
    }

    #[test]
    fn header_follows_column_order() {
        let out = csv_string(&[] as &[Campaign], &campaign_columns()).unwrap();
        assert_eq!(
            out.trim_end(),
            "Campaign Name,Media Type,Channel,Start Date,End Date,Status,Budget,Impressions,Clicks,Reach,ROI"
        );
    }

    #[test]
    fn dates_use_the_human_readable_format() {
        let rows = vec![campaign("Summer Fashion Campaign", "Google Ads")];
        let out = csv_string(&rows, &campaign_columns()).unwrap();
        let data_line = out.lines().nth(1).unwrap();
        assert!(data_line.contains("Jun 1, 2024"), "got: {data_line}");
        assert!(data_line.contains("Aug 31, 2024"));
    }

    #[test]
    fn embedded_delimiter_forces_quoting() {
        let rows = vec![campaign("Summer, Fall, Winter", "Google Ads")];
        let out = csv_string(&rows, &campaign_columns()).unwrap();
        assert!(out.contains("\"Summer, Fall, Winter\""));
    }

    #[test]
    fn embedded_quotes_are_escaped() {
        let rows = vec![campaign("The \"Big\" Push", "Google Ads")];
        let out = csv_string(&rows, &campaign_columns()).unwrap();
        assert!(out.contains("\"The \"\"Big\"\" Push\""), "got: {out}");
    }

    #[test]
    fn row_order_follows_input_order() {
        let rows = vec![campaign("Zebra", "a"), campaign("Apple", "b")];
        let out = csv_string(&rows, &campaign_columns()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[1].starts_with("Zebra"));
        assert!(lines[2].starts_with("Apple"));
    }

    #[test]
    fn numbers_render_without_trailing_zeros() {
        let rows = vec![campaign("A", "b")];
        let out = csv_string(&rows, &campaign_columns()).unwrap();
        let data_line = out.lines().nth(1).unwrap();
        assert!(data_line.contains(",50000,"));
        assert!(data_line.ends_with(",3.2"));
    }
}
