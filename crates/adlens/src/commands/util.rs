//! Shared command plumbing: backend construction, data loading, and
//! translation of CLI flags into engine filter state.

use std::str::FromStr;

use secrecy::SecretString;

use adlens_api::Backend;
use adlens_core::table::range::parse_range;
use adlens_core::{
    CampaignStatus, DataStore, DateRange, FilterUpdate, InventoryStatus, MediaType,
    MediaTypeFilter, StatusFilter, StoreConfig, mock_backend,
};

use crate::cli::{CampaignFilterOpts, GlobalOpts, InventoryFilterOpts};
use crate::error::CliError;

/// Sortable campaign columns, as accepted by `--sort`.
pub const CAMPAIGN_SORT_FIELDS: &[&str] = &[
    "name",
    "media_type",
    "channel",
    "start_date",
    "end_date",
    "status",
    "budget",
    "impressions",
    "clicks",
    "reach",
    "roi",
];

/// Sortable inventory columns, as accepted by `--sort`.
pub const INVENTORY_SORT_FIELDS: &[&str] = &[
    "kind",
    "location",
    "media_owner",
    "size",
    "availability_start",
    "availability_end",
    "price",
    "status",
];

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Everything a data-bound command needs: a backend handle plus the
/// config-level table defaults.
pub struct Session {
    pub backend: Backend,
    pub default_page_size: usize,
}

/// Build a backend from config + CLI flag overrides.
pub fn connect(global: &GlobalOpts) -> Result<Session, CliError> {
    let cfg = adlens_config::load_config_or_default();
    let profile_name = adlens_config::active_profile_name(global.profile.as_deref(), &cfg);
    let profile = cfg.profiles.get(&profile_name).cloned().unwrap_or_default();
    let default_page_size = cfg.defaults.page_size.max(1);

    if global.mock || profile.mock.unwrap_or(false) {
        tracing::debug!("using offline sample backend");
        return Ok(Session {
            backend: mock_backend(),
            default_page_size,
        });
    }

    let url_str = global
        .store_url
        .clone()
        .or_else(|| profile.store_url.clone())
        .ok_or_else(|| CliError::NoConfig {
            path: adlens_config::config_path().display().to_string(),
        })?;
    let url: url::Url = url_str.parse().map_err(|_| CliError::Validation {
        field: "store URL".into(),
        reason: format!("invalid URL: {url_str}"),
    })?;

    let api_key = match global.api_key {
        Some(ref key) => SecretString::from(key.clone()),
        None => adlens_config::resolve_api_key(&profile, &profile_name)?,
    };

    // An explicit --timeout beats the profile; the clap default does not.
    let timeout_secs = if global.timeout == DEFAULT_TIMEOUT_SECS {
        profile.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS)
    } else {
        global.timeout
    };

    let store_config = StoreConfig {
        url,
        api_key,
        timeout: std::time::Duration::from_secs(timeout_secs),
        accept_invalid_certs: global.insecure || profile.insecure.unwrap_or(false),
    };

    Ok(Session {
        backend: store_config.backend()?,
        default_page_size,
    })
}

/// Connect and pull a fresh snapshot into a [`DataStore`].
pub async fn load_data(global: &GlobalOpts) -> Result<(DataStore, Session), CliError> {
    let session = connect(global)?;
    let store = DataStore::new();
    store.refresh(&session.backend).await?;
    Ok((store, session))
}

/// Translate a backend failure from a mutation, surfacing missing rows
/// as a proper not-found diagnostic.
pub fn store_err(
    err: adlens_api::Error,
    resource_type: &'static str,
    identifier: &str,
    list_command: &'static str,
) -> CliError {
    match err {
        adlens_api::Error::Api { status: 404, .. } => CliError::NotFound {
            resource_type,
            identifier: identifier.to_owned(),
            list_command,
        },
        other => adlens_core::CoreError::from(other).into(),
    }
}

// ── Flag → filter translation ────────────────────────────────────────

fn parse_media_type(text: &str) -> Result<MediaTypeFilter, CliError> {
    if text.eq_ignore_ascii_case("all") {
        return Ok(MediaTypeFilter::All);
    }
    MediaType::from_str(text)
        .map(MediaTypeFilter::Only)
        .map_err(|_| CliError::Validation {
            field: "media type".into(),
            reason: format!("unknown media type '{text}' (expected Outdoor, Digital, TV, Radio, Print, or Social)"),
        })
}

fn parse_status<S: FromStr>(
    text: &str,
    expected: &'static str,
) -> Result<StatusFilter, CliError> {
    if text.eq_ignore_ascii_case("all") {
        return Ok(StatusFilter::All);
    }
    S::from_str(text)
        .map(|_| StatusFilter::Only(text.to_owned()))
        .map_err(|_| CliError::Validation {
            field: "status".into(),
            reason: format!("unknown status '{text}' (expected {expected})"),
        })
}

/// Build the engine filter update from campaign list/export flags.
///
/// Range text goes through the range validator; invalid input is
/// rejected here and never reaches the filter.
pub fn campaign_filter_update(opts: &CampaignFilterOpts) -> Result<FilterUpdate, CliError> {
    let mut update = FilterUpdate::default();

    if let Some(ref search) = opts.search {
        update.search = Some(search.clone());
    }
    if let Some(ref media_type) = opts.media_type {
        update.media_type = Some(parse_media_type(media_type)?);
    }
    if let Some(ref status) = opts.status {
        update.status = Some(parse_status::<CampaignStatus>(
            status,
            "Active, Paused, Completed, or Draft",
        )?);
    }
    if opts.from.is_some() || opts.to.is_some() {
        update.date_range = Some(DateRange {
            start: opts.from,
            end: opts.to,
        });
    }
    if opts.min_budget.is_some() || opts.max_budget.is_some() {
        let range = parse_range(
            opts.min_budget.as_deref().unwrap_or(""),
            opts.max_budget.as_deref().unwrap_or(""),
        )
        .ok_or(CliError::InvalidRange { field: "budget" })?;
        update.budget_range = Some(range);
    }

    Ok(update)
}

/// Build the engine filter update from inventory list/export flags.
pub fn inventory_filter_update(opts: &InventoryFilterOpts) -> Result<FilterUpdate, CliError> {
    let mut update = FilterUpdate::default();

    if let Some(ref search) = opts.search {
        update.search = Some(search.clone());
    }
    if let Some(ref status) = opts.status {
        update.status = Some(parse_status::<InventoryStatus>(
            status,
            "Available, Booked, or Pending",
        )?);
    }
    if opts.from.is_some() || opts.to.is_some() {
        update.date_range = Some(DateRange {
            start: opts.from,
            end: opts.to,
        });
    }
    if opts.min_price.is_some() || opts.max_price.is_some() {
        let range = parse_range(
            opts.min_price.as_deref().unwrap_or(""),
            opts.max_price.as_deref().unwrap_or(""),
        )
        .ok_or(CliError::InvalidRange { field: "price" })?;
        update.price_range = Some(range);
    }

    Ok(update)
}

/// Validate a `--sort` column against the table's field list.
pub fn validate_sort_field(
    field: &str,
    allowed: &'static [&'static str],
) -> Result<(), CliError> {
    if allowed.contains(&field) {
        Ok(())
    } else {
        Err(CliError::Validation {
            field: "sort column".into(),
            reason: format!("unknown column '{}' (expected one of: {})", field, allowed.join(", ")),
        })
    }
}

/// Footer line for paged table output.
pub fn page_footer(current: usize, total_pages: usize, total_rows: usize) -> String {
    if total_rows == 0 {
        "no matching rows".into()
    } else {
        format!("page {current} of {total_pages} ({total_rows} matching rows)")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use adlens_core::NumericRange;

    #[test]
    fn media_type_flag_accepts_all_sentinel() {
        assert_eq!(parse_media_type("all").unwrap(), MediaTypeFilter::All);
        assert_eq!(
            parse_media_type("TV").unwrap(),
            MediaTypeFilter::Only(MediaType::Tv)
        );
        assert!(parse_media_type("skywriting").is_err());
    }

    #[test]
    fn budget_flags_route_through_the_validator() {
        let opts = CampaignFilterOpts {
            min_budget: Some("40000".into()),
            ..CampaignFilterOpts::default()
        };
        let update = campaign_filter_update(&opts).unwrap();
        assert_eq!(
            update.budget_range,
            Some(NumericRange {
                min: Some(40_000.0),
                max: None
            })
        );

        let bad = CampaignFilterOpts {
            min_budget: Some("100".into()),
            max_budget: Some("50".into()),
            ..CampaignFilterOpts::default()
        };
        assert!(matches!(
            campaign_filter_update(&bad),
            Err(CliError::InvalidRange { field: "budget" })
        ));
    }

    #[test]
    fn unknown_status_is_rejected() {
        let opts = CampaignFilterOpts {
            status: Some("Archived".into()),
            ..CampaignFilterOpts::default()
        };
        assert!(campaign_filter_update(&opts).is_err());

        let opts = CampaignFilterOpts {
            status: Some("Paused".into()),
            ..CampaignFilterOpts::default()
        };
        assert_eq!(
            campaign_filter_update(&opts).unwrap().status,
            Some(StatusFilter::Only("Paused".into()))
        );
    }

    #[test]
    fn sort_field_validation() {
        assert!(validate_sort_field("roi", CAMPAIGN_SORT_FIELDS).is_ok());
        assert!(validate_sort_field("price", INVENTORY_SORT_FIELDS).is_ok());
        assert!(validate_sort_field("nonsense", CAMPAIGN_SORT_FIELDS).is_err());
    }

    #[test]
    fn footer_handles_empty_sets() {
        assert_eq!(page_footer(1, 0, 0), "no matching rows");
        assert_eq!(page_footer(2, 3, 25), "page 2 of 3 (25 matching rows)");
    }
}
