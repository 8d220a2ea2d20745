//! Campaign command handlers.

use std::fs::File;
use std::str::FromStr;

use owo_colors::OwoColorize;
use tabled::Tabled;

use adlens_api::{CampaignChanges, NewCampaign};
use adlens_core::export::{campaign_columns, write_csv};
use adlens_core::import as import_mod;
use adlens_core::{Campaign, CampaignStatus, MediaType, TableController, convert, fmt};

use crate::cli::{
    CampaignExportArgs, CampaignFilterOpts, CampaignsArgs, CampaignsCommand, CreateCampaignArgs,
    GlobalOpts, OutputFormat, UpdateCampaignArgs,
};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct CampaignRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Media")]
    media: String,
    #[tabled(rename = "Channel")]
    channel: String,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "ROI")]
    roi: String,
}

impl From<&Campaign> for CampaignRow {
    fn from(c: &Campaign) -> Self {
        Self {
            id: c.id.clone(),
            name: c.name.clone(),
            media: c.media_type.to_string(),
            channel: c.channel.clone(),
            start: c.start_date.to_string(),
            end: c.end_date.to_string(),
            status: c.status.to_string(),
            budget: fmt::currency(c.budget),
            roi: fmt::roi(c.roi),
        }
    }
}

fn detail(c: &Campaign) -> String {
    let mut lines = vec![
        format!("ID:           {}", c.id),
        format!("Name:         {}", c.name),
        format!("Media type:   {}", c.media_type),
        format!("Channel:      {}", c.channel),
        format!("Runs:         {} to {}", c.start_date, c.end_date),
        format!("Status:       {}", c.status),
        format!("Budget:       {}", fmt::currency(c.budget)),
        format!("Impressions:  {}", fmt::count(c.impressions)),
        format!("Clicks:       {}", fmt::count(c.clicks)),
        format!("Reach:        {}", fmt::count(c.reach)),
        format!("ROI:          {}", fmt::roi(c.roi)),
    ];
    if let Some(ctr) = c.click_through_rate() {
        lines.push(format!("CTR:          {}", fmt::percent(ctr * 100.0)));
    }
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(args: CampaignsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        CampaignsCommand::List(list) => {
            let (store, session) = util::load_data(global).await?;
            let rows = store.campaigns_snapshot().as_ref().clone();
            let mut table = TableController::with_page_size(
                rows,
                list.page_size.unwrap_or(session.default_page_size),
            );

            apply_filters_and_sort(&mut table, &list.filters)?;
            table.go_to_page(list.page);

            let out = output::render_list(
                &global.output,
                table.visible_rows(),
                |c| CampaignRow::from(c),
                |c| c.id.clone(),
            );
            output::print_output(&out, global.quiet);

            if matches!(global.output, OutputFormat::Table) && !global.quiet {
                let footer = util::page_footer(
                    table.current_page(),
                    table.total_pages(),
                    table.total_filtered(),
                );
                if output::should_color(&global.color) {
                    eprintln!("{}", footer.dimmed());
                } else {
                    eprintln!("{footer}");
                }
            }
            Ok(())
        }

        CampaignsCommand::Get { id } => {
            let (store, _session) = util::load_data(global).await?;
            let snap = store.campaigns_snapshot();
            let found = snap.iter().find(|c| c.id == id);
            match found {
                Some(c) => {
                    let out = output::render_single(&global.output, c, detail, |c| c.id.clone());
                    output::print_output(&out, global.quiet);
                    Ok(())
                }
                None => Err(CliError::NotFound {
                    resource_type: "campaign",
                    identifier: id,
                    list_command: "campaigns list",
                }),
            }
        }

        CampaignsCommand::Create(create) => {
            let session = util::connect(global)?;
            let new = build_new_campaign(&create)?;
            let record = session
                .backend
                .create_campaign(&new)
                .await
                .map_err(|e| util::store_err(e, "campaign", &new.name, "campaigns list"))?;
            let campaign = Campaign::try_from(record)?;

            if !global.quiet {
                eprintln!("Created campaign {}", campaign.id);
            }
            let out = output::render_single(&global.output, &campaign, detail, |c| c.id.clone());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CampaignsCommand::Update(update) => {
            let session = util::connect(global)?;
            let id = update.id.clone();
            let changes = build_campaign_changes(update)?;
            if changes.is_empty() {
                return Err(CliError::Validation {
                    field: "update".into(),
                    reason: "no fields to update — pass at least one flag".into(),
                });
            }
            let record = session
                .backend
                .update_campaign(&id, &changes)
                .await
                .map_err(|e| util::store_err(e, "campaign", &id, "campaigns list"))?;
            let campaign = Campaign::try_from(record)?;

            if !global.quiet {
                eprintln!("Updated campaign {}", campaign.id);
            }
            let out = output::render_single(&global.output, &campaign, detail, |c| c.id.clone());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CampaignsCommand::Export(export) => handle_export(export, global).await,

        CampaignsCommand::Import(import) => {
            if import.template {
                output::print_output(import_mod::CAMPAIGN_TEMPLATE.trim_end(), global.quiet);
                return Ok(());
            }
            let path = import.file.ok_or_else(|| CliError::Validation {
                field: "import".into(),
                reason: "pass --file or --template".into(),
            })?;
            let rows = import_mod::read_campaign_template(File::open(&path)?)?;

            let session = util::connect(global)?;
            for new in &rows {
                session
                    .backend
                    .create_campaign(new)
                    .await
                    .map_err(|e| util::store_err(e, "campaign", &new.name, "campaigns list"))?;
            }
            if !global.quiet {
                eprintln!("Imported {} campaigns from {}", rows.len(), path.display());
            }
            Ok(())
        }
    }
}

/// Export always serializes the full filtered + sorted set — paging
/// does not apply.
async fn handle_export(args: CampaignExportArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let (store, _session) = util::load_data(global).await?;
    let rows = store.campaigns_snapshot().as_ref().clone();
    let mut table = TableController::new(rows);
    apply_filters_and_sort(&mut table, &args.filters)?;

    let file = File::create(&args.file)?;
    write_csv(table.sorted(), &campaign_columns(), file)?;

    if !global.quiet {
        eprintln!(
            "Exported {} rows to {}",
            table.total_filtered(),
            args.file.display()
        );
    }
    Ok(())
}

fn apply_filters_and_sort(
    table: &mut TableController<Campaign>,
    opts: &CampaignFilterOpts,
) -> Result<(), CliError> {
    table.update_filters(util::campaign_filter_update(opts)?);
    if let Some(ref field) = opts.sort {
        util::validate_sort_field(field, util::CAMPAIGN_SORT_FIELDS)?;
        table.handle_sort(field);
        if opts.desc {
            table.handle_sort(field);
        }
    }
    Ok(())
}

// ── Flag → wire payload translation ─────────────────────────────────

fn parse_media_type_value(text: &str) -> Result<MediaType, CliError> {
    MediaType::from_str(text).map_err(|_| CliError::Validation {
        field: "media type".into(),
        reason: format!("unknown media type '{text}'"),
    })
}

fn parse_status_value(text: &str) -> Result<CampaignStatus, CliError> {
    CampaignStatus::from_str(text).map_err(|_| CliError::Validation {
        field: "status".into(),
        reason: format!("unknown status '{text}'"),
    })
}

fn require_non_negative(field: &str, value: f64) -> Result<f64, CliError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CliError::Validation {
            field: field.into(),
            reason: "must be a non-negative number".into(),
        })
    }
}

fn build_new_campaign(args: &CreateCampaignArgs) -> Result<NewCampaign, CliError> {
    if args.end < args.start {
        return Err(CliError::Validation {
            field: "dates".into(),
            reason: "end date is before start date".into(),
        });
    }
    Ok(NewCampaign {
        name: args.name.clone(),
        media_type: parse_media_type_value(&args.media_type)?.to_string(),
        channel: args.channel.clone(),
        start_date: convert::wire_date(args.start),
        end_date: convert::wire_date(args.end),
        status: parse_status_value(&args.status)?.to_string(),
        budget: require_non_negative("budget", args.budget)?,
        impressions: args.impressions,
        clicks: args.clicks,
        reach: args.reach,
        roi: require_non_negative("roi", args.roi)?,
    })
}

fn build_campaign_changes(args: UpdateCampaignArgs) -> Result<CampaignChanges, CliError> {
    Ok(CampaignChanges {
        name: args.name,
        media_type: args
            .media_type
            .as_deref()
            .map(parse_media_type_value)
            .transpose()?
            .map(|m| m.to_string()),
        channel: args.channel,
        start_date: args.start.map(convert::wire_date),
        end_date: args.end.map(convert::wire_date),
        status: args
            .status
            .as_deref()
            .map(parse_status_value)
            .transpose()?
            .map(|s| s.to_string()),
        budget: args
            .budget
            .map(|b| require_non_negative("budget", b))
            .transpose()?,
        impressions: args.impressions,
        clicks: args.clicks,
        reach: args.reach,
        roi: args.roi.map(|r| require_non_negative("roi", r)).transpose()?,
    })
}
