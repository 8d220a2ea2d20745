//! KPI summary command.

use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::Tabled;

use adlens_core::{KpiSummary, MediaTypeSlice, fmt, kpi, media_type_breakdown};

use crate::cli::{GlobalOpts, KpiArgs, OutputFormat};
use crate::error::CliError;
use crate::output;

use super::util;

/// Combined payload for structured output formats.
#[derive(Serialize)]
struct KpiReport {
    summary: KpiSummary,
    by_media_type: Vec<MediaTypeSlice>,
    top_campaigns: Vec<TopCampaign>,
}

#[derive(Serialize)]
struct TopCampaign {
    id: String,
    name: String,
    roi: f64,
    budget: f64,
}

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Media")]
    media: String,
    #[tabled(rename = "Campaigns")]
    campaigns: usize,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Share")]
    share: String,
}

#[derive(Tabled)]
struct TopRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Campaign")]
    name: String,
    #[tabled(rename = "ROI")]
    roi: String,
    #[tabled(rename = "Budget")]
    budget: String,
}

pub async fn handle(args: KpiArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let (store, _session) = util::load_data(global).await?;
    let campaigns = store.campaigns_snapshot();

    let summary = KpiSummary::from_campaigns(&campaigns);
    let breakdown = media_type_breakdown(&campaigns);
    let top: Vec<TopCampaign> = kpi::top_by_roi(&campaigns, args.top)
        .into_iter()
        .map(|c| TopCampaign {
            id: c.id.clone(),
            name: c.name.clone(),
            roi: c.roi,
            budget: c.budget,
        })
        .collect();

    if matches!(global.output, OutputFormat::Table) {
        render_dashboard(&summary, &breakdown, &top, global);
        return Ok(());
    }

    let report = KpiReport {
        summary,
        by_media_type: breakdown,
        top_campaigns: top,
    };
    let out = output::render_single(&global.output, &report, |_| String::new(), |_| String::new());
    output::print_output(&out, global.quiet);
    Ok(())
}

fn render_dashboard(
    summary: &KpiSummary,
    breakdown: &[MediaTypeSlice],
    top: &[TopCampaign],
    global: &GlobalOpts,
) {
    if global.quiet {
        return;
    }
    let color = output::should_color(&global.color);
    let heading = |text: &str| {
        if color {
            text.bold().to_string()
        } else {
            text.to_owned()
        }
    };

    println!("{}", heading("Overview"));
    println!("  Total spend:        {}", fmt::currency(summary.total_spend));
    println!(
        "  Total impressions:  {}",
        fmt::count(summary.total_impressions)
    );
    println!(
        "  Total conversions:  {}",
        fmt::count(summary.total_conversions)
    );
    println!("  Average ROI:        {}", fmt::roi(summary.average_roi));

    if !breakdown.is_empty() {
        let rows: Vec<BreakdownRow> = breakdown
            .iter()
            .map(|s| BreakdownRow {
                media: s.media_type.to_string(),
                campaigns: s.campaigns,
                budget: fmt::currency(s.budget),
                share: fmt::percent(s.budget_share_pct),
            })
            .collect();
        println!();
        println!("{}", heading("Spend by media type"));
        println!(
            "{}",
            tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
        );
    }

    if !top.is_empty() {
        let rows: Vec<TopRow> = top
            .iter()
            .enumerate()
            .map(|(i, c)| TopRow {
                rank: i + 1,
                name: c.name.clone(),
                roi: fmt::roi(c.roi),
                budget: fmt::currency(c.budget),
            })
            .collect();
        println!();
        println!("{}", heading("Top campaigns by ROI"));
        println!(
            "{}",
            tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
        );
    }
}
