//! Clap derive structures for the `adlens` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// adlens -- campaign analytics from the command line
#[derive(Debug, Parser)]
#[command(
    name = "adlens",
    version,
    about = "Analyze advertising campaigns and ad inventory from the command line",
    long_about = "Campaign analytics against a remote data store or built-in sample data.\n\n\
        Filter, sort, and page campaign and inventory tables, pull KPI\n\
        summaries, export CSV files, and query the scripted assistant.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Data store profile to use
    #[arg(long, short = 'p', env = "ADLENS_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Data store URL (overrides profile)
    #[arg(long, env = "ADLENS_STORE_URL", global = true)]
    pub store_url: Option<String>,

    /// Data store API key
    #[arg(long, env = "ADLENS_API_KEY", global = true, hide_env = true)]
    pub api_key: Option<String>,

    /// Use the offline sample backend instead of a remote store
    #[arg(long, env = "ADLENS_MOCK", global = true)]
    pub mock: bool,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "ADLENS_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "ADLENS_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "ADLENS_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse and manage advertising campaigns
    #[command(alias = "camp", alias = "c")]
    Campaigns(CampaignsArgs),

    /// Browse and manage ad inventory
    #[command(alias = "inv", alias = "i")]
    Inventory(InventoryArgs),

    /// KPI summary, media-type breakdown, and top performers
    Kpi(KpiArgs),

    /// Ask the scripted campaign assistant
    #[command(alias = "ask")]
    Assistant(AssistantArgs),

    /// Manage configuration profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Campaigns ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CampaignsArgs {
    #[command(subcommand)]
    pub command: CampaignsCommand,
}

#[derive(Debug, Subcommand)]
pub enum CampaignsCommand {
    /// List campaigns with filters, sorting, and paging
    #[command(alias = "ls")]
    List(CampaignListArgs),

    /// Show one campaign in detail
    Get {
        /// Campaign id
        id: String,
    },

    /// Create a campaign
    Create(CreateCampaignArgs),

    /// Update fields on an existing campaign
    Update(UpdateCampaignArgs),

    /// Export the filtered, sorted campaign table to CSV
    Export(CampaignExportArgs),

    /// Bulk-import campaigns from a CSV file
    Import(ImportArgs),
}

/// Shared flags for the bulk-import subcommands.
#[derive(Debug, Args)]
pub struct ImportArgs {
    /// CSV file in the import template layout
    #[arg(long, short = 'f', required_unless_present = "template")]
    pub file: Option<PathBuf>,

    /// Print the import template and exit
    #[arg(long, conflicts_with = "file")]
    pub template: bool,
}

/// Filter and ordering flags shared by `list` and `export`.
#[derive(Debug, Args, Default)]
pub struct CampaignFilterOpts {
    /// Substring match over name, channel, and media type
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Only campaigns with this media type (Outdoor, Digital, TV, ...)
    #[arg(long, short = 'm')]
    pub media_type: Option<String>,

    /// Only campaigns with this status (Active, Paused, Completed, Draft)
    #[arg(long)]
    pub status: Option<String>,

    /// Only campaigns starting on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Only campaigns ending on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Minimum budget
    #[arg(long)]
    pub min_budget: Option<String>,

    /// Maximum budget
    #[arg(long)]
    pub max_budget: Option<String>,

    /// Sort column (name, channel, media_type, status, start_date,
    /// end_date, budget, impressions, clicks, reach, roi)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    pub desc: bool,
}

#[derive(Debug, Args)]
pub struct CampaignListArgs {
    #[command(flatten)]
    pub filters: CampaignFilterOpts,

    /// Page to show (1-indexed)
    #[arg(long, default_value = "1")]
    pub page: usize,

    /// Rows per page
    #[arg(long)]
    pub page_size: Option<usize>,
}

#[derive(Debug, Args)]
pub struct CampaignExportArgs {
    #[command(flatten)]
    pub filters: CampaignFilterOpts,

    /// Output file path
    #[arg(long, short = 'f')]
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct CreateCampaignArgs {
    /// Campaign name
    pub name: String,

    /// Media type (Outdoor, Digital, TV, Radio, Print, Social)
    #[arg(long, short = 'm')]
    pub media_type: String,

    /// Channel, e.g. "Google Ads"
    #[arg(long)]
    pub channel: String,

    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: NaiveDate,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub end: NaiveDate,

    /// Status (Active, Paused, Completed, Draft)
    #[arg(long, default_value = "Draft")]
    pub status: String,

    /// Budget in dollars
    #[arg(long)]
    pub budget: f64,

    /// Recorded impressions
    #[arg(long, default_value = "0")]
    pub impressions: u64,

    /// Recorded clicks
    #[arg(long, default_value = "0")]
    pub clicks: u64,

    /// Recorded reach
    #[arg(long, default_value = "0")]
    pub reach: u64,

    /// Return on investment multiplier
    #[arg(long, default_value = "0")]
    pub roi: f64,
}

#[derive(Debug, Args)]
pub struct UpdateCampaignArgs {
    /// Campaign id
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    /// Media type (Outdoor, Digital, TV, Radio, Print, Social)
    #[arg(long, short = 'm')]
    pub media_type: Option<String>,

    #[arg(long)]
    pub channel: Option<String>,

    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Status (Active, Paused, Completed, Draft)
    #[arg(long)]
    pub status: Option<String>,

    #[arg(long)]
    pub budget: Option<f64>,

    #[arg(long)]
    pub impressions: Option<u64>,

    #[arg(long)]
    pub clicks: Option<u64>,

    #[arg(long)]
    pub reach: Option<u64>,

    #[arg(long)]
    pub roi: Option<f64>,
}

// ── Inventory ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InventoryArgs {
    #[command(subcommand)]
    pub command: InventoryCommand,
}

#[derive(Debug, Subcommand)]
pub enum InventoryCommand {
    /// List inventory with filters, sorting, and paging
    #[command(alias = "ls")]
    List(InventoryListArgs),

    /// Show one inventory placement in detail
    Get {
        /// Inventory id
        id: String,
    },

    /// Export the filtered, sorted inventory table to CSV
    Export(InventoryExportArgs),

    /// Bulk-import inventory from a CSV file
    Import(ImportArgs),
}

/// Filter and ordering flags shared by `list` and `export`.
#[derive(Debug, Args, Default)]
pub struct InventoryFilterOpts {
    /// Substring match over type, location, and media owner
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Only placements with this status (Available, Booked, Pending)
    #[arg(long)]
    pub status: Option<String>,

    /// Only placements available from this date on (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Only placements available through this date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Minimum price
    #[arg(long)]
    pub min_price: Option<String>,

    /// Maximum price
    #[arg(long)]
    pub max_price: Option<String>,

    /// Sort column (kind, location, media_owner, size,
    /// availability_start, availability_end, price, status)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    pub desc: bool,
}

#[derive(Debug, Args)]
pub struct InventoryListArgs {
    #[command(flatten)]
    pub filters: InventoryFilterOpts,

    /// Page to show (1-indexed)
    #[arg(long, default_value = "1")]
    pub page: usize,

    /// Rows per page
    #[arg(long)]
    pub page_size: Option<usize>,
}

#[derive(Debug, Args)]
pub struct InventoryExportArgs {
    #[command(flatten)]
    pub filters: InventoryFilterOpts,

    /// Output file path
    #[arg(long, short = 'f')]
    pub file: PathBuf,
}

// ── KPI / Assistant ──────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct KpiArgs {
    /// How many top campaigns to show
    #[arg(long, default_value = "3")]
    pub top: usize,
}

#[derive(Debug, Args)]
pub struct AssistantArgs {
    /// The question to ask, e.g. "show me top performing campaigns"
    #[arg(required = true, num_args = 1..)]
    pub question: Vec<String>,
}

// ── Config / Completions ─────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file location
    Path,

    /// Show the effective configuration (keys redacted)
    Show,

    /// Write a starter config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
