//! Inventory command handlers.

use std::fs::File;

use owo_colors::OwoColorize;
use tabled::Tabled;

use adlens_core::export::{inventory_columns, write_csv};
use adlens_core::import as import_mod;
use adlens_core::{InventoryItem, TableController, fmt};

use crate::cli::{
    GlobalOpts, InventoryArgs, InventoryCommand, InventoryExportArgs, InventoryFilterOpts,
    OutputFormat,
};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct InventoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Owner")]
    owner: String,
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Available")]
    window: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&InventoryItem> for InventoryRow {
    fn from(i: &InventoryItem) -> Self {
        Self {
            id: i.id.clone(),
            kind: i.kind.clone(),
            location: i.location.clone(),
            owner: i.media_owner.clone(),
            size: i.size.clone(),
            window: format!("{} to {}", i.availability_start, i.availability_end),
            price: fmt::currency(i.price),
            status: i.status.to_string(),
        }
    }
}

fn detail(i: &InventoryItem) -> String {
    [
        format!("ID:           {}", i.id),
        format!("Type:         {}", i.kind),
        format!("Location:     {}", i.location),
        format!("Media owner:  {}", i.media_owner),
        format!("Size:         {}", i.size),
        format!(
            "Available:    {} to {}",
            i.availability_start, i.availability_end
        ),
        format!("Price:        {}", fmt::currency(i.price)),
        format!("Status:       {}", i.status),
    ]
    .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(args: InventoryArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        InventoryCommand::List(list) => {
            let (store, session) = util::load_data(global).await?;
            let rows = store.inventory_snapshot().as_ref().clone();
            let mut table = TableController::with_page_size(
                rows,
                list.page_size.unwrap_or(session.default_page_size),
            );

            apply_filters_and_sort(&mut table, &list.filters)?;
            table.go_to_page(list.page);

            let out = output::render_list(
                &global.output,
                table.visible_rows(),
                |i| InventoryRow::from(i),
                |i| i.id.clone(),
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

        InventoryCommand::Get { id } => {
            let (store, _session) = util::load_data(global).await?;
            let snap = store.inventory_snapshot();
            let found = snap.iter().find(|i| i.id == id);
            match found {
                Some(i) => {
                    let out = output::render_single(&global.output, i, detail, |i| i.id.clone());
                    output::print_output(&out, global.quiet);
                    Ok(())
                }
                None => Err(CliError::NotFound {
                    resource_type: "inventory placement",
                    identifier: id,
                    list_command: "inventory list",
                }),
            }
        }

        InventoryCommand::Export(export) => handle_export(export, global).await,

        InventoryCommand::Import(import) => {
            if import.template {
                output::print_output(import_mod::INVENTORY_TEMPLATE.trim_end(), global.quiet);
                return Ok(());
            }
            let path = import.file.ok_or_else(|| CliError::Validation {
                field: "import".into(),
                reason: "pass --file or --template".into(),
            })?;
            let rows = import_mod::read_inventory_template(File::open(&path)?)?;

            let session = util::connect(global)?;
            for new in &rows {
                session
                    .backend
                    .create_inventory(new)
                    .await
                    .map_err(|e| util::store_err(e, "inventory placement", &new.kind, "inventory list"))?;
            }
            if !global.quiet {
                eprintln!(
                    "Imported {} inventory placements from {}",
                    rows.len(),
                    path.display()
                );
            }
            Ok(())
        }
    }
}

async fn handle_export(args: InventoryExportArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let (store, _session) = util::load_data(global).await?;
    let rows = store.inventory_snapshot().as_ref().clone();
    let mut table = TableController::new(rows);
    apply_filters_and_sort(&mut table, &args.filters)?;

    let file = File::create(&args.file)?;
    write_csv(table.sorted(), &inventory_columns(), file)?;

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
    table: &mut TableController<InventoryItem>,
    opts: &InventoryFilterOpts,
) -> Result<(), CliError> {
    table.update_filters(util::inventory_filter_update(opts)?);
    if let Some(ref field) = opts.sort {
        util::validate_sort_field(field, util::INVENTORY_SORT_FIELDS)?;
        table.handle_sort(field);
        if opts.desc {
            table.handle_sort(field);
        }
    }
    Ok(())
}
