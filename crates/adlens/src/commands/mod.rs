//! Command dispatch: bridges CLI args -> core engine -> output formatting.

pub mod assistant;
pub mod campaigns;
pub mod config_cmd;
pub mod inventory;
pub mod kpi;
pub mod util;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a data-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Campaigns(args) => campaigns::handle(args, global).await,
        Command::Inventory(args) => inventory::handle(args, global).await,
        Command::Kpi(args) => kpi::handle(args, global).await,
        Command::Assistant(args) => assistant::handle(args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
