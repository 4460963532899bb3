#[path = "config/delete.rs"]
mod delete;
#[path = "config/get.rs"]
mod get;
#[path = "config/set.rs"]
mod set;

use anyhow::bail;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ConfigCommands;
use crate::context::AppContext;

/// Handle `tb config`.
pub async fn handle(
    action: &ConfigCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ConfigCommands::Set { subject, args } => match args.as_slice() {
            [definition] => set::run_config(subject, definition, ctx, flags).await,
            [property, value] => set::run_property(subject, property, value, ctx, flags).await,
            _ => bail!("config set takes a definition, or a property and its value"),
        },
        ConfigCommands::Get { subject, property } => {
            get::run(subject, property.as_deref(), ctx, flags).await
        }
        ConfigCommands::Delete { subject, property } => {
            delete::run(subject, property.as_deref(), ctx, flags).await
        }
    }
}
