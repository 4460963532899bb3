#[path = "schema/create.rs"]
mod create;
#[path = "schema/get.rs"]
mod get;
#[path = "schema/lookup.rs"]
mod lookup;
#[path = "schema/versions.rs"]
mod versions;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SchemaCommands;
use crate::context::AppContext;

/// Handle `tb schema`.
pub async fn handle(
    action: &SchemaCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SchemaCommands::Create {
            subject,
            definition,
        } => create::run(subject, definition, ctx, flags).await,
        SchemaCommands::Get {
            id,
            subject,
            version,
        } => get::run(*id, subject.as_deref(), version.as_deref(), ctx, flags).await,
        SchemaCommands::Lookup {
            subject,
            definition,
            all,
        } => lookup::run(subject, definition, *all, ctx, flags).await,
        SchemaCommands::Versions { subject } => versions::run(subject, ctx, flags).await,
    }
}
