#[path = "subject/create.rs"]
mod create;
#[path = "subject/delete.rs"]
mod delete;
#[path = "subject/get.rs"]
mod get;
#[path = "subject/list.rs"]
mod list;
#[path = "subject/update.rs"]
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SubjectCommands;
use crate::context::AppContext;

/// Handle `tb subject`.
pub async fn handle(
    action: &SubjectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SubjectCommands::Create { name, description } => {
            create::run(name, description.as_deref(), ctx, flags).await
        }
        SubjectCommands::Get { name } => get::run(name, ctx, flags).await,
        SubjectCommands::List => list::run(ctx, flags).await,
        SubjectCommands::Update { name, description } => {
            update::run(name, description.as_deref(), ctx, flags).await
        }
        SubjectCommands::Delete { name } => delete::run(name, ctx, flags).await,
    }
}
