use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Subject { action } => commands::subject::handle(&action, ctx, flags).await,
        Commands::Schema { action } => commands::schema::handle(&action, ctx, flags).await,
        Commands::Config { action } => commands::config::handle(&action, ctx, flags).await,
        Commands::Compatibility { action } => {
            commands::compatibility::handle(&action, ctx, flags).await
        }
    }
}
