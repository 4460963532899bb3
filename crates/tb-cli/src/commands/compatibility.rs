#[path = "compatibility/check.rs"]
mod check;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CompatibilityCommands;
use crate::context::AppContext;

/// Handle `tb compatibility`.
pub async fn handle(
    action: &CompatibilityCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CompatibilityCommands::Check {
            subject,
            definition,
            version,
        } => check::run(subject, definition, version.as_deref(), ctx, flags).await,
    }
}
