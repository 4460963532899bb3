use tb_client::SchemaApi;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(subject: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let versions = ctx.client.list_versions(subject).await?;
    output(&versions, flags.format)
}
