use tb_client::SubjectApi;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let subjects = ctx.client.list_subjects().await?;
    output(&subjects, flags.format)
}
