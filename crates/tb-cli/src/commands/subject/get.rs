use tb_client::SubjectApi;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(name: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let subject = ctx.client.get_subject(name).await?;
    output(&subject, flags.format)
}
