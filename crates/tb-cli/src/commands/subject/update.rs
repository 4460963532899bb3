use serde::Serialize;
use tb_client::SubjectApi;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SubjectUpdatedResponse<'a> {
    subject: &'a str,
    updated: i64,
}

pub async fn run(
    name: &str,
    description: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let updated = ctx.client.update_description(name, description).await?;
    output(
        &SubjectUpdatedResponse {
            subject: name,
            updated,
        },
        flags.format,
    )
}
