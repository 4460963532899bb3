use serde::Serialize;
use tb_client::SubjectApi;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SubjectCreatedResponse<'a> {
    subject: &'a str,
    created: i64,
}

pub async fn run(
    name: &str,
    description: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let created = ctx.client.create_subject(name, description).await?;
    output(
        &SubjectCreatedResponse {
            subject: name,
            created,
        },
        flags.format,
    )
}
