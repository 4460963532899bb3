use serde::Serialize;
use tb_client::SubjectApi;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SubjectDeletedResponse<'a> {
    subject: &'a str,
    deleted: i64,
}

pub async fn run(name: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let deleted = ctx.client.delete_subject(name).await?;
    output(
        &SubjectDeletedResponse {
            subject: name,
            deleted,
        },
        flags.format,
    )
}
