use serde::Serialize;
use tb_client::SchemaApi;

use crate::cli::GlobalFlags;
use crate::commands::shared::input::value_or_from_path;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SchemaRegisteredResponse<'a> {
    subject: &'a str,
    id: i64,
}

pub async fn run(
    subject: &str,
    definition: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let definition = value_or_from_path(definition)?;
    let registered = ctx.client.register_schema(subject, &definition).await?;
    output(
        &SchemaRegisteredResponse {
            subject,
            id: registered.id,
        },
        flags.format,
    )
}
