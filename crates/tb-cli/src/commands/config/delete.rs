use serde::Serialize;
use tb_client::{ConfigApi, Property};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_property;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ConfigDeletedResponse<'a> {
    subject: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    property: Option<Property>,
    deleted: i64,
}

pub async fn run(
    subject: &str,
    property: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let property = property.map(parse_property).transpose()?;
    let deleted = match property {
        None => ctx.client.delete_config(subject).await?,
        Some(property) => ctx.client.delete_property(subject, property).await?,
    };
    output(
        &ConfigDeletedResponse {
            subject,
            property,
            deleted,
        },
        flags.format,
    )
}
