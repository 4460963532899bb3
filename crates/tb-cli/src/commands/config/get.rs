use serde::Serialize;
use tb_client::{ConfigApi, ConfigEntry, RegistryConfig};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_property;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ConfigResponse<'a> {
    subject: &'a str,
    config: RegistryConfig,
}

pub async fn run(
    subject: &str,
    property: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match property {
        None => {
            let config = ctx.client.get_config(subject).await?;
            output(&ConfigResponse { subject, config }, flags.format)
        }
        Some(property) => {
            let property = parse_property(property)?;
            let value = ctx.client.get_property(subject, property).await?;
            output(
                &ConfigEntry {
                    subject: subject.to_string(),
                    property,
                    value,
                },
                flags.format,
            )
        }
    }
}
