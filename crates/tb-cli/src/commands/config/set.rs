use anyhow::Context;
use serde::Serialize;
use tb_client::{CompatibilityType, ConfigApi, ConfigEntry, Property, RegistryConfig};

use crate::cli::GlobalFlags;
use crate::commands::shared::input::value_or_from_path;
use crate::commands::shared::parse::parse_property;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ConfigSetResponse<'a> {
    subject: &'a str,
    config: RegistryConfig,
}

/// Replace the whole config with a JSON document.
pub async fn run_config(
    subject: &str,
    definition: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let content = value_or_from_path(definition)?;
    let config: RegistryConfig =
        serde_json::from_str(&content).context("failed to decode config definition")?;
    ctx.client.set_config(subject, config).await?;
    output(&ConfigSetResponse { subject, config }, flags.format)
}

/// Set one property. Known enumerated values are checked before sending.
pub async fn run_property(
    subject: &str,
    property: &str,
    value: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let property = parse_property(property)?;
    let value = normalize_value(property, value)?;
    ctx.client.set_property(subject, property, &value).await?;
    output(
        &ConfigEntry {
            subject: subject.to_string(),
            property,
            value,
        },
        flags.format,
    )
}

fn normalize_value(property: Property, value: &str) -> anyhow::Result<String> {
    match property {
        Property::Compatibility => Ok(value.parse::<CompatibilityType>()?.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compatibility_values_are_upper_cased() {
        assert_eq!(
            normalize_value(Property::Compatibility, "backward").unwrap(),
            "BACKWARD"
        );
        assert!(normalize_value(Property::Compatibility, "sideways").is_err());
    }
}
