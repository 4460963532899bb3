use crate::cli::GlobalFlags;
use crate::commands::shared::input::value_or_from_path;
use crate::commands::shared::parse::parse_selector;
use crate::context::AppContext;
use crate::output::render_compatibility;

pub async fn run(
    subject: &str,
    definition: &str,
    version: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let selector = parse_selector(version)?;
    let definition = value_or_from_path(definition)?;
    let compatibility = ctx
        .client
        .check_compatibility(subject, selector, &definition)
        .await?;
    println!("{}", render_compatibility(compatibility, flags.format)?);
    Ok(())
}
