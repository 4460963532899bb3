use anyhow::bail;
use tb_client::SchemaApi;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_selector;
use crate::context::AppContext;
use crate::output::render_schema;

/// Fetch by `id` when given, otherwise by `subject` and `version`.
pub async fn run(
    id: Option<i64>,
    subject: Option<&str>,
    version: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let schema = match (id, subject) {
        (Some(id), _) => ctx.client.get_schema_by_id(id).await?,
        (None, Some(subject)) => {
            let selector = parse_selector(version)?;
            ctx.client.get_schema(subject, selector).await?
        }
        (None, None) => bail!("either --id or --subject must be specified"),
    };

    println!(
        "{}",
        render_schema(&schema, flags.format, ctx.config.output.indent)?
    );
    Ok(())
}
