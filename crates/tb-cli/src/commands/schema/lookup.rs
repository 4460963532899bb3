use serde::Serialize;
use tb_client::{Schema, SchemaApi, SemanticVersion};

use crate::cli::GlobalFlags;
use crate::commands::shared::input::value_or_from_path;
use crate::context::AppContext;
use crate::output::output;

/// Schema identity without its definition.
#[derive(Debug, Serialize)]
struct SchemaMeta {
    id: i64,
    subject: String,
    version: SemanticVersion,
}

impl From<Schema> for SchemaMeta {
    fn from(schema: Schema) -> Self {
        Self {
            id: schema.id,
            subject: schema.subject,
            version: schema.version,
        }
    }
}

pub async fn run(
    subject: &str,
    definition: &str,
    all: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let definition = value_or_from_path(definition)?;
    let metas: Vec<SchemaMeta> = if all {
        ctx.client
            .lookup_all_schemas(subject, &definition)
            .await?
            .into_iter()
            .map(SchemaMeta::from)
            .collect()
    } else {
        vec![ctx.client.lookup_schema(subject, &definition).await?.into()]
    };
    output(&metas, flags.format)
}
