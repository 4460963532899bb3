use clap::Subcommand;

/// Schema commands. Definitions are given inline or as `@path`.
#[derive(Clone, Debug, Subcommand)]
pub enum SchemaCommands {
    /// Register a new schema under a subject.
    Create {
        #[arg(long)]
        subject: String,
        definition: String,
    },
    /// Show a schema definition by ID, or by subject and version.
    ///
    /// When both are given the ID wins. Without --version the latest schema
    /// under the subject is shown.
    Get {
        #[arg(long)]
        id: Option<i64>,
        #[arg(long, required_unless_present = "id")]
        subject: Option<String>,
        /// latest, vMAJOR or vMAJOR.MINOR.PATCH
        #[arg(long)]
        version: Option<String>,
    },
    /// Look up ID and version of schemas matching a definition.
    Lookup {
        #[arg(long)]
        subject: String,
        definition: String,
        /// Show every matching schema instead of the newest one.
        #[arg(long)]
        all: bool,
    },
    /// List every version registered under a subject.
    Versions {
        #[arg(long)]
        subject: String,
    },
}
