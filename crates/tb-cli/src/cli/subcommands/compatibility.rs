use clap::Subcommand;

/// Compatibility commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CompatibilityCommands {
    /// Check a definition (inline or `@path`) against a registered schema.
    Check {
        #[arg(long)]
        subject: String,
        definition: String,
        /// latest, vMAJOR or vMAJOR.MINOR.PATCH; defaults to latest.
        #[arg(long)]
        version: Option<String>,
    },
}
