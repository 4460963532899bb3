use clap::Subcommand;

use crate::cli::subcommands::{
    CompatibilityCommands, ConfigCommands, SchemaCommands, SubjectCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Manage subjects, the units schemas evolve under.
    Subject {
        #[command(subcommand)]
        action: SubjectCommands,
    },
    /// Manage and look up schemas under a subject.
    Schema {
        #[command(subcommand)]
        action: SchemaCommands,
    },
    /// Manage per-subject registry configuration.
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
    /// Check schemas against registered ones.
    Compatibility {
        #[command(subcommand)]
        action: CompatibilityCommands,
    },
}
