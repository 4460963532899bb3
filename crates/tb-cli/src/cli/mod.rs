use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `tb` binary.
#[derive(Debug, Parser)]
#[command(
    name = "tb",
    version,
    about = "tb is a typebook CLI to interact with a typebook server"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// URL of a typebook server (overrides configuration)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            url: self.url.clone(),
        }
    }
}
