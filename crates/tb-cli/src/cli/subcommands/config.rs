use clap::Subcommand;
use tb_client::Property;

/// Per-subject config commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ConfigCommands {
    /// Set a config: one argument replaces the whole config with a JSON
    /// document (inline or `@path`), two arguments set PROPERTY to VALUE.
    #[command(after_help = property_help())]
    Set {
        #[arg(long)]
        subject: String,
        #[arg(required = true, num_args = 1..=2, value_name = "ARG")]
        args: Vec<String>,
    },
    /// Show the config of a subject, or a single property of it.
    #[command(after_help = property_help())]
    Get {
        #[arg(long)]
        subject: String,
        property: Option<String>,
    },
    /// Delete the config of a subject, or a single property of it.
    /// A deleted property falls back to the registry default.
    #[command(after_help = property_help())]
    Delete {
        #[arg(long)]
        subject: String,
        property: Option<String>,
    },
}

fn property_help() -> String {
    let lines = Property::ALL
        .iter()
        .map(|p| format!("  {p}: {}", p.description()))
        .collect::<Vec<_>>();
    format!("Available properties:\n{}", lines.join("\n"))
}

#[cfg(test)]
mod tests {
    #[test]
    fn property_help_lists_every_property() {
        assert!(super::property_help().contains("compatibility: "));
    }
}
