use clap::Subcommand;

/// Subject commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SubjectCommands {
    /// Create a subject.
    Create {
        name: String,
        /// Description for the subject.
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Show a subject.
    Get { name: String },
    /// List all subjects.
    List,
    /// Update the description of a subject.
    Update {
        name: String,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete a subject. Fails while schemas remain under it.
    Delete { name: String },
}
