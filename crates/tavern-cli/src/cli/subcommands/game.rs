use clap::Subcommand;

/// Game commands.
#[derive(Clone, Debug, Subcommand)]
pub enum GameCommands {
    /// List games visible to the configured token.
    List,
    /// Get a game by ID.
    Get { id: String },
    /// Create a game.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Rename or redescribe a game.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a game and everything in it.
    Delete { id: String },
}
