use clap::{Args, Subcommand};
use tavern_core::enums::EntityType;

/// Campaign entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EntityCommands {
    /// Get one entity. The type may be singular or plural.
    Get { entity_type: String, id: String },
    /// List entities of one type.
    List { entity_type: EntityType },
    /// Create an entity.
    Create {
        entity_type: EntityType,
        #[command(flatten)]
        fields: EntityFieldArgs,
    },
    /// Update an entity. Only the given fields change.
    Update {
        entity_type: EntityType,
        id: String,
        #[command(flatten)]
        fields: EntityFieldArgs,
    },
    /// Delete an entity.
    Delete { entity_type: EntityType, id: String },
}

/// Field values shared by create and update. Fields the type does not have
/// are rejected before any request.
#[derive(Clone, Debug, Default, Args)]
pub struct EntityFieldArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Rich-text document JSON or plain text.
    #[arg(long)]
    pub content: Option<String>,
    /// Character kind (`player`, `non_player`).
    #[arg(long)]
    pub kind: Option<String>,
    /// Quest status (`rumored`, `active`, `completed`, `failed`).
    #[arg(long)]
    pub status: Option<String>,
    /// Parent location ID.
    #[arg(long)]
    pub parent: Option<String>,
}
