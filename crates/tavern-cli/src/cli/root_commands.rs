use clap::{Args, Subcommand};
use tavern_core::enums::EntityType;

use crate::cli::subcommands::{EntityCommands, GameCommands, MonsterArgs, SpellArgs};
use crate::cli::target::EntityTarget;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Games (campaigns).
    Game {
        #[command(subcommand)]
        action: GameCommands,
    },
    /// Characters, factions, locations, notes and quests.
    Entity {
        #[command(subcommand)]
        action: EntityCommands,
    },
    /// Everything linked to an entity, newest first.
    Links(LinksArgs),
    /// Link two entities.
    Link(LinkArgs),
    /// Remove a link between two entities.
    Unlink(LinkArgs),
    /// Show the form fields for an entity type.
    Form(FormArgs),
    /// Search or show spells.
    Spell(SpellArgs),
    /// Search or show monsters.
    Monster(MonsterArgs),
}

/// A parsed command split by whether it needs the campaign server.
#[derive(Debug)]
pub enum Route {
    /// Reference data and form listings; never touch the server.
    Offline(OfflineCommand),
    Server(ServerCommand),
}

#[derive(Debug)]
pub enum OfflineCommand {
    Form(FormArgs),
    Spell(SpellArgs),
    Monster(MonsterArgs),
}

#[derive(Debug)]
pub enum ServerCommand {
    Game(GameCommands),
    Entity(EntityCommands),
    Links(LinksArgs),
    Link(LinkArgs),
    Unlink(LinkArgs),
}

impl Commands {
    #[must_use]
    pub fn route(self) -> Route {
        match self {
            Self::Game { action } => Route::Server(ServerCommand::Game(action)),
            Self::Entity { action } => Route::Server(ServerCommand::Entity(action)),
            Self::Links(args) => Route::Server(ServerCommand::Links(args)),
            Self::Link(args) => Route::Server(ServerCommand::Link(args)),
            Self::Unlink(args) => Route::Server(ServerCommand::Unlink(args)),
            Self::Form(args) => Route::Offline(OfflineCommand::Form(args)),
            Self::Spell(args) => Route::Offline(OfflineCommand::Spell(args)),
            Self::Monster(args) => Route::Offline(OfflineCommand::Monster(args)),
        }
    }
}

/// Arguments for `tav links`.
#[derive(Clone, Debug, Args)]
pub struct LinksArgs {
    pub entity_type: EntityType,
    pub id: String,
}

/// Arguments for `tav link` and `tav unlink`.
#[derive(Clone, Debug, Args)]
pub struct LinkArgs {
    pub entity_type: EntityType,
    pub id: String,
    /// Other end of the link as `<type>:<id>`.
    #[arg(long)]
    pub to: EntityTarget,
}

/// Arguments for `tav form`.
#[derive(Clone, Debug, Args)]
pub struct FormArgs {
    pub entity_type: EntityType,
    /// Show the update form instead of the create form.
    #[arg(long)]
    pub update: bool,
}
