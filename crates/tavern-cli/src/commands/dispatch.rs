use tavern_config::TavernConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{OfflineCommand, ServerCommand};
use crate::commands;
use crate::context::AppContext;

/// Dispatch a command that needs no server connection.
pub fn dispatch_offline(command: &OfflineCommand, config: &TavernConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        OfflineCommand::Form(args) => commands::form::handle(args, flags),
        OfflineCommand::Spell(args) => commands::spell::handle(args, config, flags),
        OfflineCommand::Monster(args) => commands::monster::handle(args, config, flags),
    }
}

/// Dispatch a server command to the corresponding handler module.
pub async fn dispatch(command: ServerCommand, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        ServerCommand::Game(action) => commands::game::handle(&action, ctx, flags).await,
        ServerCommand::Entity(action) => commands::entity::handle(&action, ctx, flags).await,
        ServerCommand::Links(args) => commands::links::handle_links(&args, ctx, flags).await,
        ServerCommand::Link(args) => commands::links::handle_link(&args, ctx, flags).await,
        ServerCommand::Unlink(args) => commands::links::handle_unlink(&args, ctx, flags).await,
    }
}
