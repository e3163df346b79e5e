mod create;
mod delete;
mod get;
mod list;
mod update;
mod values;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::EntityCommands;
use crate::context::AppContext;

/// Handle `tav entity`.
pub async fn handle(action: &EntityCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let game = ctx.game(flags)?;
    match action {
        EntityCommands::Get { entity_type, id } => get::run(game, entity_type, id, ctx, flags).await,
        EntityCommands::List { entity_type } => list::run(game, *entity_type, ctx, flags).await,
        EntityCommands::Create {
            entity_type,
            fields,
        } => create::run(game, *entity_type, fields, ctx, flags).await,
        EntityCommands::Update {
            entity_type,
            id,
            fields,
        } => update::run(game, *entity_type, id, fields, ctx, flags).await,
        EntityCommands::Delete { entity_type, id } => {
            delete::run(game, *entity_type, id, ctx, flags).await
        }
    }
}
