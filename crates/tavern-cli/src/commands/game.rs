use serde_json::{Map, Value};
use tavern_core::entities::{Game, GameCreate, GameUpdate};
use tavern_forms::SmartForm;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::GameCommands;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tav game`.
pub async fn handle(action: &GameCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        GameCommands::List => {
            let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
            let games = ctx.client.games().await?;
            output(&games[..games.len().min(limit)], flags.format)
        }
        GameCommands::Get { id } => {
            let game = ctx.client.game(id).await?;
            output(&*game, flags.format)
        }
        GameCommands::Create { name, description } => {
            let form = SmartForm::for_type::<GameCreate>()?;
            let values = game_values(Some(name), description.as_deref());
            let game = form
                .submit(
                    values,
                    |payload: GameCreate| async move { ctx.client.create_game(&payload).await },
                    |game: &Game| tracing::info!(id = %game.id, name = %game.name, "game created"),
                )
                .await?;
            output(&game, flags.format)
        }
        GameCommands::Update {
            id,
            name,
            description,
        } => {
            if name.is_none() && description.is_none() {
                anyhow::bail!("At least one of --name or --description must be provided");
            }
            let form = SmartForm::for_type::<GameUpdate>()?;
            let payload: GameUpdate = form.parse(game_values(name.as_ref(), description.as_deref()))?;
            let game = ctx.client.update_game(id, &payload).await?;
            output(&game, flags.format)
        }
        GameCommands::Delete { id } => {
            ctx.client.delete_game(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}

fn game_values(name: Option<&String>, description: Option<&str>) -> Value {
    let mut values = Map::new();
    if let Some(name) = name {
        values.insert("name".into(), Value::String(name.clone()));
    }
    if let Some(description) = description {
        values.insert("description".into(), Value::String(description.to_string()));
    }
    Value::Object(values)
}
