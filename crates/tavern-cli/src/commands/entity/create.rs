use serde::de::DeserializeOwned;
use serde_json::Value;
use tavern_core::entities::{
    CharacterCreate, Entity, EntityPayload, EntityRecord, FactionCreate, LocationCreate,
    NoteCreate, QuestCreate,
};
use tavern_core::enums::EntityType;
use tavern_forms::{FormMode, SmartForm, entity_form};

use super::values;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::EntityFieldArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    game: &str,
    entity_type: EntityType,
    fields: &EntityFieldArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let form = entity_form(entity_type, FormMode::Create)?;
    let values = values::collect(&form, fields)?;
    let entity = match entity_type {
        EntityType::Character => create_as::<CharacterCreate>(&form, values, game, ctx).await?,
        EntityType::Faction => create_as::<FactionCreate>(&form, values, game, ctx).await?,
        EntityType::Location => create_as::<LocationCreate>(&form, values, game, ctx).await?,
        EntityType::Note => create_as::<NoteCreate>(&form, values, game, ctx).await?,
        EntityType::Quest => create_as::<QuestCreate>(&form, values, game, ctx).await?,
    };
    output(&entity, flags.format)
}

async fn create_as<P>(
    form: &SmartForm,
    values: Value,
    game: &str,
    ctx: &AppContext,
) -> anyhow::Result<Entity>
where
    P: EntityPayload + DeserializeOwned,
{
    let record = form
        .submit(
            values,
            |payload: P| ctx.client.create(game, payload),
            |_: &P::Record| tracing::info!(entity_type = %P::Record::ENTITY_TYPE, game, "entity created"),
        )
        .await?;
    Ok(record.into_entity())
}
