use serde::de::DeserializeOwned;
use serde_json::Value;
use tavern_client::resolve;
use tavern_core::entities::{
    CharacterUpdate, Entity, EntityPayload, EntityRecord, FactionUpdate, LocationUpdate,
    NoteUpdate, QuestUpdate,
};
use tavern_core::enums::{EntityType, QuestStatus};
use tavern_core::ids::EntityId;
use tavern_forms::{FormMode, SmartForm, entity_form};

use super::values;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::EntityFieldArgs;
use crate::commands::shared::parse::{parse_enum, parse_id};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    game: &str,
    entity_type: EntityType,
    id: &str,
    fields: &EntityFieldArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let form = entity_form(entity_type, FormMode::Update)?;
    let values = values::collect(&form, fields)?;
    if values.as_object().is_some_and(serde_json::Map::is_empty) {
        anyhow::bail!("At least one field flag must be provided");
    }

    let id = parse_id(id);
    if entity_type == EntityType::Quest
        && let Some(raw) = fields.status.as_deref()
    {
        check_quest_transition(game, &id, parse_enum(raw, "status")?, ctx).await?;
    }

    let entity = match entity_type {
        EntityType::Character => update_as::<CharacterUpdate>(&form, values, game, &id, ctx).await?,
        EntityType::Faction => update_as::<FactionUpdate>(&form, values, game, &id, ctx).await?,
        EntityType::Location => update_as::<LocationUpdate>(&form, values, game, &id, ctx).await?,
        EntityType::Note => update_as::<NoteUpdate>(&form, values, game, &id, ctx).await?,
        EntityType::Quest => update_as::<QuestUpdate>(&form, values, game, &id, ctx).await?,
    };
    output(&entity, flags.format)
}

async fn update_as<P>(
    form: &SmartForm,
    values: Value,
    game: &str,
    id: &EntityId,
    ctx: &AppContext,
) -> anyhow::Result<Entity>
where
    P: EntityPayload + DeserializeOwned,
{
    let payload: P = form.parse(values)?;
    let record = ctx.client.update(game, id, payload).await?;
    Ok(record.into_entity())
}

/// Quests only move forward: rumored → active → completed | failed.
/// Re-sending the current status is allowed.
async fn check_quest_transition(
    game: &str,
    id: &EntityId,
    next: QuestStatus,
    ctx: &AppContext,
) -> anyhow::Result<()> {
    let query = resolve(game, EntityType::Quest, id.clone())?;
    if let Entity::Quest(quest) = &*ctx.client.entity(&query).await?
        && !allowed(quest.status, next)
    {
        anyhow::bail!("quest {id} cannot move from {} to {next}", quest.status);
    }
    Ok(())
}

fn allowed(current: QuestStatus, next: QuestStatus) -> bool {
    current == next || current.can_transition_to(next)
}

#[cfg(test)]
mod tests {
    use tavern_core::enums::QuestStatus;

    use super::allowed;

    #[test]
    fn quests_move_forward_only() {
        assert!(allowed(QuestStatus::Rumored, QuestStatus::Active));
        assert!(allowed(QuestStatus::Active, QuestStatus::Failed));
        assert!(allowed(QuestStatus::Completed, QuestStatus::Completed));
        assert!(!allowed(QuestStatus::Rumored, QuestStatus::Completed));
        assert!(!allowed(QuestStatus::Failed, QuestStatus::Active));
    }
}
