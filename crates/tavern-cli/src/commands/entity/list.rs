use tavern_core::entities::{Character, EntityRecord, Faction, Location, Note, Quest};
use tavern_core::enums::EntityType;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    game: &str,
    entity_type: EntityType,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    match entity_type {
        EntityType::Character => list_as::<Character>(game, limit, ctx, flags).await,
        EntityType::Faction => list_as::<Faction>(game, limit, ctx, flags).await,
        EntityType::Location => list_as::<Location>(game, limit, ctx, flags).await,
        EntityType::Note => list_as::<Note>(game, limit, ctx, flags).await,
        EntityType::Quest => list_as::<Quest>(game, limit, ctx, flags).await,
    }
}

async fn list_as<R: EntityRecord>(
    game: &str,
    limit: usize,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let records = ctx.client.list::<R>(game, Some(limit)).await?;
    output(&records[..records.len().min(limit)], flags.format)
}
