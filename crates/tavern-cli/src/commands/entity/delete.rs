use serde_json::json;
use tavern_core::enums::EntityType;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_id;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    game: &str,
    entity_type: EntityType,
    id: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let id = parse_id(id);
    ctx.client.delete(entity_type, game, &id).await?;
    output(
        &json!({ "deleted": { "type": entity_type, "id": id } }),
        flags.format,
    )
}
