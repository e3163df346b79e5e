use tavern_client::resolve_tag;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_id;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    game: &str,
    tag: &str,
    id: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let query = resolve_tag(game, tag, parse_id(id))?;
    let entity = ctx.client.entity(&query).await?;
    output(&*entity, flags.format)
}
