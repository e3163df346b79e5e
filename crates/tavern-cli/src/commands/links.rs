use serde::Serialize;
use tavern_client::EntityRef;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{LinkArgs, LinksArgs};
use crate::commands::shared::parse::parse_id;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct LinkChange {
    action: &'static str,
    source: String,
    target: String,
}

/// Handle `tav links`.
pub async fn handle_links(args: &LinksArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let game = ctx.game(flags)?;
    let entity = EntityRef::new(args.entity_type, parse_id(&args.id));
    let mut rows = ctx.client.link_table(game, &entity).await?;
    if let Some(limit) = flags.limit {
        rows.truncate(usize::try_from(limit)?);
    }
    output(&rows, flags.format)
}

/// Handle `tav link`.
pub async fn handle_link(args: &LinkArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let game = ctx.game(flags)?;
    let (source, target) = ends(args);
    ctx.client.link(game, &source, &target).await?;
    output(&change("linked", args), flags.format)
}

/// Handle `tav unlink`.
pub async fn handle_unlink(args: &LinkArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let game = ctx.game(flags)?;
    let (source, target) = ends(args);
    ctx.client.unlink(game, &source, &target).await?;
    output(&change("unlinked", args), flags.format)
}

fn ends(args: &LinkArgs) -> (EntityRef, EntityRef) {
    (
        EntityRef::new(args.entity_type, parse_id(&args.id)),
        EntityRef::new(args.to.entity_type, parse_id(&args.to.id)),
    )
}

fn change(action: &'static str, args: &LinkArgs) -> LinkChange {
    LinkChange {
        action,
        source: format!("{}:{}", args.entity_type, args.id),
        target: args.to.to_string(),
    }
}
