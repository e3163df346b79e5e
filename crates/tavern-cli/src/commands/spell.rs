use anyhow::Context;
use tavern_compendium::{Compendium, SpellQuery};
use tavern_config::TavernConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{SpellArgs, SpellCommands, SpellSearchArgs};
use crate::commands::shared::limit::effective_limit;
use crate::output::output;

/// Handle `tav spell`.
pub fn handle(args: &SpellArgs, config: &TavernConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let compendium = Compendium::load(&config.compendium)?;
    match &args.action {
        Some(SpellCommands::Show { name }) => {
            let spell = compendium
                .spell(name)
                .with_context(|| format!("no spell named '{name}'"))?;
            output(spell, flags.format)
        }
        None => {
            let limit = effective_limit(flags.limit, config.general.default_limit);
            let spells = compendium
                .search_spells(&query(&args.search))
                .into_iter()
                .take(limit)
                .collect::<Vec<_>>();
            output(&spells, flags.format)
        }
    }
}

fn query(search: &SpellSearchArgs) -> SpellQuery {
    SpellQuery {
        name: search.search.clone(),
        level: search.level,
        school: search.school.clone(),
        class: search.class.clone(),
    }
}
