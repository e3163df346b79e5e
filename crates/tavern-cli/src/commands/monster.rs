use anyhow::Context;
use tavern_compendium::{Compendium, MonsterQuery};
use tavern_config::TavernConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{MonsterArgs, MonsterCommands, MonsterSearchArgs};
use crate::commands::shared::limit::effective_limit;
use crate::output::output;

/// Handle `tav monster`.
pub fn handle(args: &MonsterArgs, config: &TavernConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let compendium = Compendium::load(&config.compendium)?;
    match &args.action {
        Some(MonsterCommands::Show { name }) => {
            let monster = compendium
                .monster(name)
                .with_context(|| format!("no monster named '{name}'"))?;
            output(monster, flags.format)
        }
        None => {
            let query = query(&args.search)?;
            let limit = effective_limit(flags.limit, config.general.default_limit);
            let monsters = compendium
                .search_monsters(&query)
                .into_iter()
                .take(limit)
                .collect::<Vec<_>>();
            output(&monsters, flags.format)
        }
    }
}

fn query(search: &MonsterSearchArgs) -> anyhow::Result<MonsterQuery> {
    if let (Some(min), Some(max)) = (search.min_cr, search.max_cr)
        && min > max
    {
        anyhow::bail!("--min-cr {min} is above --max-cr {max}");
    }
    Ok(MonsterQuery {
        name: search.search.clone(),
        kind: search.kind.clone(),
        min_cr: search.min_cr,
        max_cr: search.max_cr,
    })
}

#[cfg(test)]
mod tests {
    use tavern_compendium::ChallengeRating;

    use super::query;
    use crate::cli::subcommands::MonsterSearchArgs;

    #[test]
    fn inverted_cr_range_is_rejected() {
        let search = MonsterSearchArgs {
            min_cr: Some(ChallengeRating::whole(5)),
            max_cr: Some("1/2".parse().unwrap()),
            ..MonsterSearchArgs::default()
        };
        let err = query(&search).unwrap_err();
        assert!(err.to_string().contains("--min-cr 5"), "{err}");
    }
}
