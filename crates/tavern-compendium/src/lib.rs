//! # tavern-compendium
//!
//! Read-only spell and monster reference data.
//!
//! A small SRD sample ships inside the crate. The `compendium.spells_path`
//! and `compendium.monsters_path` settings point at larger JSON files of the
//! same shape; a configured file that cannot be read or parsed is logged and
//! the bundled data is used instead.

mod challenge;
mod error;
mod monsters;
mod spells;

pub use challenge::ChallengeRating;
pub use error::CompendiumError;
pub use monsters::{Monster, MonsterQuery};
pub use spells::{Spell, SpellQuery};

use std::collections::HashMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use tavern_config::CompendiumConfig;

const BUNDLED_SPELLS: &str = include_str!("../data/spells.json");
const BUNDLED_MONSTERS: &str = include_str!("../data/monsters.json");

/// Spells and monsters with case-insensitive name lookup.
#[derive(Debug, Clone)]
pub struct Compendium {
    spells: Vec<Spell>,
    monsters: Vec<Monster>,
    spell_index: HashMap<String, usize>,
    monster_index: HashMap<String, usize>,
}

impl Compendium {
    /// The sample data compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns [`CompendiumError`] only if the embedded JSON is malformed.
    pub fn bundled() -> Result<Self, CompendiumError> {
        Self::new(
            parse(BUNDLED_SPELLS, "bundled spells")?,
            parse(BUNDLED_MONSTERS, "bundled monsters")?,
        )
    }

    /// Bundled data, with each dataset replaced by its configured file when
    /// one is set and loads cleanly.
    ///
    /// # Errors
    ///
    /// Returns [`CompendiumError`] if the bundled fallback is needed and
    /// malformed, or if a dataset repeats a name.
    pub fn load(config: &CompendiumConfig) -> Result<Self, CompendiumError> {
        let spells = match config.spells_override() {
            Some(path) => read_or_fallback(path, BUNDLED_SPELLS, "bundled spells")?,
            None => parse(BUNDLED_SPELLS, "bundled spells")?,
        };
        let monsters = match config.monsters_override() {
            Some(path) => read_or_fallback(path, BUNDLED_MONSTERS, "bundled monsters")?,
            None => parse(BUNDLED_MONSTERS, "bundled monsters")?,
        };
        Self::new(spells, monsters)
    }

    /// Build from explicit records. Records are kept sorted by
    /// (level, name) and (challenge rating, name).
    ///
    /// # Errors
    ///
    /// Returns [`CompendiumError::Duplicate`] if two records share a name
    /// (ignoring case).
    pub fn new(mut spells: Vec<Spell>, mut monsters: Vec<Monster>) -> Result<Self, CompendiumError> {
        spells.sort_by(|a, b| (a.level, &a.name).cmp(&(b.level, &b.name)));
        monsters.sort_by(|a, b| {
            (a.challenge_rating, &a.name).cmp(&(b.challenge_rating, &b.name))
        });
        let spell_index = index(spells.iter().map(|s| s.name.as_str()), "spell")?;
        let monster_index = index(monsters.iter().map(|m| m.name.as_str()), "monster")?;
        Ok(Self {
            spells,
            monsters,
            spell_index,
            monster_index,
        })
    }

    #[must_use]
    pub fn spell(&self, name: &str) -> Option<&Spell> {
        self.spell_index
            .get(&normalize(name))
            .map(|&i| &self.spells[i])
    }

    #[must_use]
    pub fn monster(&self, name: &str) -> Option<&Monster> {
        self.monster_index
            .get(&normalize(name))
            .map(|&i| &self.monsters[i])
    }

    /// Matching spells ordered by (level, name).
    #[must_use]
    pub fn search_spells(&self, query: &SpellQuery) -> Vec<&Spell> {
        self.spells.iter().filter(|s| query.matches(s)).collect()
    }

    /// Matching monsters ordered by (challenge rating, name).
    #[must_use]
    pub fn search_monsters(&self, query: &MonsterQuery) -> Vec<&Monster> {
        self.monsters.iter().filter(|m| query.matches(m)).collect()
    }

    #[must_use]
    pub fn spells(&self) -> &[Spell] {
        &self.spells
    }

    #[must_use]
    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

fn index<'a>(
    names: impl Iterator<Item = &'a str>,
    kind: &'static str,
) -> Result<HashMap<String, usize>, CompendiumError> {
    let mut index = HashMap::new();
    for (i, name) in names.enumerate() {
        if index.insert(normalize(name), i).is_some() {
            return Err(CompendiumError::Duplicate {
                kind,
                name: name.to_string(),
            });
        }
    }
    Ok(index)
}

fn parse<T: DeserializeOwned>(json: &str, origin: &str) -> Result<Vec<T>, CompendiumError> {
    serde_json::from_str(json).map_err(|e| CompendiumError::Parse {
        origin: origin.to_string(),
        reason: e.to_string(),
    })
}

fn read_file<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CompendiumError> {
    let json = std::fs::read_to_string(path).map_err(|source| CompendiumError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&json, &path.display().to_string())
}

fn read_or_fallback<T: DeserializeOwned>(
    path: &str,
    bundled: &str,
    origin: &str,
) -> Result<Vec<T>, CompendiumError> {
    match read_file(Path::new(path)) {
        Ok(records) => {
            tracing::debug!(path, count = records.len(), "loaded compendium file");
            Ok(records)
        }
        Err(error) => {
            tracing::warn!(path, %error, "compendium file unusable, using bundled data");
            parse(bundled, origin)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn bundled() -> Compendium {
        Compendium::bundled().unwrap()
    }

    #[test]
    fn bundled_data_parses() {
        let compendium = bundled();
        assert!(!compendium.spells().is_empty());
        assert!(!compendium.monsters().is_empty());
    }

    #[test]
    fn lookups_ignore_case_and_padding() {
        let compendium = bundled();
        assert_eq!(compendium.spell("  fireBALL ").unwrap().level, 3);
        assert_eq!(
            compendium.monster("goblin").unwrap().challenge_rating.to_string(),
            "1/4"
        );
        assert!(compendium.spell("Wish").is_none());
    }

    #[test]
    fn spells_sort_by_level_then_name() {
        let compendium = bundled();
        let keys: Vec<(u8, &str)> = compendium
            .spells()
            .iter()
            .map(|s| (s.level, s.name.as_str()))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn spell_filters_combine() {
        let compendium = bundled();
        let query = SpellQuery {
            level: Some(1),
            class: Some("wizard".into()),
            ..SpellQuery::default()
        };
        let names: Vec<&str> = compendium
            .search_spells(&query)
            .into_iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, ["Detect Magic", "Magic Missile", "Shield", "Sleep"]);

        let evocation_cantrips = SpellQuery {
            level: Some(0),
            school: Some("EVOCATION".into()),
            name: Some("fl".into()),
            ..SpellQuery::default()
        };
        let names: Vec<&str> = compendium
            .search_spells(&evocation_cantrips)
            .into_iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, ["Sacred Flame"]);
    }

    #[test]
    fn monster_cr_range_is_inclusive() {
        let compendium = bundled();
        let query = MonsterQuery {
            min_cr: Some("1/4".parse().unwrap()),
            max_cr: Some(ChallengeRating::whole(1)),
            ..MonsterQuery::default()
        };
        let names: Vec<&str> = compendium
            .search_monsters(&query)
            .into_iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, ["Goblin", "Skeleton", "Orc", "Dire Wolf", "Ghoul"]);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let spell = bundled().spell("Light").unwrap().clone();
        let mut shouting = spell.clone();
        shouting.name = "LIGHT".into();
        assert!(matches!(
            Compendium::new(vec![spell, shouting], Vec::new()),
            Err(CompendiumError::Duplicate { kind: "spell", .. })
        ));
    }
}
