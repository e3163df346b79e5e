use std::io::Write;

use pretty_assertions::assert_eq;
use tavern_compendium::{Compendium, MonsterQuery};
use tavern_config::CompendiumConfig;

const HOMEBREW_MONSTERS: &str = r#"[
    {
        "name": "Tavern Mimic",
        "size": "Medium",
        "type": "monstrosity",
        "armor_class": 12,
        "hit_points": 58,
        "challenge_rating": 2
    },
    {
        "name": "Cellar Rat",
        "size": "Tiny",
        "type": "beast",
        "armor_class": 10,
        "hit_points": 2,
        "challenge_rating": "1/8"
    }
]"#;

#[test]
fn configured_file_replaces_bundled_dataset() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(HOMEBREW_MONSTERS.as_bytes()).unwrap();

    let config = CompendiumConfig {
        monsters_path: file.path().display().to_string(),
        ..CompendiumConfig::default()
    };
    let compendium = Compendium::load(&config).unwrap();

    let names: Vec<&str> = compendium
        .search_monsters(&MonsterQuery::default())
        .into_iter()
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(names, ["Cellar Rat", "Tavern Mimic"]);
    assert!(compendium.monster("goblin").is_none());

    // Spells were not overridden.
    assert!(compendium.spell("fireball").is_some());
}

#[test]
fn missing_file_falls_back_to_bundled() {
    let dir = tempfile::tempdir().unwrap();
    let config = CompendiumConfig {
        spells_path: dir.path().join("nope.json").display().to_string(),
        ..CompendiumConfig::default()
    };
    let compendium = Compendium::load(&config).unwrap();
    assert!(compendium.spell("magic missile").is_some());
}

#[test]
fn malformed_file_falls_back_to_bundled() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"[{\"name\": \"half a spell\"").unwrap();

    let config = CompendiumConfig {
        spells_path: file.path().display().to_string(),
        ..CompendiumConfig::default()
    };
    let compendium = Compendium::load(&config).unwrap();
    assert_eq!(
        compendium.spells().len(),
        Compendium::bundled().unwrap().spells().len()
    );
}
