//! Property-style checks for link aggregation over generated inputs.

use tavern_core::enums::EntityType;
use tavern_core::ids::EntityId;
use tavern_core::links::{EntityLinks, LinkRef, aggregate};
use tavern_core::timestamp::parse_timestamp;

/// Deterministic pseudo-random sequence so runs are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }
}

fn timestamp_for(rng: &mut Lcg) -> Option<String> {
    match rng.next() % 6 {
        0 => None,
        1 => Some(String::new()),
        2 => Some("not a date".to_string()),
        3 => Some(format!("2024-{:02}-{:02}", rng.next() % 12 + 1, rng.next() % 28 + 1)),
        4 => Some(format!(
            "2023-{:02}-{:02}T{:02}:{:02}:00Z",
            rng.next() % 12 + 1,
            rng.next() % 28 + 1,
            rng.next() % 24,
            rng.next() % 60
        )),
        _ => Some(format!(
            "2025-{:02}-{:02} {:02}:15:00",
            rng.next() % 12 + 1,
            rng.next() % 28 + 1,
            rng.next() % 24
        )),
    }
}

fn generate(seed: u64) -> EntityLinks {
    let mut rng = Lcg(seed);
    let mut links = EntityLinks::default();
    let mut next_id = 0_i64;
    for ty in EntityType::ALL {
        let count = rng.next() % 7;
        let refs: Vec<LinkRef> = (0..count)
            .map(|_| {
                next_id += 1;
                LinkRef {
                    id: EntityId::Int(next_id),
                    name: format!("{ty}-{next_id}"),
                    description: None,
                    content: None,
                    created_at: None,
                    updated_at: timestamp_for(&mut rng),
                }
            })
            .collect();
        match ty {
            EntityType::Character => links.characters = refs,
            EntityType::Faction => links.factions = refs,
            EntityType::Note => links.notes = refs,
            EntityType::Location => links.locations = refs,
            EntityType::Quest => links.quests = refs,
        }
    }
    links
}

#[test]
fn cardinality_is_preserved() {
    for seed in 0..200 {
        let links = generate(seed);
        let expected = links.characters.len()
            + links.factions.len()
            + links.locations.len()
            + links.notes.len()
            + links.quests.len();
        assert_eq!(aggregate(&links).len(), expected, "seed {seed}");
    }
}

#[test]
fn every_record_is_labeled_with_its_source_collection() {
    for seed in 0..200 {
        let links = generate(seed);
        for record in aggregate(&links) {
            let source = links.of_type(record.entity_type);
            assert!(
                source.iter().any(|link| link.id == record.id),
                "seed {seed}: {} not found in {}",
                record.id,
                record.entity_type.plural()
            );
        }
    }
}

#[test]
fn records_are_ordered_newest_first_with_undated_last() {
    for seed in 0..200 {
        let records = aggregate(&generate(seed));
        let parsed: Vec<_> = records
            .iter()
            .map(|r| parse_timestamp(&r.updated_at))
            .collect();

        for pair in parsed.windows(2) {
            match (pair[0], pair[1]) {
                (Some(a), Some(b)) => assert!(a >= b, "seed {seed}: {a} before {b}"),
                (None, Some(_)) => panic!("seed {seed}: undated record before dated one"),
                _ => {}
            }
        }
    }
}

#[test]
fn no_record_is_duplicated() {
    for seed in 0..50 {
        let records = aggregate(&generate(seed));
        let mut ids: Vec<String> = records.iter().map(|r| r.id.to_string()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), records.len(), "seed {seed}");
    }
}

#[test]
fn minute_precision_rows_sort_as_dated() {
    let link = |id: i64, updated_at: &str| LinkRef {
        id: EntityId::Int(id),
        name: format!("row {id}"),
        description: None,
        content: None,
        created_at: None,
        updated_at: Some(updated_at.to_string()),
    };
    let links = EntityLinks {
        notes: vec![link(1, "1066-10-14"), link(2, "garbage")],
        quests: vec![link(3, "2024-01-02T10:00"), link(4, "2024-01-02 09:30")],
        ..EntityLinks::default()
    };

    let order: Vec<String> = aggregate(&links).iter().map(|r| r.id.to_string()).collect();
    assert_eq!(order, ["3", "4", "1", "2"]);
    assert!(aggregate(&links)[0].entity_type == EntityType::Quest);
}
