//! Monster stat-block summaries and queries.

use serde::{Deserialize, Serialize};

use crate::challenge::ChallengeRating;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    pub name: String,
    pub size: String,
    /// Creature type (`beast`, `undead`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub alignment: String,
    pub armor_class: u8,
    pub hit_points: u16,
    #[serde(default)]
    pub speed: String,
    pub challenge_rating: ChallengeRating,
    #[serde(default)]
    pub xp: u32,
    #[serde(default)]
    pub description: String,
}

/// Monster search filters; the CR bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonsterQuery {
    pub name: Option<String>,
    pub kind: Option<String>,
    pub min_cr: Option<ChallengeRating>,
    pub max_cr: Option<ChallengeRating>,
}

impl MonsterQuery {
    #[must_use]
    pub fn matches(&self, monster: &Monster) -> bool {
        let cr = monster.challenge_rating;
        self.name
            .as_deref()
            .is_none_or(|needle| monster.name.to_lowercase().contains(&needle.to_lowercase()))
            && self
                .kind
                .as_deref()
                .is_none_or(|kind| monster.kind.eq_ignore_ascii_case(kind))
            && self.min_cr.is_none_or(|min| cr >= min)
            && self.max_cr.is_none_or(|max| cr <= max)
    }
}
