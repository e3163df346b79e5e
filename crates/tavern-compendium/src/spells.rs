//! Spell records and queries.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    pub name: String,
    /// 0 for cantrips.
    pub level: u8,
    pub school: String,
    pub casting_time: String,
    pub range: String,
    /// Rendered component list, e.g. `V, S, M (a pinch of sand)`.
    pub components: String,
    pub duration: String,
    #[serde(default)]
    pub concentration: bool,
    #[serde(default)]
    pub ritual: bool,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl Spell {
    #[must_use]
    pub const fn is_cantrip(&self) -> bool {
        self.level == 0
    }

    /// `Cantrip`, `1st level`, `2nd level`, ...
    #[must_use]
    pub fn level_label(&self) -> String {
        match self.level {
            0 => "Cantrip".to_string(),
            1 => "1st level".to_string(),
            2 => "2nd level".to_string(),
            3 => "3rd level".to_string(),
            n => format!("{n}th level"),
        }
    }
}

/// Spell search filters. Unset filters match everything; text filters are
/// case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpellQuery {
    /// Substring of the spell name.
    pub name: Option<String>,
    pub level: Option<u8>,
    pub school: Option<String>,
    /// A class that can learn the spell.
    pub class: Option<String>,
}

impl SpellQuery {
    #[must_use]
    pub fn matches(&self, spell: &Spell) -> bool {
        let name_ok = self
            .name
            .as_deref()
            .is_none_or(|needle| spell.name.to_lowercase().contains(&needle.to_lowercase()));
        let level_ok = self.level.is_none_or(|level| spell.level == level);
        let school_ok = self
            .school
            .as_deref()
            .is_none_or(|school| spell.school.eq_ignore_ascii_case(school));
        let class_ok = self.class.as_deref().is_none_or(|class| {
            spell
                .classes
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(class))
        });
        name_ok && level_ok && school_ok && class_ok
    }
}
