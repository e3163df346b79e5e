use std::fmt;
use std::str::FromStr;

use tavern_core::enums::EntityType;

/// The far end of a link, written `type:id` (`location:9`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityTarget {
    pub entity_type: EntityType,
    pub id: String,
}

impl FromStr for EntityTarget {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (tag, id) = raw
            .split_once(':')
            .ok_or_else(|| format!("expected <type>:<id>, got '{raw}'"))?;
        let entity_type = EntityType::from_str(tag).map_err(|error| error.to_string())?;
        let id = id.trim();
        if id.is_empty() {
            return Err(format!("missing id in '{raw}'"));
        }
        Ok(Self {
            entity_type,
            id: id.to_string(),
        })
    }
}

impl fmt::Display for EntityTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.entity_type, self.id)
    }
}
