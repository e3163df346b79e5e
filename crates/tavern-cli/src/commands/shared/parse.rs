use serde::de::DeserializeOwned;
use serde_json::Value;
use tavern_core::ids::EntityId;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().replace('-', "_");
    serde_json::from_value(Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Command-line ids are integers when they look like one.
#[must_use]
pub fn parse_id(raw: &str) -> EntityId {
    let raw = raw.trim();
    raw.parse::<i64>()
        .map_or_else(|_| EntityId::from(raw), EntityId::from)
}

/// [`parse_id`] as a JSON value, for payload fields holding ids.
#[must_use]
pub fn id_value(raw: &str) -> Value {
    match parse_id(raw) {
        EntityId::Int(n) => Value::from(n),
        EntityId::Str(s) => Value::String(s),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tavern_core::enums::{CharacterKind, QuestStatus};
    use tavern_core::ids::EntityId;

    use super::{id_value, parse_enum, parse_id};

    #[test]
    fn parses_snake_case_enum() {
        let status: QuestStatus = parse_enum("completed", "status").expect("status should parse");
        assert_eq!(status, QuestStatus::Completed);
    }

    #[test]
    fn parses_hyphenated_alias() {
        let kind: CharacterKind = parse_enum("non-player", "kind").expect("kind should parse");
        assert_eq!(kind, CharacterKind::NonPlayer);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<QuestStatus>("abandoned", "status").expect_err("should fail");
        assert!(err.to_string().contains("invalid status 'abandoned'"));
    }

    #[test]
    fn numeric_ids_become_integers() {
        assert_eq!(parse_id("42"), EntityId::Int(42));
        assert_eq!(parse_id(" loc-9 "), EntityId::Str("loc-9".into()));
        assert_eq!(id_value("42"), json!(42));
        assert_eq!(id_value("abc"), json!("abc"));
    }
}
