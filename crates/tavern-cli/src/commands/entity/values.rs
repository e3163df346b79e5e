use serde_json::{Map, Value};
use tavern_forms::SmartForm;

use crate::cli::subcommands::EntityFieldArgs;
use crate::commands::shared::parse::id_value;

/// Collect the flags that were passed into form values, rejecting flags the
/// form has no field for.
pub fn collect(form: &SmartForm, fields: &EntityFieldArgs) -> anyhow::Result<Value> {
    let candidates = [
        ("name", "name", fields.name.as_deref().map(text)),
        ("description", "description", fields.description.as_deref().map(text)),
        ("content", "content", fields.content.as_deref().map(text)),
        ("kind", "kind", fields.kind.as_deref().map(choice)),
        ("status", "status", fields.status.as_deref().map(choice)),
        ("parent", "parent_location_id", fields.parent.as_deref().map(id_value)),
    ];

    let mut values = Map::new();
    for (flag, field, value) in candidates {
        let Some(value) = value else {
            continue;
        };
        if form.field(field).is_none() {
            anyhow::bail!("{} has no {field} field (--{flag})", form.title());
        }
        values.insert(field.to_string(), value);
    }
    Ok(Value::Object(values))
}

fn text(raw: &str) -> Value {
    Value::String(raw.to_string())
}

/// Enum flags accept `non-player` for `non_player`.
fn choice(raw: &str) -> Value {
    Value::String(raw.trim().replace('-', "_"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tavern_core::enums::EntityType;
    use tavern_forms::{FormMode, entity_form};

    use super::collect;
    use crate::cli::subcommands::EntityFieldArgs;

    #[test]
    fn only_passed_flags_become_values() {
        let form = entity_form(EntityType::Location, FormMode::Create).unwrap();
        let fields = EntityFieldArgs {
            name: Some("Saltmarsh".into()),
            parent: Some("12".into()),
            ..EntityFieldArgs::default()
        };
        assert_eq!(
            collect(&form, &fields).unwrap(),
            json!({"name": "Saltmarsh", "parent_location_id": 12})
        );
    }

    #[test]
    fn flags_outside_the_form_are_rejected() {
        let form = entity_form(EntityType::Note, FormMode::Update).unwrap();
        let fields = EntityFieldArgs {
            status: Some("active".into()),
            ..EntityFieldArgs::default()
        };
        let err = collect(&form, &fields).unwrap_err();
        assert!(err.to_string().contains("--status"), "{err}");
    }
}
