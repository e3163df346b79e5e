//! JSON Schema → form fields.
//!
//! Walks the top-level `properties` of an object schema (as produced by
//! `schemars`) and picks an input kind per property:
//!
//! | schema | kind |
//! |---|---|
//! | `enum`, or `oneOf`/`anyOf` of `const`s | `Select` |
//! | `string` with `format: date-time` | `DateTime` |
//! | `string` with `maxLength` > 255 | `Textarea` |
//! | other `string` | `Text` |
//! | `integer` / `number` | `Number` |
//! | `boolean` | `Checkbox` |
//! | `array` | `List` |
//!
//! `$ref`s into `$defs` are followed, and `Option<T>` wrappers
//! (`type: [T, "null"]` or `anyOf: [T, {type: null}]`) are unwrapped with the
//! field marked nullable. Anything else falls back to `Text`.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::FormError;
use crate::field::{FieldKind, FieldOverride, FormField, TEXTAREA_THRESHOLD, humanize};

/// `$ref` chains longer than this are treated as cycles.
const MAX_REF_DEPTH: usize = 16;

/// Build one field per top-level property of `schema`, in schema order, with
/// `overrides` applied by field name.
///
/// # Errors
///
/// Returns [`FormError::Schema`] if `schema` has no `properties` object or
/// an override names a field the schema does not have.
pub fn synthesize_fields(
    schema: &Value,
    overrides: &HashMap<String, FieldOverride>,
) -> Result<Vec<FormField>, FormError> {
    let properties = schema
        .get("properties")
        .and_then(Value::as_object)
        .ok_or_else(|| FormError::Schema("schema has no `properties` object".to_string()))?;

    if let Some(unknown) = overrides.keys().find(|name| !properties.contains_key(*name)) {
        return Err(FormError::Schema(format!(
            "override for unknown field `{unknown}`"
        )));
    }

    let required: Vec<&str> = schema
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let mut fields = Vec::with_capacity(properties.len());
    for (name, property) in properties {
        let mut field = synthesize_field(schema, name, property, required.contains(&name.as_str()))?;
        if let Some(over) = overrides.get(name) {
            field.apply(over);
        }
        fields.push(field);
    }
    Ok(fields)
}

fn synthesize_field(
    root: &Value,
    name: &str,
    property: &Value,
    required: bool,
) -> Result<FormField, FormError> {
    // Keywords written next to a `$ref` (e.g. a doc comment) belong to the
    // property, so read them before resolving.
    let help = property
        .get("description")
        .and_then(Value::as_str)
        .map(str::to_string);

    let (node, nullable) = unwrap_nullable(root, property)?;
    let kind = kind_of(root, node)?;
    let max_length = node
        .get("maxLength")
        .or_else(|| property.get("maxLength"))
        .and_then(Value::as_u64);

    tracing::trace!(field = name, kind = kind.as_str(), nullable, "synthesized field");
    Ok(FormField {
        name: name.to_string(),
        label: humanize(name),
        kind,
        required,
        nullable,
        max_length,
        placeholder: None,
        help: help.or_else(|| node.get("description").and_then(Value::as_str).map(str::to_string)),
    })
}

/// Follow `$ref`s until a concrete schema node is reached.
fn resolve<'a>(root: &'a Value, mut node: &'a Value) -> Result<&'a Value, FormError> {
    for _ in 0..MAX_REF_DEPTH {
        let Some(reference) = node.get("$ref").and_then(Value::as_str) else {
            return Ok(node);
        };
        node = lookup_ref(root, reference)?;
    }
    Err(FormError::Schema("`$ref` chain too deep".to_string()))
}

fn lookup_ref<'a>(root: &'a Value, reference: &str) -> Result<&'a Value, FormError> {
    let pointer = reference
        .strip_prefix('#')
        .ok_or_else(|| FormError::Schema(format!("external `$ref` not supported: {reference}")))?;
    root.pointer(pointer)
        .ok_or_else(|| FormError::Schema(format!("dangling `$ref`: {reference}")))
}

/// Strip an `Option<T>` wrapper. Returns the inner node and whether `null`
/// was allowed.
fn unwrap_nullable<'a>(root: &'a Value, property: &'a Value) -> Result<(&'a Value, bool), FormError> {
    let node = resolve(root, property)?;

    if let Some(types) = node.get("type").and_then(Value::as_array) {
        let nullable = types.iter().any(|t| t == "null");
        return Ok((node, nullable));
    }

    for keyword in ["anyOf", "oneOf"] {
        let Some(branches) = node.get(keyword).and_then(Value::as_array) else {
            continue;
        };
        let (nulls, rest): (Vec<&Value>, Vec<&Value>) =
            branches.iter().partition(|branch| is_null_type(branch));
        if !nulls.is_empty() && rest.len() == 1 {
            let (inner, _) = unwrap_nullable(root, rest[0])?;
            return Ok((inner, true));
        }
    }

    Ok((node, false))
}

fn is_null_type(node: &Value) -> bool {
    node.get("type").is_some_and(|t| t == "null") || node.get("const").is_some_and(Value::is_null)
}

/// The single non-null `type` of a node, if it has one.
fn primary_type(node: &Value) -> Option<&str> {
    match node.get("type")? {
        Value::String(t) => Some(t.as_str()),
        Value::Array(types) => {
            let mut concrete = types.iter().filter_map(Value::as_str).filter(|t| *t != "null");
            let first = concrete.next()?;
            concrete.next().is_none().then_some(first)
        }
        _ => None,
    }
}

fn kind_of(root: &Value, node: &Value) -> Result<FieldKind, FormError> {
    if let Some(options) = select_options(root, node)? {
        return Ok(FieldKind::Select { options });
    }

    let kind = match primary_type(node) {
        Some("string") => {
            if node.get("format").and_then(Value::as_str) == Some("date-time") {
                FieldKind::DateTime
            } else if node
                .get("maxLength")
                .and_then(Value::as_u64)
                .is_some_and(|max| max > TEXTAREA_THRESHOLD)
            {
                FieldKind::Textarea
            } else {
                FieldKind::Text
            }
        }
        Some("integer") => FieldKind::Number { integer: true },
        Some("number") => FieldKind::Number { integer: false },
        Some("boolean") => FieldKind::Checkbox,
        Some("array") => {
            let item = match node.get("items") {
                Some(items) => {
                    let (inner, _) = unwrap_nullable(root, items)?;
                    kind_of(root, inner)?
                }
                None => FieldKind::Text,
            };
            FieldKind::List {
                item: Box::new(item),
            }
        }
        _ => FieldKind::Text,
    };
    Ok(kind)
}

/// Options for an enumerated node: `enum: [...]`, or `oneOf`/`anyOf` whose
/// every branch is a `const` (schemars emits that shape for documented
/// variants).
fn select_options(root: &Value, node: &Value) -> Result<Option<Vec<String>>, FormError> {
    if let Some(values) = node.get("enum").and_then(Value::as_array) {
        return Ok(Some(values.iter().filter(|v| !v.is_null()).map(option_label).collect()));
    }
    if let Some(value) = node.get("const")
        && !value.is_null()
    {
        return Ok(Some(vec![option_label(value)]));
    }

    for keyword in ["oneOf", "anyOf"] {
        let Some(branches) = node.get(keyword).and_then(Value::as_array) else {
            continue;
        };
        let mut options = Vec::with_capacity(branches.len());
        for branch in branches {
            let branch = resolve(root, branch)?;
            if is_null_type(branch) {
                continue;
            }
            match select_options(root, branch)? {
                Some(mut more) => options.append(&mut more),
                None => return Ok(None),
            }
        }
        if !options.is_empty() {
            return Ok(Some(options));
        }
    }
    Ok(None)
}

fn option_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
