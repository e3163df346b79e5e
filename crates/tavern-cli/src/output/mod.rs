use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

use table::{TableOptions, render_table};

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => {
            let prefs = ui::prefs();
            let options = TableOptions {
                max_width: prefs.term_width,
                color: prefs.table_color,
            };
            Ok(render_value_table(serde_json::to_value(value)?, options))
        }
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_value_table(value: Value, options: TableOptions) -> String {
    match value {
        Value::Array(items) if items.is_empty() => String::from("(no rows)"),
        Value::Array(items) if items.iter().all(Value::is_object) => {
            let objects = items
                .into_iter()
                .filter_map(|item| match item {
                    Value::Object(map) => Some(map),
                    _ => None,
                })
                .collect::<Vec<_>>();
            record_table(&objects, options)
        }
        Value::Array(items) => {
            let rows = items.iter().map(|item| vec![cell(item)]).collect::<Vec<_>>();
            render_table(&["value"], &rows, options)
        }
        Value::Object(map) => {
            let mut entries = map.into_iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let rows = entries
                .into_iter()
                .map(|(key, value)| vec![key, cell(&value)])
                .collect::<Vec<_>>();
            render_table(&["field", "value"], &rows, options)
        }
        scalar => render_table(&["value"], &[vec![cell(&scalar)]], options),
    }
}

/// One row per record, one column per key seen in any record (sorted).
fn record_table(records: &[Map<String, Value>], options: TableOptions) -> String {
    let mut headers = records
        .iter()
        .flat_map(Map::keys)
        .map(String::as_str)
        .collect::<Vec<_>>();
    headers.sort_unstable();
    headers.dedup();

    if headers.is_empty() {
        return String::from("(no columns)");
    }

    let rows = records
        .iter()
        .map(|record| {
            headers
                .iter()
                .map(|header| record.get(*header).map_or_else(|| String::from("-"), cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    render_table(&headers, &rows, options)
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.replace('\n', " "),
        Value::Array(items) if items.iter().all(|item| !item.is_object() && !item.is_array()) => {
            items.iter().map(cell).collect::<Vec<_>>().join(", ")
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;
    use serde_json::json;

    use super::{cell, render, render_value_table, table::TableOptions};
    use crate::cli::OutputFormat;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[derive(Serialize)]
    struct Quest {
        id: u32,
        name: &'static str,
        status: &'static str,
    }

    #[test]
    fn json_render_is_pretty() {
        let quest = Quest {
            id: 7,
            name: "Find the heir",
            status: "active",
        };
        let out = render(&quest, OutputFormat::Json).expect("json render should work");
        assert!(out.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["status"], "active");
    }

    #[test]
    fn raw_render_is_single_line() {
        let quest = Quest {
            id: 7,
            name: "Find the heir",
            status: "active",
        };
        let out = render(&quest, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        assert_eq!(out, r#"{"id":7,"name":"Find the heir","status":"active"}"#);
    }

    #[test]
    fn records_share_sorted_headers() {
        let out = render_value_table(
            json!([
                {"name": "Ana", "type": "character"},
                {"name": "Harbor", "type": "location", "description": "Salt and tar"}
            ]),
            PLAIN,
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        let header: Vec<&str> = lines[0].split_whitespace().collect();
        assert_eq!(header, ["description", "name", "type"]);
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].trim_start().starts_with('-'));
        assert!(lines[3].starts_with("Salt and tar"));
    }

    #[test]
    fn single_record_is_a_field_table() {
        let out = render_value_table(json!({"name": "Ana", "id": 3}), PLAIN);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("field"));
        assert!(lines[2].starts_with("id"));
        assert!(lines[3].starts_with("name"));
    }

    #[test]
    fn empty_lists_say_so() {
        assert_eq!(render_value_table(json!([]), PLAIN), "(no rows)");
    }

    #[test]
    fn scalar_lists_join_in_one_cell() {
        assert_eq!(cell(&json!(["wizard", "sorcerer"])), "wizard, sorcerer");
        assert_eq!(cell(&json!(null)), "-");
        assert_eq!(cell(&json!("two\nlines")), "two lines");
        assert_eq!(cell(&json!({"a": 1})), r#"{"a":1}"#);
    }
}
