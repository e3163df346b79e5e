//! Plain-text projection of rich-text entity content.
//!
//! Entity `content` is a serialized document tree of typed nodes:
//!
//! ```json
//! {"type": "doc", "content": [
//!   {"type": "paragraph", "content": [{"type": "text", "text": "Hello"}]}
//! ]}
//! ```
//!
//! The server stores a derived `content_plain_text` next to it for search and
//! previews. Clients that create or edit content fill it in with
//! [`plain_text`].

use serde_json::Value;

/// Node types that end a line of plain text.
const BLOCK_NODES: [&str; 8] = [
    "paragraph",
    "heading",
    "blockquote",
    "codeBlock",
    "listItem",
    "bulletList",
    "orderedList",
    "horizontalRule",
];

/// Project a serialized document to plain text.
///
/// Strings that are not JSON documents are already plain text and come back
/// trimmed.
#[must_use]
pub fn plain_text(content: &str) -> String {
    match serde_json::from_str::<Value>(content) {
        Ok(doc @ Value::Object(_)) => {
            let mut out = String::new();
            collect(&doc, &mut out);
            normalize_lines(&out)
        }
        _ => content.trim().to_string(),
    }
}

/// Fill `plain` from `content` when the caller left it empty.
pub fn fill_plain_text(content: Option<&str>, plain: &mut Option<String>) {
    if plain.as_deref().is_some_and(|p| !p.is_empty()) {
        return;
    }
    if let Some(content) = content {
        *plain = Some(plain_text(content));
    }
}

fn collect(node: &Value, out: &mut String) {
    let kind = node.get("type").and_then(Value::as_str).unwrap_or_default();

    match kind {
        "text" => {
            if let Some(text) = node.get("text").and_then(Value::as_str) {
                out.push_str(text);
            }
        }
        "hardBreak" => out.push('\n'),
        _ => {
            if let Some(children) = node.get("content").and_then(Value::as_array) {
                for child in children {
                    collect(child, out);
                }
            }
            if BLOCK_NODES.contains(&kind) && !out.ends_with('\n') {
                out.push('\n');
            }
        }
    }
}

fn normalize_lines(raw: &str) -> String {
    raw.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_become_lines() {
        let doc = r#"{"type":"doc","content":[
            {"type":"heading","attrs":{"level":1},"content":[{"type":"text","text":"The Red Hand"}]},
            {"type":"paragraph","content":[
                {"type":"text","text":"A mercenary company "},
                {"type":"text","marks":[{"type":"bold"}],"text":"for hire"},
                {"type":"text","text":"."}
            ]}
        ]}"#;
        assert_eq!(plain_text(doc), "The Red Hand\nA mercenary company for hire.");
    }

    #[test]
    fn lists_and_hard_breaks() {
        let doc = r#"{"type":"doc","content":[
            {"type":"bulletList","content":[
                {"type":"listItem","content":[{"type":"paragraph","content":[{"type":"text","text":"one"}]}]},
                {"type":"listItem","content":[{"type":"paragraph","content":[{"type":"text","text":"two"}]}]}
            ]},
            {"type":"paragraph","content":[
                {"type":"text","text":"line a"},{"type":"hardBreak"},{"type":"text","text":"line b"}
            ]}
        ]}"#;
        assert_eq!(plain_text(doc), "one\ntwo\nline a\nline b");
    }

    #[test]
    fn non_json_is_already_plain() {
        assert_eq!(plain_text("  just words  "), "just words");
        assert_eq!(plain_text("[1, 2]"), "[1, 2]");
    }

    #[test]
    fn fill_keeps_caller_value() {
        let mut plain = Some("mine".to_string());
        fill_plain_text(Some("other"), &mut plain);
        assert_eq!(plain.as_deref(), Some("mine"));

        let mut empty = None;
        fill_plain_text(Some("derived"), &mut empty);
        assert_eq!(empty.as_deref(), Some("derived"));

        let mut untouched = None;
        fill_plain_text(None, &mut untouched);
        assert!(untouched.is_none());
    }
}
