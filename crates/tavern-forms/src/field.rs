//! Form field descriptions.

use serde::{Deserialize, Serialize};

/// Strings longer than this get a multi-line input.
pub const TEXTAREA_THRESHOLD: u64 = 255;

/// The input widget a field renders as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Textarea,
    Select { options: Vec<String> },
    Number { integer: bool },
    Checkbox,
    DateTime,
    List { item: Box<Self> },
}

impl FieldKind {
    /// Short label for tables and prompts.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Select { .. } => "select",
            Self::Number { .. } => "number",
            Self::Checkbox => "checkbox",
            Self::DateTime => "datetime",
            Self::List { .. } => "list",
        }
    }
}

/// Caller-supplied adjustments applied on top of the synthesized field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<FieldKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl FieldOverride {
    #[must_use]
    pub fn kind(kind: FieldKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// One synthesized input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub label: String,
    #[serde(flatten)]
    pub kind: FieldKind,
    pub required: bool,
    /// The schema accepts `null` for this field.
    pub nullable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl FormField {
    pub(crate) fn apply(&mut self, over: &FieldOverride) {
        if let Some(kind) = &over.kind {
            self.kind = kind.clone();
        }
        if let Some(placeholder) = &over.placeholder {
            self.placeholder = Some(placeholder.clone());
        }
        if let Some(help) = &over.help {
            self.help = Some(help.clone());
        }
    }
}

/// `parent_location_id` → `Parent location id`.
#[must_use]
pub fn humanize(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let mut chars = spaced.trim().chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanize_field_names() {
        assert_eq!(humanize("name"), "Name");
        assert_eq!(humanize("parent_location_id"), "Parent location id");
        assert_eq!(humanize(""), "");
    }

    #[test]
    fn override_only_touches_given_parts() {
        let mut field = FormField {
            name: "description".into(),
            label: "Description".into(),
            kind: FieldKind::Textarea,
            required: false,
            nullable: true,
            max_length: Some(4000),
            placeholder: None,
            help: Some("from schema".into()),
        };
        field.apply(&FieldOverride::default().with_placeholder("What are they like?"));
        assert_eq!(field.kind, FieldKind::Textarea);
        assert_eq!(field.help.as_deref(), Some("from schema"));
        assert_eq!(field.placeholder.as_deref(), Some("What are they like?"));

        field.apply(&FieldOverride::kind(FieldKind::Text).with_help("short"));
        assert_eq!(field.kind, FieldKind::Text);
        assert_eq!(field.help.as_deref(), Some("short"));
    }

    #[test]
    fn kind_serializes_with_tag() {
        let json = serde_json::to_value(FieldKind::Select {
            options: vec!["a".into()],
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"kind": "select", "options": ["a"]}));
    }
}
