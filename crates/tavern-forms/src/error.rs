//! Form error types.

use std::collections::BTreeMap;

use thiserror::Error;

/// Key under which errors that belong to no single field are reported.
pub const FORM_LEVEL: &str = "_form";

/// Errors from building or submitting a form.
#[derive(Debug, Error)]
pub enum FormError {
    /// The schema could not be turned into fields or compiled.
    #[error("Schema error: {0}")]
    Schema(String),

    /// Submitted values failed validation. Nothing was submitted.
    #[error("Invalid form values: {}", summarize(.field_errors))]
    Invalid {
        /// Messages keyed by top-level field name ([`FORM_LEVEL`] for the rest).
        field_errors: BTreeMap<String, Vec<String>>,
    },

    /// The submit handler failed.
    #[error("Submission failed: {0}")]
    Submission(String),
}

impl FormError {
    /// Messages for one field, empty if it had none.
    #[must_use]
    pub fn field_errors(&self, field: &str) -> &[String] {
        match self {
            Self::Invalid { field_errors } => field_errors.get(field).map_or(&[], Vec::as_slice),
            _ => &[],
        }
    }
}

fn summarize(field_errors: &BTreeMap<String, Vec<String>>) -> String {
    field_errors
        .iter()
        .map(|(field, messages)| format!("{field}: {}", messages.join("; ")))
        .collect::<Vec<_>>()
        .join(", ")
}
