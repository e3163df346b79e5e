//! Validated forms built from payload types.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::future::Future;

use jsonschema::error::ValidationErrorKind;
use schemars::{JsonSchema, schema_for};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{FORM_LEVEL, FormError};
use crate::field::{FieldOverride, FormField};
use crate::synthesize::synthesize_fields;

/// A form: its fields plus the schema validator the values must pass.
pub struct SmartForm {
    title: String,
    schema: Value,
    fields: Vec<FormField>,
    validator: jsonschema::Validator,
}

impl SmartForm {
    /// Build a form from a raw JSON Schema.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Schema`] if the schema has no properties, an
    /// override names an unknown field, or the schema does not compile.
    pub fn new(
        title: impl Into<String>,
        schema: Value,
        overrides: &HashMap<String, FieldOverride>,
    ) -> Result<Self, FormError> {
        let fields = synthesize_fields(&schema, overrides)?;
        let validator =
            jsonschema::validator_for(&schema).map_err(|e| FormError::Schema(format!("{e}")))?;
        Ok(Self {
            title: title.into(),
            schema,
            fields,
            validator,
        })
    }

    /// Build a form for payload type `T` from its generated schema.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn for_type<T: JsonSchema>() -> Result<Self, FormError> {
        Self::for_type_with::<T>(&HashMap::new())
    }

    /// [`Self::for_type`] with per-field overrides.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn for_type_with<T: JsonSchema>(
        overrides: &HashMap<String, FieldOverride>,
    ) -> Result<Self, FormError> {
        let schema =
            serde_json::to_value(schema_for!(T)).map_err(|e| FormError::Schema(e.to_string()))?;
        Self::new(T::schema_name(), schema, overrides)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn schema(&self) -> &Value {
        &self.schema
    }

    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Check `values` against the schema, collecting every failure by
    /// top-level field.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Invalid`] with the per-field messages.
    pub fn validate(&self, values: &Value) -> Result<(), FormError> {
        let mut field_errors: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for error in self.validator.iter_errors(values) {
            let field = match &error.kind {
                ValidationErrorKind::Required { property } => option_name(property),
                _ => top_level_field(&error.instance_path.to_string()),
            };
            field_errors.entry(field).or_default().push(error.to_string());
        }

        if field_errors.is_empty() {
            Ok(())
        } else {
            tracing::debug!(form = %self.title, fields = field_errors.len(), "form values rejected");
            Err(FormError::Invalid { field_errors })
        }
    }

    /// Validate, then deserialize into the payload type.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Invalid`] if validation or deserialization fails.
    pub fn parse<T: DeserializeOwned>(&self, values: Value) -> Result<T, FormError> {
        self.validate(&values)?;
        serde_json::from_value(values).map_err(|e| FormError::Invalid {
            field_errors: BTreeMap::from([(FORM_LEVEL.to_string(), vec![e.to_string()])]),
        })
    }

    /// Validate `values`, hand the parsed payload to `handler`, and call
    /// `on_success` with its result.
    ///
    /// The handler never runs on invalid values. A handler failure becomes a
    /// single [`FormError::Submission`] and `on_success` is not called.
    ///
    /// # Errors
    ///
    /// [`FormError::Invalid`] or [`FormError::Submission`].
    pub async fn submit<T, R, E, H, Fut, S>(
        &self,
        values: Value,
        handler: H,
        on_success: S,
    ) -> Result<R, FormError>
    where
        T: DeserializeOwned,
        E: Display,
        H: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<R, E>>,
        S: FnOnce(&R),
    {
        let payload = self.parse::<T>(values)?;
        let result = handler(payload).await.map_err(|e| {
            tracing::warn!(form = %self.title, error = %e, "form submission failed");
            FormError::Submission(e.to_string())
        })?;
        on_success(&result);
        Ok(result)
    }
}

impl std::fmt::Debug for SmartForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmartForm")
            .field("title", &self.title)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

fn option_name(property: &Value) -> String {
    property
        .as_str()
        .map_or_else(|| property.to_string(), str::to_string)
}

/// First segment of a JSON pointer (`/name/0` → `name`), unescaped.
fn top_level_field(pointer: &str) -> String {
    pointer
        .split('/')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .map_or_else(
            || FORM_LEVEL.to_string(),
            |segment| segment.replace("~1", "/").replace("~0", "~"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_to_field() {
        assert_eq!(top_level_field("/name"), "name");
        assert_eq!(top_level_field("/tags/2"), "tags");
        assert_eq!(top_level_field("/a~1b"), "a/b");
        assert_eq!(top_level_field(""), FORM_LEVEL);
    }
}
