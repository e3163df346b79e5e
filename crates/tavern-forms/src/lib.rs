//! # tavern-forms
//!
//! Schema-driven forms for Tavern payloads.
//!
//! Create/update payloads in `tavern-core` derive `JsonSchema`. This crate
//! turns those schemas into [`FormField`] descriptions (kind, label,
//! required, help) and validates submitted values against the same schema
//! with `jsonschema` before any request is made.
//!
//! ```
//! use tavern_core::entities::QuestCreate;
//! use tavern_forms::{FieldKind, SmartForm};
//!
//! let form = SmartForm::for_type::<QuestCreate>().unwrap();
//! assert!(matches!(form.field("status").unwrap().kind, FieldKind::Select { .. }));
//! ```

mod error;
mod field;
mod form;
mod synthesize;

pub use error::{FORM_LEVEL, FormError};
pub use field::{FieldKind, FieldOverride, FormField, TEXTAREA_THRESHOLD, humanize};
pub use form::SmartForm;
pub use synthesize::synthesize_fields;

use std::collections::HashMap;

use tavern_core::entities::{
    CharacterCreate, CharacterUpdate, FactionCreate, FactionUpdate, LocationCreate, LocationUpdate,
    NoteCreate, NoteUpdate, QuestCreate, QuestUpdate,
};
use tavern_core::enums::EntityType;

/// Which payload a form edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update,
}

/// Overrides shared by every entity form.
fn entity_overrides() -> HashMap<String, FieldOverride> {
    HashMap::from([(
        "content".to_string(),
        FieldOverride::kind(FieldKind::Textarea)
            .with_help("Rich-text document JSON, or plain text"),
    )])
}

/// The form for creating or updating one entity type.
///
/// # Errors
///
/// Returns [`FormError::Schema`] if the payload schema cannot be compiled.
pub fn entity_form(entity_type: EntityType, mode: FormMode) -> Result<SmartForm, FormError> {
    let overrides = entity_overrides();
    match (entity_type, mode) {
        (EntityType::Character, FormMode::Create) => SmartForm::for_type_with::<CharacterCreate>(&overrides),
        (EntityType::Character, FormMode::Update) => SmartForm::for_type_with::<CharacterUpdate>(&overrides),
        (EntityType::Faction, FormMode::Create) => SmartForm::for_type_with::<FactionCreate>(&overrides),
        (EntityType::Faction, FormMode::Update) => SmartForm::for_type_with::<FactionUpdate>(&overrides),
        (EntityType::Location, FormMode::Create) => SmartForm::for_type_with::<LocationCreate>(&overrides),
        (EntityType::Location, FormMode::Update) => SmartForm::for_type_with::<LocationUpdate>(&overrides),
        (EntityType::Note, FormMode::Create) => SmartForm::for_type_with::<NoteCreate>(&overrides),
        (EntityType::Note, FormMode::Update) => SmartForm::for_type_with::<NoteUpdate>(&overrides),
        (EntityType::Quest, FormMode::Create) => SmartForm::for_type_with::<QuestCreate>(&overrides),
        (EntityType::Quest, FormMode::Update) => SmartForm::for_type_with::<QuestUpdate>(&overrides),
    }
}
