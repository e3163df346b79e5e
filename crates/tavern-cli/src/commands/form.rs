use tavern_forms::{FormMode, entity_form};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FormArgs;
use crate::output::output;

/// Handle `tav form`: print the synthesized fields.
pub fn handle(args: &FormArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mode = if args.update {
        FormMode::Update
    } else {
        FormMode::Create
    };
    let form = entity_form(args.entity_type, mode)?;
    tracing::debug!(form = form.title(), fields = form.fields().len(), "form synthesized");
    output(form.fields(), flags.format)
}
