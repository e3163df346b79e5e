use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

/// Narrowest `COLUMNS` value honoured when fitting tables.
const MIN_TERM_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, Default)]
pub struct UiPrefs {
    pub table_color: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let prefs = UiPrefs {
        table_color: std::io::stdout().is_terminal()
            && flags.format == OutputFormat::Table
            && !flags.quiet
            && std::env::var_os("NO_COLOR").is_none(),
        term_width: std::env::var("COLUMNS")
            .ok()
            .as_deref()
            .and_then(parse_width),
    };
    let _ = UI_PREFS.set(prefs);
}

#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

fn parse_width(raw: &str) -> Option<usize> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|width| *width >= MIN_TERM_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::parse_width;

    #[test]
    fn narrow_or_garbage_widths_are_ignored() {
        assert_eq!(parse_width("120"), Some(120));
        assert_eq!(parse_width(" 80 "), Some(80));
        assert_eq!(parse_width("20"), None);
        assert_eq!(parse_width("wide"), None);
    }
}
