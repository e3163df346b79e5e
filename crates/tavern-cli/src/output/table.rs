/// Columns never shrink below this many characters when fitting.
const MIN_COLUMN: usize = 6;
const GAP: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table: header, divider, then one line per row.
///
/// Numeric cells are right-aligned. With `max_width`, the widest columns are
/// shrunk one character at a time (never below the header or
/// [`MIN_COLUMN`]) and overlong cells end in `…`.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .fold(min_width(header), usize::max)
        })
        .collect::<Vec<_>>();

    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, headers, max_width);
    }

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, &width)| pad(&truncate(header, width), width, false))
        .collect::<Vec<_>>()
        .join(GAP);

    let divider = "-".repeat(header_line.chars().count());
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);

    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, &width)| {
                let text = truncate(row.get(index).map_or("-", String::as_str), width);
                let padded = pad(&text, width, looks_numeric(&text));
                if options.color {
                    colorize(&text, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(GAP);
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

fn min_width(header: &str) -> usize {
    header.chars().count().max(MIN_COLUMN)
}

fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let gaps = widths.len().saturating_sub(1) * GAP.len();
    while widths.iter().sum::<usize>() + gaps > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > min_width(headers[*index]))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        match widest {
            Some(index) => widths[index] -= 1,
            None => break,
        }
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out = value.chars().take(width.saturating_sub(1)).collect::<String>();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

fn looks_numeric(value: &str) -> bool {
    let value = value.trim();
    value.chars().any(|ch| ch.is_ascii_digit())
        && value
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | '/'))
}

/// Wrap an already padded cell in an ANSI colour chosen from its text.
fn colorize(text: &str, padded: String) -> String {
    let code = match text.to_ascii_lowercase().as_str() {
        "active" | "completed" | "true" | "player" => "32",
        "rumored" | "non_player" => "33",
        "failed" | "false" => "31",
        _ => return padded,
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{TableOptions, render_table, truncate};

    fn rows(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect()
    }

    #[test]
    fn columns_align_across_rows() {
        let table = render_table(
            &["name", "type", "updated_at"],
            &rows(&[
                &["Ana", "character", "2024-05-02T10:00:00Z"],
                &["The Crimson Hand", "faction", "-"],
            ]),
            TableOptions {
                max_width: None,
                color: false,
            },
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        let type_col = lines[0].find("type").unwrap();
        assert_eq!(lines[2].find("character"), Some(type_col));
        assert_eq!(lines[3].find("faction"), Some(type_col));
    }

    #[test]
    fn numbers_align_right() {
        let table = render_table(
            &["level"],
            &rows(&[&["3"], &["10"]]),
            TableOptions {
                max_width: None,
                color: false,
            },
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[2], "     3");
        assert_eq!(lines[3], "    10");
    }

    #[test]
    fn wide_tables_shrink_to_the_terminal() {
        let long = "a".repeat(80);
        let table = render_table(
            &["name", "description"],
            &rows(&[&["Owlbear", &long]]),
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );
        for line in table.lines() {
            assert!(line.chars().count() <= 40, "{line}");
        }
        assert!(table.contains('…'));
    }

    #[test]
    fn colour_codes_do_not_shift_columns() {
        let table = render_table(
            &["status", "name"],
            &rows(&[&["active", "Heir"], &["unknown", "Tomb"]]),
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[2].starts_with("\u{1b}[32mactive "));
        assert!(lines[2].ends_with("Heir"));
        assert!(lines[3].starts_with("unknown"));
    }

    #[test]
    fn truncation_marks_the_cut() {
        assert_eq!(truncate("Fireball", 5), "Fire…");
        assert_eq!(truncate("Fire", 5), "Fire");
    }
}
