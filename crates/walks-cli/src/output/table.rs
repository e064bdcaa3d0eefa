#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Narrowest a column shrinks to when fitting `max_width`.
const MIN_COLUMN: usize = 6;

/// Render an aligned table. Cells are truncated with `…` when `max_width`
/// is too narrow; difficulty labels, failure kinds and booleans are colored
/// when enabled.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let floors: Vec<usize> = headers
        .iter()
        .map(|header| header.chars().count().max(MIN_COLUMN))
        .collect();
    let mut widths: Vec<usize> = floors
        .iter()
        .enumerate()
        .map(|(index, floor)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .fold(*floor, usize::max)
        })
        .collect();

    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, &floors, max_width);
    }

    let header_line = render_line(headers.iter().copied(), &widths, false);
    let divider = "-".repeat(header_line.chars().count());
    let mut lines = vec![header_line, divider];
    lines.extend(
        rows.iter()
            .map(|row| render_line(row.iter().map(String::as_str), &widths, options.color)),
    );
    lines.join("\n")
}

fn render_line<'a>(
    mut cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
    color: bool,
) -> String {
    widths
        .iter()
        .map(|width| {
            let text = truncate_text(cells.next().unwrap_or("-"), *width);
            let pad = " ".repeat(width.saturating_sub(text.chars().count()));
            match status_color(&text).filter(|_| color) {
                Some(code) => format!("\u{1b}[{code}m{text}\u{1b}[0m{pad}"),
                None => format!("{text}{pad}"),
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Take one character at a time from the widest column still above its
/// floor until the row fits or nothing can shrink.
fn shrink_to_fit(widths: &mut [usize], floors: &[usize], max_width: usize) {
    let separators = widths.len().saturating_sub(1) * 2;
    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .zip(floors)
            .enumerate()
            .filter(|(_, (width, floor))| width > floor)
            .max_by_key(|(index, (width, _))| (**width, std::cmp::Reverse(*index)))
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// ANSI color code for walk difficulties, load failure kinds and booleans.
fn status_color(value: &str) -> Option<&'static str> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "easy" => Some("32"),
        "warning" | "moderate" | "unresolved_icons" => Some("33"),
        "false" | "hard" | "invalid" | "parse" | "io" | "duplicate_id" | "invalid_path" => {
            Some("31")
        }
        _ => None,
    }
}
