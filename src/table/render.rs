/// Layout of key/value and grid payloads into aligned, styled text.
///
/// Both render operations are pure: they borrow an immutable [`Theme`],
/// compute column widths from rune widths (not byte lengths), and return a
/// complete `String`. Nothing is written to stdout here, and a failed
/// render produces no partial output.
use console::Style;
use unicode_width::UnicodeWidthStr;

use super::errors::RenderError;
use super::theme::Theme;

/// Ordered (label, value) pairs for vertical ("detail view") rendering.
///
/// Labels are caller-supplied and need not be unique; duplicates are a
/// caller error, not a renderer error.
#[derive(Debug, Clone, Default)]
pub struct KeyValueSet {
    pairs: Vec<(String, String)>,
}

impl KeyValueSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a pair. Input order is display order.
    pub fn push(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((label.into(), value.into()));
    }

    /// The pairs in input order.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

/// Ordered column headers plus rows of positionally aligned string cells.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table with the given column headers and no rows.
    #[must_use]
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a data row. Cells align positionally to the headers.
    pub fn push_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    /// The column headers.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// The data rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

/// Horizontal alignment of a cell within its column.
#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Cells consisting entirely of ASCII digits are right-aligned. This is a
/// formatting convention decided per cell, not a type system.
fn is_numeric(cell: &str) -> bool {
    !cell.is_empty() && cell.bytes().all(|b| b.is_ascii_digit())
}

/// Pad `text` to `width` display columns. The padding stays outside the
/// styled region so ANSI codes never disturb the layout math.
fn pad_cell(text: &str, width: usize, style: &Style, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(display_width(text)));
    match align {
        Align::Left => format!("{}{fill}", style.apply_to(text)),
        Align::Right => format!("{fill}{}", style.apply_to(text)),
    }
}

/// A horizontal rule: `left`, then per column `horizontal` repeated over the
/// column width plus its two padding spaces, joined by `junction`, then
/// `right`.
fn rule(theme: &Theme, widths: &[usize], left: char, junction: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            line.push(junction);
        }
        line.extend(std::iter::repeat_n(theme.borders.horizontal, width + 2));
    }
    line.push(right);
    line
}

/// A content row: cells already padded to their column widths, wrapped in
/// padding spaces and joined by the vertical border glyph.
fn content_row(theme: &Theme, cells: &[String]) -> String {
    let vertical = theme.borders.vertical;
    let mut line = String::new();
    line.push(vertical);
    for cell in cells {
        line.push(' ');
        line.push_str(cell);
        line.push(' ');
        line.push(vertical);
    }
    line
}

/// Render an ordered key/value block as a bordered detail view.
///
/// The label column width is the maximum rune width over all labels
/// (minimum 1), so every value starts at the same horizontal offset. An
/// empty `title` suppresses the title bar. Identical input and theme
/// always produce byte-identical output.
#[must_use]
pub fn render_key_value(title: &str, theme: &Theme, pairs: &KeyValueSet) -> String {
    let separator = theme.key_value_separator;
    let separator_width = display_width(separator);

    let label_width = pairs
        .pairs()
        .iter()
        .map(|(label, _)| display_width(label))
        .max()
        .unwrap_or(0)
        .max(1);
    let natural_value_width = pairs
        .pairs()
        .iter()
        .map(|(_, value)| display_width(value))
        .max()
        .unwrap_or(0)
        .max(1);

    // A long title widens the value column so the box stays rectangular.
    let mut content_width = label_width + separator_width + natural_value_width;
    if !title.is_empty() {
        content_width = content_width.max(display_width(title));
    }
    let value_width = content_width - label_width - separator_width;

    let borders = &theme.borders;
    let widths = [content_width];
    let mut lines: Vec<String> = Vec::new();

    lines.push(rule(
        theme,
        &widths,
        borders.top_left,
        borders.top_tee,
        borders.top_right,
    ));
    if !title.is_empty() {
        let cell = pad_cell(title, content_width, &theme.title_style, Align::Left);
        lines.push(content_row(theme, &[cell]));
        lines.push(rule(
            theme,
            &widths,
            borders.left_tee,
            borders.cross,
            borders.right_tee,
        ));
    }
    for (label, value) in pairs.pairs() {
        let mut cell = pad_cell(label, label_width, &theme.key_style, Align::Left);
        cell.push_str(separator);
        cell.push_str(&pad_cell(value, value_width, &theme.value_style, Align::Left));
        lines.push(content_row(theme, &[cell]));
    }
    lines.push(rule(
        theme,
        &widths,
        borders.bottom_left,
        borders.bottom_tee,
        borders.bottom_right,
    ));

    lines.join("\n")
}

/// Render a multi-column table as a bordered grid.
///
/// Each column's width is the maximum rune width among its header and all
/// of its cells (minimum 1). Numeric-looking cells are right-aligned,
/// everything else left-aligned; headers are always left-aligned. An empty
/// `title` suppresses the title bar. A zero-row table renders header and
/// separator only.
///
/// # Errors
///
/// Returns [`RenderError::EmptyTable`] for a zero-column table, and
/// [`RenderError::RowShape`] (with the offending row's index) when any
/// row's cell count differs from the header count. Both are detected
/// before any layout happens, so nothing is emitted on error.
pub fn render_table(title: &str, theme: &Theme, table: &Table) -> Result<String, RenderError> {
    let columns = table.headers().len();
    if columns == 0 {
        return Err(RenderError::EmptyTable);
    }
    for (index, row) in table.rows().iter().enumerate() {
        if row.len() != columns {
            return Err(RenderError::RowShape {
                index,
                expected: columns,
                found: row.len(),
            });
        }
    }

    let mut widths: Vec<usize> = table
        .headers()
        .iter()
        .map(|header| display_width(header).max(1))
        .collect();
    for row in table.rows() {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(display_width(cell));
        }
    }

    // Widen the last column if the title bar needs more room than the
    // columns provide.
    if !title.is_empty() {
        let inner: usize = widths.iter().map(|w| w + 2).sum::<usize>() + (columns - 1);
        let needed = display_width(title) + 2;
        if needed > inner {
            widths[columns - 1] += needed - inner;
        }
    }

    let borders = &theme.borders;
    let mut lines: Vec<String> = Vec::new();

    if title.is_empty() {
        lines.push(rule(
            theme,
            &widths,
            borders.top_left,
            borders.top_tee,
            borders.top_right,
        ));
    } else {
        let span = widths.iter().map(|w| w + 2).sum::<usize>() + (columns - 1) - 2;
        lines.push(rule(
            theme,
            &[span],
            borders.top_left,
            borders.top_tee,
            borders.top_right,
        ));
        let cell = pad_cell(title, span, &theme.title_style, Align::Left);
        lines.push(content_row(theme, &[cell]));
        lines.push(rule(
            theme,
            &widths,
            borders.left_tee,
            borders.top_tee,
            borders.right_tee,
        ));
    }

    let header_cells: Vec<String> = table
        .headers()
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad_cell(header, *width, &theme.header_style, Align::Left))
        .collect();
    lines.push(content_row(theme, &header_cells));

    if !table.rows().is_empty() {
        lines.push(rule(
            theme,
            &widths,
            borders.left_tee,
            borders.cross,
            borders.right_tee,
        ));
        for (index, row) in table.rows().iter().enumerate() {
            if theme.row_separators && index > 0 {
                lines.push(rule(
                    theme,
                    &widths,
                    borders.left_tee,
                    borders.cross,
                    borders.right_tee,
                ));
            }
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, width)| {
                    let align = if is_numeric(cell) {
                        Align::Right
                    } else {
                        Align::Left
                    };
                    pad_cell(cell, *width, &theme.value_style, align)
                })
                .collect();
            lines.push(content_row(theme, &cells));
        }
    }

    lines.push(rule(
        theme,
        &widths,
        borders.bottom_left,
        borders.bottom_tee,
        borders.bottom_right,
    ));

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::theme::{ASCII_BORDERS, ThemeStore};

    fn plain() -> Theme {
        ThemeStore::builtin().load("plain").unwrap().clone()
    }

    fn sample_pairs() -> KeyValueSet {
        let mut pairs = KeyValueSet::new();
        pairs.push("ID", "42");
        pairs.push("System Name", "OrchestratorA");
        pairs
    }

    #[test]
    fn test_key_value_layout() {
        let text = render_key_value("System Details", &plain(), &sample_pairs());
        let expected = [
            "+-----------------------------+",
            "| System Details              |",
            "+-----------------------------+",
            "| ID          : 42            |",
            "| System Name : OrchestratorA |",
            "+-----------------------------+",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_key_value_column_offset() {
        let text = render_key_value("System Details", &plain(), &sample_pairs());
        let offsets: Vec<usize> = text
            .lines()
            .filter(|line| line.contains(" : "))
            .map(|line| line.find(" : ").unwrap())
            .collect();
        // Offset = border prefix + max label rune width ("System Name").
        assert_eq!(offsets, [2 + 11, 2 + 11]);
    }

    #[test]
    fn test_key_value_without_title() {
        let text = render_key_value("", &plain(), &sample_pairs());
        let expected = [
            "+-----------------------------+",
            "| ID          : 42            |",
            "| System Name : OrchestratorA |",
            "+-----------------------------+",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_key_value_wide_labels() {
        // "名前" is 2 runes but 4 display columns; layout must use rune
        // width, not char count.
        let mut pairs = KeyValueSet::new();
        pairs.push("名前", "orchestrator");
        pairs.push("ID", "7");
        let text = render_key_value("", &plain(), &pairs);
        let expected = [
            "+---------------------+",
            "| 名前 : orchestrator |",
            "| ID   : 7            |",
            "+---------------------+",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_key_value_empty_set() {
        // Label and value columns never collapse below width 1.
        let text = render_key_value("", &plain(), &KeyValueSet::new());
        let expected = ["+-------+", "+-------+"].join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_key_value_deterministic() {
        let theme = plain();
        let pairs = sample_pairs();
        let first = render_key_value("System Details", &theme, &pairs);
        let second = render_key_value("System Details", &theme, &pairs);
        assert_eq!(first, second);
    }

    #[test]
    fn test_table_layout_and_alignment() {
        let mut table = Table::new(["ID", "NAME"]);
        table.push_row(["42", "OrchestratorA"]);
        table.push_row(["7", "gateway"]);
        let text = render_table("", &plain(), &table).unwrap();
        let expected = [
            "+----+---------------+",
            "| ID | NAME          |",
            "+----+---------------+",
            "| 42 | OrchestratorA |",
            "|  7 | gateway       |",
            "+----+---------------+",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_table_mixed_alignment_in_one_column() {
        let mut table = Table::new(["PORT", "NOTE"]);
        table.push_row(["42", "registered"]);
        table.push_row(["n/a", "offline"]);
        let text = render_table("", &plain(), &table).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[3], "|   42 | registered |");
        assert_eq!(lines[4], "| n/a  | offline    |");
    }

    #[test]
    fn test_table_zero_rows() {
        let table = Table::new(["ID", "Name"]);
        let text = render_table("", &plain(), &table).unwrap();
        let expected = ["+----+------+", "| ID | Name |", "+----+------+"].join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_table_title_widens_last_column() {
        let table = Table::new(["ID"]);
        let text = render_table("Service Registry", &plain(), &table).unwrap();
        let expected = [
            "+------------------+",
            "| Service Registry |",
            "+------------------+",
            "| ID               |",
            "+------------------+",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_table_row_shape_error() {
        let mut table = Table::new(["ID", "NAME"]);
        table.push_row(["1", "alpha"]);
        table.push_row(["2", "beta", "extra"]);
        let result = render_table("", &plain(), &table);
        assert!(matches!(
            result,
            Err(RenderError::RowShape {
                index: 1,
                expected: 2,
                found: 3,
            })
        ));
    }

    #[test]
    fn test_table_zero_columns() {
        let table = Table::new(Vec::<String>::new());
        let result = render_table("", &plain(), &table);
        assert!(matches!(result, Err(RenderError::EmptyTable)));
    }

    #[test]
    fn test_table_deterministic() {
        let theme = plain();
        let mut table = Table::new(["ID", "NAME"]);
        table.push_row(["42", "OrchestratorA"]);
        let first = render_table("Systems", &theme, &table).unwrap();
        let second = render_table("Systems", &theme, &table).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_table_row_separators() {
        let theme = Theme {
            name: "ruled",
            borders: ASCII_BORDERS,
            key_value_separator: " : ",
            row_separators: true,
            title_style: Style::new(),
            header_style: Style::new(),
            key_style: Style::new(),
            value_style: Style::new(),
        };
        let mut table = Table::new(["ID"]);
        table.push_row(["1"]);
        table.push_row(["2"]);
        let text = render_table("", &theme, &table).unwrap();
        let expected = [
            "+----+", "| ID |", "+----+", "|  1 |", "+----+", "|  2 |", "+----+",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_table_with_title_joins_columns() {
        let mut table = Table::new(["ID", "NAME"]);
        table.push_row(["42", "OrchestratorA"]);
        let text = render_table("Systems", &plain(), &table).unwrap();
        let expected = [
            "+--------------------+",
            "| Systems            |",
            "+----+---------------+",
            "| ID | NAME          |",
            "+----+---------------+",
            "| 42 | OrchestratorA |",
            "+----+---------------+",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }
}
