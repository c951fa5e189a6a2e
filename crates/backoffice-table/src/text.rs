//! Plain-text grid rendering for terminals

use std::fmt::Write as _;

use crate::cell::Cell;
use crate::table::TableView;

const ACTION_GLYPH: &str = "✎";

fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::Text(text) => text.clone(),
        Cell::Badge(badge) => format!("[{}]", badge.label),
        Cell::Action(_) => ACTION_GLYPH.to_string(),
        Cell::Empty => String::new(),
    }
}

fn pad(out: &mut String, text: &str, width: usize) {
    out.push_str(text);
    for _ in text.chars().count()..width {
        out.push(' ');
    }
}

fn write_line<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) {
    let mut line = String::new();
    for (i, (text, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        pad(&mut line, text.as_ref(), *width);
    }
    let _ = writeln!(out, "{}", line.trim_end());
}

/// Draw `view` as left-aligned columns separated by two spaces
#[must_use]
pub fn render_text(view: &TableView) -> String {
    let body: Vec<Vec<String>> = view
        .rows
        .iter()
        .map(|row| row.cells.iter().map(cell_text).collect())
        .collect();

    let widths: Vec<usize> = view
        .headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            body.iter()
                .filter_map(|cells| cells.get(i))
                .map(|t| t.chars().count())
                .chain(std::iter::once(header.label.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let headers: Vec<&str> = view.headers.iter().map(|h| h.label.as_str()).collect();
    write_line(&mut out, &headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_line(&mut out, &rule, &widths);
    for cells in &body {
        write_line(&mut out, cells, &widths);
    }

    if view.rows.is_empty() {
        out.push_str("(nenhum registro)\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{ColumnDef, TableSchema};
    use crate::state::TableState;
    use crate::table::DataTable;
    use serde_json::json;

    #[test]
    fn aligns_columns() {
        let table = DataTable::new(
            TableSchema::new([
                ColumnDef::field("id", "Id"),
                ColumnDef::field("name", "Nome"),
                ColumnDef::actions(),
            ])
            .unwrap(),
        );
        let view = table.render_values(
            &[json!({"id": "1", "name": "Bebidas"}), json!({"id": "7", "name": "Snacks"})],
            &TableState::new(),
        );

        let text = render_text(&view);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Id  Nome");
        assert_eq!(lines[1], "--  -------  -");
        assert_eq!(lines[2], "1   Bebidas  ✎");
        assert_eq!(lines[3], "7   Snacks   ✎");
    }

    #[test]
    fn empty_table_says_so() {
        let table = DataTable::new(TableSchema::new([ColumnDef::field("id", "Id")]).unwrap());
        let text = render_text(&table.render_values(&[], &TableState::new()));
        assert!(text.ends_with("(nenhum registro)\n"));
    }
}
