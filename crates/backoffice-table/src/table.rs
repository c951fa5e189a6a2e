//! Data table rendering

use std::cmp::Ordering;

use serde::Serialize;
use serde_json::Value;

use crate::cell::Cell;
use crate::column::{as_number, row_id, TableSchema};
use crate::error::TableError;
use crate::state::{SortDirection, TableState};

/// Column header of a rendered table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub id: String,
    pub label: String,
    pub hidden: bool,
    pub sortable: bool,
}

/// One rendered row; `cells` has one entry per schema column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: Option<String>,
    pub cells: Vec<Cell>,
}

/// Rendered table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableView {
    pub headers: Vec<Header>,
    pub rows: Vec<TableRow>,
    /// Row count before filtering
    pub total: usize,
}

impl TableView {
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at (`row`, column `id`)
    #[must_use]
    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        let index = self.headers.iter().position(|h| h.id == column)?;
        self.rows.get(row)?.cells.get(index)
    }

    /// Visible text of one column, top to bottom
    #[must_use]
    pub fn column_text(&self, column: &str) -> Vec<String> {
        (0..self.rows.len())
            .map(|row| {
                self.cell(row, column)
                    .and_then(Cell::visible_text)
                    .unwrap_or_default()
                    .to_string()
            })
            .collect()
    }
}

/// Schema-driven table
#[derive(Debug, Clone)]
pub struct DataTable {
    schema: TableSchema,
}

struct Rendered {
    row: TableRow,
    sort_key: Option<Value>,
}

impl DataTable {
    #[inline]
    #[must_use]
    pub fn new(schema: TableSchema) -> Self {
        Self { schema }
    }

    #[inline]
    #[must_use]
    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// Render typed records
    pub fn render<T: Serialize>(
        &self,
        rows: &[T],
        state: &TableState,
    ) -> Result<TableView, TableError> {
        let values = rows
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| TableError::Serialize(e.to_string()))?;
        Ok(self.render_values(&values, state))
    }

    /// Render rows already viewed as JSON mappings
    #[must_use]
    pub fn render_values(&self, rows: &[Value], state: &TableState) -> TableView {
        let columns = self.schema.compiled();
        let headers = columns
            .iter()
            .map(|c| Header {
                id: c.def.id().to_string(),
                label: if c.def.is_header_hidden() {
                    String::new()
                } else {
                    c.def.header().to_string()
                },
                hidden: c.def.is_header_hidden(),
                sortable: c.def.is_sortable(),
            })
            .collect();

        let sort = state.sort().and_then(|sort| {
            let index = columns
                .iter()
                .position(|c| c.def.id() == sort.column && c.def.is_sortable());
            if index.is_none() {
                tracing::debug!(column = %sort.column, "ignoring sort on unknown column");
            }
            index.map(|i| (i, sort.direction))
        });

        let mut rendered: Vec<Rendered> = rows
            .iter()
            .map(|row| {
                let cells = columns
                    .iter()
                    .map(|c| {
                        let value = c.path.as_ref().and_then(|p| p.resolve(row));
                        c.def.render_strategy().cell(row, value)
                    })
                    .collect::<Vec<_>>();
                let sort_key = sort.map(|(i, _)| match &columns[i].path {
                    Some(path) => path.resolve(row).cloned().unwrap_or(Value::Null),
                    None => cells[i]
                        .visible_text()
                        .map_or(Value::Null, |t| Value::String(t.to_string())),
                });
                Rendered {
                    row: TableRow {
                        id: row_id(row),
                        cells,
                    },
                    sort_key,
                }
            })
            .collect();

        let term = state.filter().trim().to_lowercase();
        if !term.is_empty() {
            rendered.retain(|r| {
                r.row
                    .cells
                    .iter()
                    .filter_map(Cell::visible_text)
                    .any(|text| text.to_lowercase().contains(&term))
            });
        }

        if let Some((_, direction)) = sort {
            rendered.sort_by(|a, b| compare_keys(a.sort_key.as_ref(), b.sort_key.as_ref(), direction));
        }

        TableView {
            headers,
            rows: rendered.into_iter().map(|r| r.row).collect(),
            total: rows.len(),
        }
    }
}

fn is_blank(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}

/// Numbers numerically, everything else as case-insensitive text; blanks last
fn compare_keys(a: Option<&Value>, b: Option<&Value>, direction: SortDirection) -> Ordering {
    match (is_blank(a), is_blank(b)) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }
    let (Some(a), Some(b)) = (a, b) else {
        return Ordering::Equal;
    };
    // numbers rank before text so mixed columns still order totally
    let ordering = match (a, b) {
        (Value::Number(_), Value::Number(_)) => as_number(a)
            .zip(as_number(b))
            .and_then(|(x, y)| x.partial_cmp(&y))
            .unwrap_or(Ordering::Equal),
        (Value::Number(_), _) => Ordering::Less,
        (_, Value::Number(_)) => Ordering::Greater,
        _ => sort_text(a).cmp(&sort_text(b)),
    };
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

fn sort_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.to_lowercase(),
        other => other.to_string().to_lowercase(),
    }
}
