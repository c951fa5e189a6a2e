//! Column definitions
//!
//! A column is a tagged descriptor: header label, accessor into the record
//! and a [`CellRender`] strategy. An ordered list of columns forms a
//! [`TableSchema`].

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use backoffice_router::{is_addressable_id, RowActionControl};
use serde_json::Value;

use crate::accessor::AccessorPath;
use crate::cell::{Badge, Cell};
use crate::error::TableError;
use crate::format;

/// Maps a raw status string to its badge
pub type BadgeFn = fn(&str) -> Badge;

/// Caller-supplied cell builder, given the whole row
pub type CustomRender = Arc<dyn Fn(&Value) -> Cell + Send + Sync>;

/// How a column turns its value into a cell
#[derive(Clone, Default)]
pub enum CellRender {
    #[default]
    Plain,
    Currency,
    Date,
    Boolean,
    StatusBadge(BadgeFn),
    RowActions,
    Custom(CustomRender),
}

impl fmt::Debug for CellRender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Plain => "Plain",
            Self::Currency => "Currency",
            Self::Date => "Date",
            Self::Boolean => "Boolean",
            Self::StatusBadge(_) => "StatusBadge",
            Self::RowActions => "RowActions",
            Self::Custom(_) => "Custom",
        };
        f.write_str(name)
    }
}

impl CellRender {
    /// Build the cell for `row`, given the value its accessor resolved to
    pub(crate) fn cell(&self, row: &Value, value: Option<&Value>) -> Cell {
        match self {
            Self::Plain => match value {
                None | Some(Value::Null) => Cell::Empty,
                Some(v) => Cell::Text(format::plain(v)),
            },
            Self::Currency => value
                .and_then(as_number)
                .map_or(Cell::Empty, |n| Cell::Text(format::currency_brl(n))),
            Self::Date => value
                .and_then(Value::as_str)
                .map_or(Cell::Empty, |s| Cell::Text(format::date_pt_br(s))),
            Self::Boolean => value
                .and_then(Value::as_bool)
                .map_or(Cell::Empty, |b| Cell::text(format::boolean_pt_br(b))),
            Self::StatusBadge(badge) => value
                .and_then(Value::as_str)
                .map_or(Cell::Empty, |s| Cell::Badge(badge(s))),
            Self::RowActions => row_id(row)
                .filter(|id| is_addressable_id(id))
                .map_or(Cell::Empty, |id| Cell::Action(RowActionControl::edit(id))),
            Self::Custom(render) => render(row),
        }
    }
}

/// Numeric view of a value; numeric strings count
pub(crate) fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Row identity from its `id` field
pub(crate) fn row_id(row: &Value) -> Option<String> {
    match row.get("id")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// One column of a table
#[derive(Debug, Clone)]
pub struct ColumnDef {
    id: String,
    header: String,
    accessor: Option<String>,
    render: CellRender,
    sortable: bool,
    header_hidden: bool,
}

impl ColumnDef {
    /// Column reading the field at `key`, which is also its id
    #[must_use]
    pub fn field(key: impl Into<String>, header: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            id: key.clone(),
            header: header.into(),
            accessor: Some(key),
            render: CellRender::Plain,
            sortable: true,
            header_hidden: false,
        }
    }

    /// Column without an accessor, rendered from the whole row
    #[must_use]
    pub fn display(
        id: impl Into<String>,
        header: impl Into<String>,
        render: impl Fn(&Value) -> Cell + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            accessor: None,
            render: CellRender::Custom(Arc::new(render)),
            sortable: false,
            header_hidden: false,
        }
    }

    /// Trailing per-row edit control; its header is hidden
    #[must_use]
    pub fn actions() -> Self {
        Self {
            id: "actions".to_string(),
            header: String::new(),
            accessor: None,
            render: CellRender::RowActions,
            sortable: false,
            header_hidden: true,
        }
    }

    #[inline]
    #[must_use]
    pub fn render(mut self, render: CellRender) -> Self {
        self.render = render;
        self
    }

    #[inline]
    #[must_use]
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }

    #[inline]
    #[must_use]
    pub fn accessor(&self) -> Option<&str> {
        self.accessor.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn render_strategy(&self) -> &CellRender {
        &self.render
    }

    #[inline]
    #[must_use]
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    #[inline]
    #[must_use]
    pub fn is_header_hidden(&self) -> bool {
        self.header_hidden
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Column {
    pub(crate) def: ColumnDef,
    pub(crate) path: Option<AccessorPath>,
}

/// Ordered, validated list of columns
#[derive(Debug, Clone)]
pub struct TableSchema {
    columns: Vec<Column>,
}

impl TableSchema {
    /// Parse accessors and reject duplicate column ids
    pub fn new(columns: impl IntoIterator<Item = ColumnDef>) -> Result<Self, TableError> {
        let mut seen = HashSet::new();
        let columns = columns
            .into_iter()
            .map(|def| {
                if !seen.insert(def.id.clone()) {
                    return Err(TableError::DuplicateColumn(def.id.clone()));
                }
                let path = def
                    .accessor
                    .as_deref()
                    .map(str::parse::<AccessorPath>)
                    .transpose()
                    .map_err(|source| TableError::InvalidAccessor {
                        column: def.id.clone(),
                        source,
                    })?;
                Ok(Column { def, path })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { columns })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &ColumnDef> {
        self.columns.iter().map(|c| &c.def)
    }

    #[must_use]
    pub fn column(&self, id: &str) -> Option<&ColumnDef> {
        self.columns().find(|c| c.id == id)
    }

    pub(crate) fn compiled(&self) -> &[Column] {
        &self.columns
    }

    /// Verify every accessor resolves against a sample record
    pub fn check(&self, sample: &Value) -> Result<(), TableError> {
        for column in &self.columns {
            if let Some(path) = &column.path {
                if path.resolve(sample).is_none() {
                    return Err(TableError::UnresolvedAccessor {
                        column: column.def.id.clone(),
                        accessor: path.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Tone;
    use serde_json::json;

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = TableSchema::new([ColumnDef::field("id", "Id"), ColumnDef::field("id", "Id")])
            .unwrap_err();
        assert_eq!(err, TableError::DuplicateColumn("id".into()));
    }

    #[test]
    fn malformed_accessor_is_rejected() {
        let err = TableSchema::new([ColumnDef::field("customer..name", "Cliente")]).unwrap_err();
        assert!(matches!(err, TableError::InvalidAccessor { .. }));
    }

    #[test]
    fn check_reports_unresolved_accessor() {
        let schema = TableSchema::new([
            ColumnDef::field("id", "Id"),
            ColumnDef::field("customer.name", "Nome Cliente"),
        ])
        .unwrap();

        assert!(schema
            .check(&json!({"id": "1", "customer": {"name": "Maria"}}))
            .is_ok());
        assert_eq!(
            schema.check(&json!({"id": "1", "name": "Bebidas"})),
            Err(TableError::UnresolvedAccessor {
                column: "customer.name".into(),
                accessor: "customer.name".into(),
            })
        );
    }

    #[test]
    fn render_strategies() {
        let row = json!({"id": 3, "total": 1234.56, "createdAt": "2024-03-05T12:00:00Z"});

        assert_eq!(
            CellRender::Currency.cell(&row, row.get("total")),
            Cell::text("R$ 1.234,56")
        );
        assert_eq!(
            CellRender::Date.cell(&row, row.get("createdAt")),
            Cell::text("05/03/2024")
        );
        assert_eq!(CellRender::Plain.cell(&row, None), Cell::Empty);
        assert_eq!(
            CellRender::RowActions.cell(&row, None),
            Cell::Action(RowActionControl::edit("3"))
        );
        assert_eq!(
            CellRender::RowActions.cell(&json!({"id": "new"}), None),
            Cell::Empty
        );

        let badge = CellRender::StatusBadge(|s| Badge::new(s.to_lowercase(), Tone::Info));
        assert_eq!(
            badge.cell(&row, Some(&json!("NEW"))),
            Cell::Badge(Badge::new("new", Tone::Info))
        );
    }

    #[test]
    fn actions_column_hides_its_header() {
        let column = ColumnDef::actions();
        assert!(column.is_header_hidden());
        assert!(!column.is_sortable());
        assert!(column.accessor().is_none());
    }
}
