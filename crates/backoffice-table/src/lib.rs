//! Backoffice Data Tables
//!
//! Column-definition driven tables over entity records.
//!
//! # Core Concepts
//!
//! - [`ColumnDef`]: Header, accessor path and [`CellRender`] strategy
//! - [`TableSchema`]: Ordered, validated column list
//! - [`DataTable`]: Renders records into a [`TableView`]
//! - [`TableState`]: Local sort and filter, owned by one table
//!
//! Records are viewed as JSON mappings, so any `Serialize` type can be
//! rendered. Every input record yields exactly one [`TableRow`] and every
//! row has exactly one [`Cell`] per column.
//!
//! # Example
//!
//! ```rust
//! use backoffice_table::{CellRender, ColumnDef, DataTable, TableSchema, TableState};
//! use serde_json::json;
//!
//! let schema = TableSchema::new([
//!     ColumnDef::field("id", "Id"),
//!     ColumnDef::field("total", "Total").render(CellRender::Currency),
//!     ColumnDef::actions(),
//! ])
//! .unwrap();
//!
//! let view = DataTable::new(schema)
//!     .render_values(&[json!({"id": "1", "total": 1234.56})], &TableState::new());
//! assert_eq!(view.column_text("total"), vec!["R$ 1.234,56"]);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod accessor;
mod cell;
mod column;
mod error;
pub mod format;
mod state;
mod table;
mod text;

pub use accessor::{AccessorError, AccessorPath};
pub use cell::{Badge, Cell, Tone};
pub use column::{BadgeFn, CellRender, ColumnDef, CustomRender, TableSchema};
pub use error::TableError;
pub use state::{Sort, SortDirection, SortParseError, TableState};
pub use table::{DataTable, Header, TableRow, TableView};
pub use text::render_text;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
