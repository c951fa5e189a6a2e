//! Per-entity cases
//!
//! Each managed entity supplies its list columns, the fields its side
//! panel shows and the messages pushed after a save or removal.

mod brand;
mod category;
mod order;
mod product;

use backoffice_entity::Entity;
use backoffice_table::{ColumnDef, TableError, TableSchema};
use serde::Serialize;

pub use order::status_badge;

/// One labelled field of a side panel form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
}

impl FormField {
    #[inline]
    #[must_use]
    pub fn new(name: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            label,
            value: value.into(),
        }
    }
}

/// Page and form description of an entity
pub trait EntityCase: Entity {
    /// Panel title in create mode
    const NEW_TITLE: &'static str;
    /// Notification after a successful save
    const SAVED: &'static str;
    /// Notification after a successful removal
    const REMOVED: &'static str;

    /// List page columns, in display order
    fn columns() -> Vec<ColumnDef>;

    /// Form fields for the current draft
    fn form_fields(&self) -> Vec<FormField>;

    /// Validated list page schema
    ///
    /// # Errors
    /// [`TableError`] if the column list is inconsistent
    fn schema() -> Result<TableSchema, TableError> {
        TableSchema::new(Self::columns())
    }
}
