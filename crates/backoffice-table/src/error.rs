//! Table errors

use thiserror::Error;

use crate::accessor::AccessorError;

/// Errors building or checking a table schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("column '{column}': accessor '{accessor}' does not resolve against the record")]
    UnresolvedAccessor { column: String, accessor: String },

    #[error("column '{column}': {source}")]
    InvalidAccessor {
        column: String,
        #[source]
        source: AccessorError,
    },

    #[error("duplicate column id '{0}'")]
    DuplicateColumn(String),

    #[error("row could not be viewed as a record: {0}")]
    Serialize(String),
}
