//! Entity record contract
//!
//! Records are typed structs; for table rendering they are viewed as plain
//! JSON mappings through [`Entity::to_value`].

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::kind::EntityKind;
use crate::validation::ValidationErrors;

/// A record managed through list views and side-panel forms
///
/// Identity is a string id assigned by the service; it is `None` until
/// creation succeeds. `Default` is the empty draft a create form starts from.
pub trait Entity:
    Debug + Clone + PartialEq + Default + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Kind this record belongs to
    const KIND: EntityKind;

    /// Service-assigned id, if any
    fn id(&self) -> Option<&str>;

    /// Replace the id
    fn set_id(&mut self, id: Option<String>);

    /// Check the record before it is sent to the service
    ///
    /// # Errors
    /// Field-level messages for every failed rule
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }

    /// Record as a plain field mapping
    #[must_use]
    fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Same record with the given id
    #[must_use]
    fn with_id(mut self, id: impl Into<String>) -> Self {
        self.set_id(Some(id.into()));
        self
    }
}

/// A record without identity, the input of `create`
///
/// Construction strips any id the caller left on the record, so a create
/// request can never carry one.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecord<T: Entity>(T);

impl<T: Entity> NewRecord<T> {
    /// Wrap a record, clearing its id
    #[inline]
    #[must_use]
    pub fn new(mut record: T) -> Self {
        record.set_id(None);
        Self(record)
    }

    /// Borrow the record
    #[inline]
    #[must_use]
    pub fn record(&self) -> &T {
        &self.0
    }

    /// Unwrap the record
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Attach the id assigned by the service
    #[inline]
    #[must_use]
    pub fn assign_id(self, id: impl Into<String>) -> T {
        self.0.with_id(id)
    }
}

impl<T: Entity> Serialize for NewRecord<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    #[test]
    fn new_record_strips_id() {
        let draft = NewRecord::new(Category::named("Beverages").with_id("9"));
        assert_eq!(draft.record().id(), None);
        assert_eq!(draft.record().name, "Beverages");
    }

    #[test]
    fn new_record_serializes_without_id() {
        let draft = NewRecord::new(Category::named("Beverages"));
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Beverages" }));
    }

    #[test]
    fn assign_id_restores_identity() {
        let created = NewRecord::new(Category::named("Snacks")).assign_id("7");
        assert_eq!(created.id(), Some("7"));
    }
}
