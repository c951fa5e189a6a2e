//! Entity service contract
//!
//! One service per entity type performs the remote calls. Implementations
//! report failures as [`EntityError`] and never panic on bad responses.

use async_trait::async_trait;

use crate::error::EntityError;
use crate::record::{Entity, NewRecord};

/// Remote CRUD operations for one entity type
#[async_trait]
pub trait EntityService: Send + Sync {
    /// Record type this service manages
    type Record: Entity;

    /// Fetch the whole collection
    async fn list(&self) -> Result<Vec<Self::Record>, EntityError>;

    /// Fetch one record
    async fn get_by_id(&self, id: &str) -> Result<Self::Record, EntityError>;

    /// Create a record; the returned record carries its assigned id
    async fn create(&self, record: NewRecord<Self::Record>) -> Result<Self::Record, EntityError>;

    /// Replace the record stored under `id`
    async fn update(&self, id: &str, record: Self::Record) -> Result<Self::Record, EntityError>;

    /// Remove the record stored under `id`
    async fn delete(&self, id: &str) -> Result<(), EntityError>;
}
