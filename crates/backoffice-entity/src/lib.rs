//! Backoffice Entities
//!
//! Typed business records and the async service contract used to fetch and
//! mutate them.
//!
//! # Core Concepts
//!
//! - [`Entity`]: Trait implemented by every managed record type
//! - [`EntityKind`]: The closed set of managed entity types and their routes
//! - [`NewRecord<T>`]: A record without identity, ready for creation
//! - [`EntityService`]: list/get/create/update/delete for one entity type
//! - [`HttpEntityService`]: JSON-over-HTTP implementation of the service
//!
//! # Example
//!
//! ```rust,ignore
//! use backoffice_entity::{Category, EntityService, HttpEntityService, NewRecord};
//!
//! let service = HttpEntityService::<Category>::new(client, base_url);
//! let created = service
//!     .create(NewRecord::new(Category::named("Beverages")))
//!     .await?;
//! assert!(created.id.is_some());
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod error;
mod http;
mod kind;
mod record;
mod service;
mod validation;

pub mod model;

pub use error::EntityError;
pub use http::HttpEntityService;
pub use kind::{EntityKind, UnknownEntity};
pub use model::{Brand, Category, Customer, Order, OrderItem, OrderStatus, Product};
pub use record::{Entity, NewRecord};
pub use service::EntityService;
pub use validation::{FieldError, ValidationErrors, Validator};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with entities
    pub use crate::{
        Entity, EntityError, EntityKind, EntityService, NewRecord, ValidationErrors,
    };
}
