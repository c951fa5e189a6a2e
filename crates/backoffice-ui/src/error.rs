//! Error types for the backoffice UI layer

use backoffice_entity::{EntityError, UnknownEntity};
use backoffice_router::{RoutePath, RouteError};
use backoffice_table::TableError;

use crate::config::ConfigError;

/// Main backoffice error type
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Entity service failed
    #[error("service error: {0}")]
    Entity(#[from] EntityError),

    /// Malformed route
    #[error("route error: {0}")]
    Route(#[from] RouteError),

    /// Table schema is inconsistent
    #[error("table error: {0}")]
    Table(#[from] TableError),

    /// Unknown entity name
    #[error(transparent)]
    UnknownEntity(#[from] UnknownEntity),

    /// HTTP client could not be built
    #[error("http client error: {0}")]
    Client(#[from] reqwest::Error),

    /// Route has no entity page
    #[error("no page at {0}")]
    NoPage(RoutePath),
}

impl AdminError {
    /// Check if the error came from the remote service
    #[inline]
    #[must_use]
    pub fn is_service(&self) -> bool {
        matches!(self, Self::Entity(_))
    }
}
