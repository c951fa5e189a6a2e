//! Route matching
//!
//! | Path | Route |
//! |---|---|
//! | `/` | `Home` |
//! | `/{entity}` | `List` |
//! | `/{entity}/new` | `Create` |
//! | `/{entity}/{id}` | `Edit` |
//! | anything else | `NotFound` |

use backoffice_entity::EntityKind;

use crate::path::{RoutePath, NEW_SEGMENT};

/// Matched route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    List(EntityKind),
    Create(EntityKind),
    Edit(EntityKind, String),
    NotFound(RoutePath),
}

impl Route {
    /// Match a path against the route table
    #[must_use]
    pub fn resolve(path: &RoutePath) -> Self {
        let segments = path.segments();
        let Some(kind) = segments.first().and_then(|s| EntityKind::from_segment(s)) else {
            return if path.is_root() {
                Self::Home
            } else {
                Self::NotFound(path.clone())
            };
        };

        match &segments[1..] {
            [] => Self::List(kind),
            [sub] if sub == NEW_SEGMENT => Self::Create(kind),
            [id] => Self::Edit(kind, id.clone()),
            _ => Self::NotFound(path.clone()),
        }
    }

    /// Entity whose pages this route belongs to
    #[inline]
    #[must_use]
    pub fn entity(&self) -> Option<EntityKind> {
        match self {
            Self::List(kind) | Self::Create(kind) | Self::Edit(kind, _) => Some(*kind),
            Self::Home | Self::NotFound(_) => None,
        }
    }

    /// Path of the owning list route
    #[inline]
    #[must_use]
    pub fn list_path(&self) -> Option<RoutePath> {
        self.entity().map(RoutePath::list)
    }

    /// Check if this route mounts a side panel
    #[inline]
    #[must_use]
    pub fn is_detail(&self) -> bool {
        matches!(self, Self::Create(_) | Self::Edit(..))
    }
}
