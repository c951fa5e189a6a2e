//! Query cache keys
//!
//! A key is `(entity kind, scope)` where the scope is the whole list or a
//! single record id.

use std::fmt::{self, Display, Formatter};

use backoffice_entity::EntityKind;

/// What part of an entity's data a cache entry holds
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scope {
    /// The full collection
    List,
    /// One record by id
    Detail(String),
}

/// Cache key for one query
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueryKey {
    entity: EntityKind,
    scope: Scope,
}

impl QueryKey {
    #[inline]
    #[must_use]
    pub fn list(entity: EntityKind) -> Self {
        Self {
            entity,
            scope: Scope::List,
        }
    }

    #[inline]
    #[must_use]
    pub fn detail(entity: EntityKind, id: impl Into<String>) -> Self {
        Self {
            entity,
            scope: Scope::Detail(id.into()),
        }
    }

    #[inline]
    #[must_use]
    pub fn entity(&self) -> EntityKind {
        self.entity
    }

    #[inline]
    #[must_use]
    pub fn scope(&self) -> &Scope {
        &self.scope
    }
}

impl Display for QueryKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.scope {
            Scope::List => write!(f, "{}:list", self.entity),
            Scope::Detail(id) => write!(f, "{}:{id}", self.entity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_distinct_per_scope() {
        let list = QueryKey::list(EntityKind::Category);
        let detail = QueryKey::detail(EntityKind::Category, "7");
        assert_ne!(list, detail);
        assert_ne!(detail, QueryKey::detail(EntityKind::Brand, "7"));
        assert_eq!(list.to_string(), "categories:list");
        assert_eq!(detail.to_string(), "categories:7");
    }
}
