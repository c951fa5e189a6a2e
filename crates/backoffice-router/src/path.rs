//! Route paths
//!
//! Provides [`RoutePath`], a normalised absolute URL path.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use backoffice_entity::EntityKind;

/// Segment that selects the create flow
pub const NEW_SEGMENT: &str = "new";

/// Absolute path in the application
///
/// Always rendered with a leading `/` and without a trailing one; empty
/// segments are dropped on parse, so `/categories//7/` is `/categories/7`.
///
/// # Examples
/// - `[]` → `/`
/// - `["orders", "12"]` → `/orders/12`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RoutePath(Vec<String>);

impl RoutePath {
    /// Root path `/`
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// `/{entity}`
    #[inline]
    #[must_use]
    pub fn list(kind: EntityKind) -> Self {
        Self(vec![kind.segment().to_string()])
    }

    /// `/{entity}/new`
    #[inline]
    #[must_use]
    pub fn create(kind: EntityKind) -> Self {
        Self::list(kind).child(NEW_SEGMENT)
    }

    /// `/{entity}/{id}`
    #[inline]
    #[must_use]
    pub fn edit(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::list(kind).child(id)
    }

    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Append a segment, returning new path
    ///
    /// The segment is trimmed of slashes; an empty segment leaves the path
    /// unchanged.
    #[must_use]
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let segment = segment.into();
        let segment = segment.trim_matches('/');
        let mut new = self.clone();
        if !segment.is_empty() {
            new.0.push(segment.to_string());
        }
        new
    }

    /// Path truncated at its last `/`
    ///
    /// `/categories/7` → `/categories`, `/categories` → `/`, `/` → `/`.
    #[must_use]
    pub fn truncate_last(&self) -> Self {
        let mut new = self.clone();
        new.0.pop();
        new
    }

    /// Check if this path is a prefix of another
    #[inline]
    #[must_use]
    pub fn is_prefix_of(&self, other: &Self) -> bool {
        self.0.len() <= other.0.len() && self.0 == other.0[..self.0.len()]
    }
}

impl Display for RoutePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.0.join("/"))
    }
}

impl FromStr for RoutePath {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s.starts_with('/') {
            return Err(RouteError::NotAbsolute(s.to_string()));
        }
        // Drop query string and fragment
        let path = s.split(['?', '#']).next().unwrap_or_default();
        Ok(Self(
            path.split('/')
                .filter(|seg| !seg.is_empty())
                .map(str::to_string)
                .collect(),
        ))
    }
}

impl From<EntityKind> for RoutePath {
    fn from(kind: EntityKind) -> Self {
        Self::list(kind)
    }
}

/// Errors related to route paths
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// Path does not start with `/`
    #[error("route path must be absolute: '{0}'")]
    NotAbsolute(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalises() {
        let path: RoutePath = "/categories//7/".parse().unwrap();
        assert_eq!(path.segments(), &["categories", "7"]);
        assert_eq!(path.to_string(), "/categories/7");
    }

    #[test]
    fn parse_drops_query_and_fragment() {
        let path: RoutePath = "/orders?page=2#top".parse().unwrap();
        assert_eq!(path.to_string(), "/orders");
    }

    #[test]
    fn relative_paths_are_rejected() {
        let result: Result<RoutePath, _> = "categories/7".parse();
        assert!(matches!(result, Err(RouteError::NotAbsolute(_))));
    }

    #[test]
    fn root_display() {
        assert_eq!(RoutePath::root().to_string(), "/");
        assert_eq!("/".parse::<RoutePath>().unwrap(), RoutePath::root());
    }

    #[test]
    fn truncate_last_returns_to_list() {
        let path = RoutePath::edit(EntityKind::Category, "7");
        assert_eq!(path.truncate_last().to_string(), "/categories");
        assert_eq!(path.truncate_last().truncate_last(), RoutePath::root());
        assert_eq!(RoutePath::root().truncate_last(), RoutePath::root());
    }

    #[test]
    fn constructors() {
        assert_eq!(RoutePath::create(EntityKind::Brand).to_string(), "/brands/new");
        assert_eq!(RoutePath::from(EntityKind::Order).to_string(), "/orders");
    }

    #[test]
    fn child_ignores_slashes_and_empties() {
        let list = RoutePath::list(EntityKind::Product);
        assert_eq!(list.child("/3/").to_string(), "/products/3");
        assert_eq!(list.child(""), list);
    }

    #[test]
    fn prefix() {
        let list = RoutePath::list(EntityKind::Order);
        assert!(list.is_prefix_of(&RoutePath::edit(EntityKind::Order, "1")));
        assert!(!list.is_prefix_of(&RoutePath::list(EntityKind::Brand)));
    }
}
