//! Accessor paths
//!
//! Dotted field paths (`customer.name`) resolved against a record viewed as
//! a JSON mapping. Numeric segments index into arrays (`items.0.quantity`).

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde_json::Value;

/// Path from a row to one of its fields
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessorPath(Vec<String>);

impl AccessorPath {
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Field value, or `None` when any segment is missing
    #[must_use]
    pub fn resolve<'a>(&self, row: &'a Value) -> Option<&'a Value> {
        self.0.iter().try_fold(row, |value, segment| match value {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }
}

impl Display for AccessorPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

impl FromStr for AccessorPath {
    type Err = AccessorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(AccessorError::Empty);
        }
        s.split('.')
            .map(|seg| {
                if seg.is_empty() {
                    Err(AccessorError::EmptySegment(s.to_string()))
                } else {
                    Ok(seg.to_string())
                }
            })
            .collect::<Result<_, _>>()
            .map(Self)
    }
}

/// Errors parsing accessor paths
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessorError {
    #[error("accessor path is empty")]
    Empty,

    #[error("accessor '{0}' contains an empty segment")]
    EmptySegment(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_nested_fields() {
        let row = json!({"customer": {"name": "Maria"}, "items": [{"quantity": 2}]});
        let name: AccessorPath = "customer.name".parse().unwrap();
        let qty: AccessorPath = "items.0.quantity".parse().unwrap();

        assert_eq!(name.resolve(&row), Some(&json!("Maria")));
        assert_eq!(qty.resolve(&row), Some(&json!(2)));
    }

    #[test]
    fn missing_segments_resolve_to_none() {
        let row = json!({"customer": null});
        let name: AccessorPath = "customer.name".parse().unwrap();
        assert_eq!(name.resolve(&row), None);
    }

    #[test]
    fn rejects_malformed_paths() {
        assert_eq!("".parse::<AccessorPath>(), Err(AccessorError::Empty));
        assert!(matches!(
            "a..b".parse::<AccessorPath>(),
            Err(AccessorError::EmptySegment(_))
        ));
    }
}
