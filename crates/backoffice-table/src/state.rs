//! Local interactive table state
//!
//! Sort and filter belong to one table instance and are never shared with
//! the query layer.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Active sort: column id plus direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub column: String,
    pub direction: SortDirection,
}

impl Sort {
    #[inline]
    #[must_use]
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Ascending,
        }
    }

    #[inline]
    #[must_use]
    pub fn descending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Descending,
        }
    }
}

impl Display for Sort {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.direction {
            SortDirection::Ascending => write!(f, "{}", self.column),
            SortDirection::Descending => write!(f, "{}:desc", self.column),
        }
    }
}

/// Parses `column`, `column:asc` or `column:desc`
impl FromStr for Sort {
    type Err = SortParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (column, direction) = match s.split_once(':') {
            None => (s, SortDirection::Ascending),
            Some((column, "asc")) => (column, SortDirection::Ascending),
            Some((column, "desc")) => (column, SortDirection::Descending),
            Some(_) => return Err(SortParseError(s.to_string())),
        };
        if column.is_empty() {
            return Err(SortParseError(s.to_string()));
        }
        Ok(Self {
            column: column.to_string(),
            direction,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid sort '{0}', expected column[:asc|:desc]")]
pub struct SortParseError(pub String);

/// Sort and filter for one table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableState {
    sort: Option<Sort>,
    filter: String,
}

impl TableState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_filter(mut self, term: impl Into<String>) -> Self {
        self.filter = term.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn sort(&self) -> Option<&Sort> {
        self.sort.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_sort(&mut self, sort: Option<Sort>) {
        self.sort = sort;
    }

    pub fn set_filter(&mut self, term: impl Into<String>) {
        self.filter = term.into();
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
    }

    /// Header click: ascending, then descending, then unsorted
    pub fn toggle_sort(&mut self, column: &str) {
        self.sort = match self.sort.take() {
            Some(s) if s.column == column => match s.direction {
                SortDirection::Ascending => Some(Sort::descending(column)),
                SortDirection::Descending => None,
            },
            _ => Some(Sort::ascending(column)),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_cycles_through_directions() {
        let mut state = TableState::new();
        state.toggle_sort("name");
        assert_eq!(state.sort(), Some(&Sort::ascending("name")));
        state.toggle_sort("name");
        assert_eq!(state.sort(), Some(&Sort::descending("name")));
        state.toggle_sort("name");
        assert_eq!(state.sort(), None);

        state.toggle_sort("name");
        state.toggle_sort("total");
        assert_eq!(state.sort(), Some(&Sort::ascending("total")));
    }

    #[test]
    fn parse_sort() {
        assert_eq!("name".parse(), Ok(Sort::ascending("name")));
        assert_eq!("total:desc".parse(), Ok(Sort::descending("total")));
        assert!("total:sideways".parse::<Sort>().is_err());
        assert!(":desc".parse::<Sort>().is_err());
        assert_eq!(Sort::descending("total").to_string(), "total:desc");
    }
}
