//! Row action control
//!
//! Per-row edit control of a data table. Activation navigates to the
//! record's detail route and touches no data. A record whose id is the
//! create segment has no detail route of its own and cannot be opened.

use crate::navigator::Navigator;
use crate::path::{RoutePath, NEW_SEGMENT};
use crate::route::Route;

/// Tooltip of the edit control
pub const EDIT_TOOLTIP: &str = "Editar/remover registro";

/// Edit control bound to one row id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowActionControl {
    id: String,
    tooltip: &'static str,
}

impl RowActionControl {
    #[inline]
    #[must_use]
    pub fn edit(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tooltip: EDIT_TOOLTIP,
        }
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Check if the id has a detail route distinct from the create route
    #[inline]
    #[must_use]
    pub fn is_addressable(&self) -> bool {
        is_addressable_id(&self.id)
    }

    #[inline]
    #[must_use]
    pub fn tooltip(&self) -> &'static str {
        self.tooltip
    }

    /// Detail path for this row, built from the list route of `current`
    ///
    /// From `/orders` and from `/orders/1` alike, row `2` targets
    /// `/orders/2`. Paths outside any entity fall back to appending the id.
    #[must_use]
    pub fn target(&self, current: &RoutePath) -> RoutePath {
        Route::resolve(current)
            .list_path()
            .unwrap_or_else(|| current.clone())
            .child(self.id.as_str())
    }

    /// Navigate to [`target`](Self::target)
    ///
    /// Unaddressable ids leave the route unchanged and return it.
    pub fn activate(&self, navigator: &Navigator) -> RoutePath {
        let current = navigator.current();
        if !self.is_addressable() {
            tracing::warn!(id = %self.id, %current, "row id collides with a reserved segment");
            return current;
        }
        let target = self.target(&current);
        navigator.navigate(target.clone());
        target
    }
}

/// Whether a record id can be used as a detail segment
#[inline]
#[must_use]
pub fn is_addressable_id(id: &str) -> bool {
    !id.is_empty() && id != NEW_SEGMENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use backoffice_entity::EntityKind;

    #[test]
    fn target_from_list() {
        let control = RowActionControl::edit("7");
        assert_eq!(
            control
                .target(&RoutePath::list(EntityKind::Category))
                .to_string(),
            "/categories/7"
        );
    }

    #[test]
    fn repeated_activation_does_not_accumulate() {
        let nav = Navigator::new(RoutePath::list(EntityKind::Order));
        RowActionControl::edit("1").activate(&nav);
        RowActionControl::edit("1").activate(&nav);
        assert_eq!(nav.current().to_string(), "/orders/1");

        RowActionControl::edit("2").activate(&nav);
        assert_eq!(nav.current().to_string(), "/orders/2");
    }

    #[test]
    fn reserved_id_is_not_opened() {
        let nav = Navigator::new(RoutePath::list(EntityKind::Brand));
        let control = RowActionControl::edit(NEW_SEGMENT);

        // its target would resolve as the create route
        assert_eq!(
            Route::resolve(&control.target(&nav.current())),
            Route::Create(EntityKind::Brand)
        );
        assert!(!control.is_addressable());
        assert_eq!(control.activate(&nav).to_string(), "/brands");
        assert_eq!(nav.current().to_string(), "/brands");
        assert!(RowActionControl::edit("newer").is_addressable());
    }

    #[test]
    fn tooltip_is_set() {
        assert_eq!(RowActionControl::edit("1").tooltip(), EDIT_TOOLTIP);
    }
}
