//! Mutation → cache key dependency table
//!
//! Every successful mutation invalidates exactly the keys listed here for
//! its kind.

use std::collections::HashMap;

use backoffice_entity::EntityKind;

use crate::key::QueryKey;

/// Kind of write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

/// Cache scope affected by a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The entity's list query
    List,
    /// The detail query of the mutated id
    Detail,
}

/// Explicit dependency table from mutation kind to invalidated scopes
#[derive(Debug, Clone)]
pub struct InvalidationTable {
    rules: HashMap<MutationKind, Vec<Target>>,
}

impl InvalidationTable {
    /// Empty table; no mutation invalidates anything
    #[must_use]
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Set the targets of one mutation kind
    #[must_use]
    pub fn rule(mut self, kind: MutationKind, targets: &[Target]) -> Self {
        self.rules.insert(kind, targets.to_vec());
        self
    }

    #[must_use]
    pub fn targets(&self, kind: MutationKind) -> &[Target] {
        self.rules.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Concrete keys to invalidate
    ///
    /// `Detail` targets are skipped when the mutation has no id.
    #[must_use]
    pub fn keys_for(&self, kind: MutationKind, entity: EntityKind, id: Option<&str>) -> Vec<QueryKey> {
        self.targets(kind)
            .iter()
            .filter_map(|target| match (target, id) {
                (Target::List, _) => Some(QueryKey::list(entity)),
                (Target::Detail, Some(id)) if !id.is_empty() => Some(QueryKey::detail(entity, id)),
                (Target::Detail, _) => None,
            })
            .collect()
    }
}

impl Default for InvalidationTable {
    /// Create → list; update and delete → list + detail
    fn default() -> Self {
        Self::empty()
            .rule(MutationKind::Create, &[Target::List])
            .rule(MutationKind::Update, &[Target::List, Target::Detail])
            .rule(MutationKind::Delete, &[Target::List, Target::Detail])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules() {
        let table = InvalidationTable::default();
        assert_eq!(
            table.keys_for(MutationKind::Create, EntityKind::Category, None),
            vec![QueryKey::list(EntityKind::Category)]
        );
        assert_eq!(
            table.keys_for(MutationKind::Update, EntityKind::Category, Some("7")),
            vec![
                QueryKey::list(EntityKind::Category),
                QueryKey::detail(EntityKind::Category, "7")
            ]
        );
    }

    #[test]
    fn detail_needs_an_id() {
        let table = InvalidationTable::default();
        assert_eq!(
            table.keys_for(MutationKind::Delete, EntityKind::Order, Some("")),
            vec![QueryKey::list(EntityKind::Order)]
        );
    }

    #[test]
    fn empty_table_invalidates_nothing() {
        let table = InvalidationTable::empty();
        assert!(table
            .keys_for(MutationKind::Create, EntityKind::Brand, None)
            .is_empty());
    }
}
