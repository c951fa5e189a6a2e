//! Managed entity kinds
//!
//! Each kind owns its route segment, REST resource and display title.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Entity type managed by the backoffice
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Category,
    Brand,
    Product,
    Order,
}

impl EntityKind {
    /// Every kind, in navigation order
    pub const ALL: [EntityKind; 4] = [Self::Category, Self::Brand, Self::Product, Self::Order];

    /// Route segment of the list page (`/categories`)
    #[inline]
    #[must_use]
    pub fn segment(self) -> &'static str {
        match self {
            Self::Category => "categories",
            Self::Brand => "brands",
            Self::Product => "products",
            Self::Order => "orders",
        }
    }

    /// REST resource name; the API mirrors the route segments
    #[inline]
    #[must_use]
    pub fn resource(self) -> &'static str {
        self.segment()
    }

    /// Page title shown in the breadcrumb
    #[inline]
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Category => "Categorias",
            Self::Brand => "Marcas",
            Self::Product => "Produtos",
            Self::Order => "Pedidos",
        }
    }

    /// Singular noun used in panel titles
    #[inline]
    #[must_use]
    pub fn singular(self) -> &'static str {
        match self {
            Self::Category => "Categoria",
            Self::Brand => "Marca",
            Self::Product => "Produto",
            Self::Order => "Pedido",
        }
    }

    /// Look up a kind by its route segment
    #[must_use]
    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.segment() == segment)
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

/// Segment names no entity kind
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown entity: '{0}'")]
pub struct UnknownEntity(pub String);

impl FromStr for EntityKind {
    type Err = UnknownEntity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_matches('/');
        Self::from_segment(trimmed)
            .or_else(|| {
                // Accept singular forms on the command line
                Self::ALL
                    .into_iter()
                    .find(|kind| format!("{kind:?}").eq_ignore_ascii_case(trimmed))
            })
            .ok_or_else(|| UnknownEntity(s.to_string()))
    }
}
