//! Category record

use serde::{Deserialize, Serialize};

use crate::kind::EntityKind;
use crate::record::Entity;
use crate::validation::{ValidationErrors, Validator};

/// Product category
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
}

impl Category {
    /// Unsaved category with a name
    #[inline]
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

impl Entity for Category {
    const KIND: EntityKind = EntityKind::Category;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("name", &self.name, "Informe o nome da categoria")
            .check(
                "name",
                self.name.trim().chars().count() <= 60,
                "O nome deve ter no máximo 60 caracteres",
            )
            .finish()
    }
}
