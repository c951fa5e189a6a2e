//! Brand record

use serde::{Deserialize, Serialize};

use crate::kind::EntityKind;
use crate::record::Entity;
use crate::validation::{ValidationErrors, Validator};

/// Product brand
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Brand {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
}

impl Brand {
    #[inline]
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

impl Entity for Brand {
    const KIND: EntityKind = EntityKind::Brand;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("name", &self.name, "Informe o nome da marca")
            .finish()
    }
}
