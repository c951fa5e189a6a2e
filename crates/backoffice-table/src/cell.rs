//! Rendered cells

use backoffice_router::RowActionControl;
use serde::Serialize;

/// Visual tone of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Neutral,
    Info,
    Warning,
    Success,
    Danger,
}

/// Short label drawn as a pill
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: String,
    pub tone: Tone,
}

impl Badge {
    #[inline]
    #[must_use]
    pub fn new(label: impl Into<String>, tone: Tone) -> Self {
        Self {
            label: label.into(),
            tone,
        }
    }
}

/// One (row, column) cell of a table view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Badge(Badge),
    Action(RowActionControl),
    Empty,
}

impl Cell {
    #[inline]
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Visible text, if the cell has any
    ///
    /// Action cells are controls and carry no searchable text.
    #[must_use]
    pub fn visible_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Badge(badge) => Some(&badge.label),
            Self::Action(_) | Self::Empty => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn action(&self) -> Option<&RowActionControl> {
        match self {
            Self::Action(control) => Some(control),
            _ => None,
        }
    }
}
