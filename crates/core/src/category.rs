//! Category model.

use serde::{Deserialize, Serialize};
use crate::error::{optional, required, Result};
use crate::id::CategoryId;
use crate::Time;

/// A named grouping for skills. Names are unique server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name
    pub name: String,

    /// Description
    #[serde(default)]
    pub description: Option<String>,

    /// When created
    pub created_at: Time,
}

/// Payload for creating or updating a category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryDraft {
    /// Category name
    pub name: String,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CategoryDraft {
    /// Pre-fill from an existing category.
    pub fn from_category(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone(),
        }
    }

    /// Validate and normalize.
    pub fn validate(&self) -> Result<Self> {
        Ok(Self {
            name: required("name", &self.name)?,
            description: optional(self.description.as_deref()),
        })
    }
}
