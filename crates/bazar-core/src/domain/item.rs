//! Item Entity
//!
//! A single purchasable entry within a shopping list.

use serde::{Deserialize, Serialize};
use super::entity::{Entity, ItemId};
use super::language::Language;

/// A shopping list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier within the owning list
    pub id: ItemId,
    /// Display name
    pub name: String,
    /// Completion status
    #[serde(default)]
    pub completed: bool,
    /// Category label used for display grouping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Language the name was entered in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Item {
    /// Create an uncompleted item with no optional fields
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            completed: false,
            category: None,
            language: None,
            quantity: None,
            unit: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Case-insensitive name comparison used for duplicate detection
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Quantity and unit joined for display, e.g. "2 kg"
    pub fn amount(&self) -> Option<String> {
        match (self.quantity.as_deref(), self.unit.as_deref()) {
            (Some(q), Some(u)) => Some(format!("{} {}", q, u)),
            (Some(q), None) => Some(q.to_string()),
            (None, Some(u)) => Some(u.to_string()),
            (None, None) => None,
        }
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Input for adding an item; the store assigns id and completion state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub category: Option<String>,
    pub language: Option<Language>,
    pub quantity: Option<String>,
    pub unit: Option<String>,
}

impl NewItem {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn quantity(mut self, quantity: impl Into<String>, unit: Option<&str>) -> Self {
        self.quantity = Some(quantity.into());
        self.unit = unit.map(str::to_string);
        self
    }

    /// Materialize into an item with the given id
    pub(crate) fn into_item(self, id: ItemId, name: String) -> Item {
        Item {
            id,
            name,
            completed: false,
            category: self.category,
            language: self.language,
            quantity: self.quantity,
            unit: self.unit,
        }
    }
}
