//! Shopping List Entity
//!
//! A named, ordered collection of items tagged with a kind.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::entity::{Entity, ListId};
use super::item::Item;
use super::language::Language;

/// List kind determines deletion and persistence behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    /// Created by the user
    #[default]
    Custom,
    /// Built-in seed list, re-created on every start
    Festival,
    /// Created from a pasted recipe
    Recipe,
}

impl ListKind {
    pub const ALL: [ListKind; 3] = [ListKind::Custom, ListKind::Recipe, ListKind::Festival];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Custom => "custom",
            ListKind::Festival => "festival",
            ListKind::Recipe => "recipe",
        }
    }

    /// Festival lists can never be deleted
    pub fn is_deletable(&self) -> bool {
        match self {
            ListKind::Custom | ListKind::Recipe => true,
            ListKind::Festival => false,
        }
    }

    /// Festival lists are seeded, not stored
    pub fn is_persisted(&self) -> bool {
        match self {
            ListKind::Custom | ListKind::Recipe => true,
            ListKind::Festival => false,
        }
    }

    /// Heading for the list selector group
    pub fn label(&self, lang: Language) -> &'static str {
        match self {
            ListKind::Custom => lang.t("আমার তালিকা", "My lists"),
            ListKind::Festival => lang.t("উৎসবের তালিকা", "Festival lists"),
            ListKind::Recipe => lang.t("রেসিপির তালিকা", "Recipe lists"),
        }
    }
}

/// Incomplete items sharing a category, in first-seen order
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup<'a> {
    /// None for uncategorized items
    pub category: Option<&'a str>,
    pub items: Vec<&'a Item>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    pub id: ListId,
    pub name: String,
    #[serde(default)]
    pub items: Vec<Item>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "type", default)]
    pub kind: ListKind,
}

impl ShoppingList {
    /// Create an empty list stamped with `now`
    pub fn new(id: ListId, name: impl Into<String>, kind: ListKind, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            items: Vec::new(),
            created_at: now,
            updated_at: now,
            kind,
        }
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.has_name(name))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    /// Group incomplete items by category, preserving first-seen order
    pub fn pending_by_category(&self) -> Vec<CategoryGroup<'_>> {
        let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
        for item in self.items.iter().filter(|item| !item.completed) {
            let category = item.category.as_deref().filter(|c| !c.is_empty());
            match groups.iter_mut().find(|group| group.category == category) {
                Some(group) => group.items.push(item),
                None => groups.push(CategoryGroup { category, items: vec![item] }),
            }
        }
        groups
    }

    /// Completed items in insertion order
    pub fn completed_items(&self) -> Vec<&Item> {
        self.items.iter().filter(|item| item.completed).collect()
    }
}

impl Entity for ShoppingList {
    type Id = ListId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
