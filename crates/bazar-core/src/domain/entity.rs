//! Domain Layer - Core Entity Trait
//!
//! Lists and items are addressed by string ids. The id newtypes keep a list
//! id from being passed where an item id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Core trait for all domain entities
pub trait Entity {
    /// The type of the entity's unique identifier
    type Id: Eq + std::hash::Hash + Clone;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Find an entity in a slice by id
pub fn find_by_id<'a, T: Entity>(entities: &'a [T], id: &T::Id) -> Option<&'a T> {
    entities.iter().find(|entity| entity.id() == id)
}

/// Find an entity in a slice by id, mutably
pub fn find_by_id_mut<'a, T: Entity>(entities: &'a mut [T], id: &T::Id) -> Option<&'a mut T> {
    entities.iter_mut().find(|entity| entity.id() == id)
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Identifier of a shopping list
    ListId
);

string_id!(
    /// Identifier of an item, unique within its list
    ItemId
);
