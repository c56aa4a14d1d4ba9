//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has no storage or browser dependencies.

mod entity;
mod item;
mod language;
mod list;
pub mod seed;

pub use entity::{find_by_id, find_by_id_mut, Entity, ItemId, ListId};
pub use item::{Item, NewItem};
pub use language::Language;
pub use list::{CategoryGroup, ListKind, ShoppingList};
