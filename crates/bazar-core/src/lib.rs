//! Bazar List core
//!
//! Shopping lists, items, recipe ingredient extraction and the voice
//! capture state machine. Platform independent: storage is reached through
//! [`repository::KeyValueStore`].

pub mod domain;
pub mod error;
pub mod notice;
pub mod recipe;
pub mod repository;
pub mod voice;

pub use domain::{Item, ItemId, Language, ListId, ListKind, NewItem, ShoppingList};
pub use error::{CaptureError, StorageError, StoreError};
pub use notice::{Message, Notice, NoticeLevel};
pub use recipe::extract_ingredients;
pub use repository::{KeyValueStore, ListStore, MemoryStorage};
pub use voice::{CaptureSession, CaptureState, Transcript};
