//! Repository Layer
//!
//! Storage abstractions and the list store built on them.

mod traits;
mod memory;
mod id;
mod list_store;

#[cfg(test)]
mod tests;

pub use traits::{Clock, KeyValueStore, SystemClock};
pub use memory::MemoryStorage;
pub use id::IdGenerator;
pub use list_store::{ListStore, StoreResult, ACTIVE_LIST_KEY, LISTS_KEY};
