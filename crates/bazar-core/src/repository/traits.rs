//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces the store depends on.
//! Implementations can use browser localStorage, in-memory maps, etc.

use chrono::{DateTime, Utc};
use crate::error::StorageError;

/// String key-value storage that survives reloads
///
/// Synchronous: the store must reflect the latest state before an
/// operation returns.
pub trait KeyValueStore {
    /// Read a value, `None` if the key was never written
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a key; deleting a missing key is not an error
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Source of timestamps for ids and list stamps
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
