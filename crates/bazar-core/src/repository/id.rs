//! Id generation
//!
//! Ids are millisecond timestamps. Two ids requested within the same
//! millisecond would collide, so each id is bumped past the last one issued.

use chrono::{DateTime, Utc};

use crate::domain::ShoppingList;

#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start above every numeric id already present in `lists`
    pub fn seeded_from(lists: &[ShoppingList]) -> Self {
        let last = lists
            .iter()
            .flat_map(|list| {
                std::iter::once(list.id.as_str()).chain(list.items.iter().map(|item| item.id.as_str()))
            })
            .filter_map(|id| id.parse::<i64>().ok())
            .max()
            .unwrap_or(0);
        Self { last }
    }

    /// Next id, strictly greater than any issued before
    pub fn next(&mut self, now: DateTime<Utc>) -> String {
        let millis = now.timestamp_millis();
        self.last = match self.last.checked_add(1) {
            Some(bumped) if millis <= self.last => bumped,
            _ => millis,
        };
        self.last.to_string()
    }
}
