//! Festival Seed Lists
//!
//! Built-in lists for Bengali festivals. Rebuilt on every start, never
//! stored. Their ids are reserved.

use chrono::{DateTime, Utc};
use super::entity::{ItemId, ListId};
use super::item::Item;
use super::list::{ListKind, ShoppingList};

/// Id of the list created when nothing else is selected
pub const DEFAULT_LIST_ID: &str = "default";

/// Name of the default list ("My list")
pub const DEFAULT_LIST_NAME: &str = "আমার তালিকা";

struct FestivalSeed {
    id: &'static str,
    name: &'static str,
    items: &'static [(&'static str, Option<&'static str>)],
}

const FESTIVALS: &[FestivalSeed] = &[
    FestivalSeed {
        id: "durga-puja",
        name: "দুর্গা পূজার বাজার",
        items: &[
            ("মাছ", Some("protein")),
            ("মিষ্টি", Some("sweets")),
            ("ফুল", Some("decoration")),
            ("ধুপ", Some("pooja")),
            ("ফল", Some("fruits")),
        ],
    },
    FestivalSeed {
        id: "poila-boishakh",
        name: "পয়লা বৈশাখের বাজার",
        items: &[
            ("পাঁপড়", None),
            ("নারকেল", None),
            ("চিনি", None),
            ("চাল", None),
            ("মিষ্টি দই", None),
        ],
    },
];

/// Ids that seeded lists occupy
pub fn reserved_ids() -> impl Iterator<Item = &'static str> {
    FESTIVALS.iter().map(|seed| seed.id)
}

pub fn is_reserved(id: &ListId) -> bool {
    reserved_ids().any(|reserved| reserved == id.as_str())
}

/// Build the festival lists, in seed order
pub fn festival_lists(now: DateTime<Utc>) -> Vec<ShoppingList> {
    FESTIVALS
        .iter()
        .map(|seed| {
            let mut list = ShoppingList::new(ListId::new(seed.id), seed.name, ListKind::Festival, now);
            list.items = seed
                .items
                .iter()
                .enumerate()
                .map(|(index, (name, category))| {
                    let item = Item::new(ItemId::new((index + 1).to_string()), *name);
                    match category {
                        Some(category) => item.with_category(*category),
                        None => item,
                    }
                })
                .collect();
            list
        })
        .collect()
}

pub fn default_list(now: DateTime<Utc>) -> ShoppingList {
    ShoppingList::new(ListId::new(DEFAULT_LIST_ID), DEFAULT_LIST_NAME, ListKind::Custom, now)
}
