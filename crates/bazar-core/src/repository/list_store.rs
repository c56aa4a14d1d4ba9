//! List Store
//!
//! Owns every shopping list and the active selection. Festival lists are
//! seeded in memory; custom and recipe lists are written to the key-value
//! store after every mutation.

use chrono::{DateTime, Utc};
use log::{debug, error, warn};

use super::id::IdGenerator;
use super::traits::{Clock, KeyValueStore, SystemClock};
use crate::domain::seed::{self, DEFAULT_LIST_ID};
use crate::domain::{
    find_by_id, find_by_id_mut, Item, ItemId, ListId, ListKind, NewItem, ShoppingList,
};
use crate::error::StoreError;
use crate::notice::{Message, Notice};
use crate::recipe::extract_ingredients;
use crate::voice::Transcript;

/// Storage key holding the serialized custom/recipe lists
pub const LISTS_KEY: &str = "shopping-lists";

/// Storage key holding the active list id
pub const ACTIVE_LIST_KEY: &str = "active-list-id";

pub type StoreResult<T> = Result<T, StoreError>;

pub struct ListStore<S: KeyValueStore> {
    storage: S,
    clock: Box<dyn Clock>,
    ids: IdGenerator,
    lists: Vec<ShoppingList>,
    active_list_id: Option<ListId>,
    notices: Vec<Notice>,
}

impl<S: KeyValueStore> ListStore<S> {
    /// Load persisted lists and merge them with the festival seeds
    pub fn initialize(storage: S) -> Self {
        Self::initialize_with_clock(storage, Box::new(SystemClock))
    }

    pub fn initialize_with_clock(storage: S, clock: Box<dyn Clock>) -> Self {
        let now = clock.now();
        let mut notices = Vec::new();
        let mut corrupt = false;

        let stored = match load_lists(&storage) {
            Ok(lists) => lists,
            Err(reason) => {
                error!("Discarding saved lists: {}", reason);
                notices.push(Notice::error(Message::PersistedDataCorrupt));
                corrupt = true;
                Vec::new()
            }
        };

        let mut lists = seed::festival_lists(now);
        for list in stored {
            if seed::is_reserved(&list.id) || list.kind == ListKind::Festival {
                warn!("Ignoring saved list {} that shadows a festival list", list.id);
                continue;
            }
            lists.push(list);
        }

        let saved_active = match storage.get(ACTIVE_LIST_KEY) {
            Ok(value) => value.map(ListId::new),
            Err(err) => {
                warn!("Could not read active list id: {}", err);
                None
            }
        };

        let ids = IdGenerator::seeded_from(&lists);
        let mut store = Self {
            storage,
            clock,
            ids,
            lists,
            active_list_id: None,
            notices,
        };

        // Unreadable data is replaced by a fresh default list
        let default_id = ListId::new(DEFAULT_LIST_ID);
        if corrupt {
            store.ensure_default_list(now);
        }

        match saved_active.filter(|id| store.list(id).is_some()) {
            Some(id) => {
                store.active_list_id = Some(id);
                if corrupt {
                    store.persist();
                }
            }
            None => {
                store.ensure_default_list(now);
                store.active_list_id = Some(default_id);
                store.persist();
            }
        }

        debug!(
            "Store initialized with {} lists, active = {:?}",
            store.lists.len(),
            store.active_list_id
        );
        store
    }

    // ========================
    // Queries
    // ========================

    pub fn lists(&self) -> &[ShoppingList] {
        &self.lists
    }

    pub fn list(&self, id: &ListId) -> Option<&ShoppingList> {
        find_by_id(&self.lists, id)
    }

    pub fn active_list_id(&self) -> Option<&ListId> {
        self.active_list_id.as_ref()
    }

    pub fn active_list(&self) -> Option<&ShoppingList> {
        self.active_list_id.as_ref().and_then(|id| self.list(id))
    }

    /// Festival lists in seed order
    pub fn festival_lists(&self) -> Vec<&ShoppingList> {
        self.lists
            .iter()
            .filter(|list| list.kind == ListKind::Festival)
            .collect()
    }

    /// Lists of one kind, in insertion order
    pub fn lists_of_kind(&self, kind: ListKind) -> Vec<&ShoppingList> {
        self.lists.iter().filter(|list| list.kind == kind).collect()
    }

    /// Drain queued notices in emission order
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    // ========================
    // List operations
    // ========================

    pub fn set_active_list(&mut self, id: &ListId) -> StoreResult<()> {
        if self.list(id).is_none() {
            return Err(StoreError::ListNotFound(id.clone()));
        }
        self.active_list_id = Some(id.clone());
        self.persist_active();
        Ok(())
    }

    /// Create a list and make it active
    pub fn add_list(&mut self, name: &str, kind: ListKind) -> ListId {
        let now = self.clock.now();
        let id = ListId::new(self.ids.next(now));
        self.lists.push(ShoppingList::new(id.clone(), name, kind, now));
        self.active_list_id = Some(id.clone());
        debug!("Added {} list {} ({})", kind.as_str(), id, name);
        self.persist();
        self.notices.push(Notice::success(Message::ListCreated {
            name: name.to_string(),
        }));
        id
    }

    /// Remove a list; festival lists are refused
    pub fn delete_list(&mut self, id: &ListId) -> StoreResult<ShoppingList> {
        let index = self
            .lists
            .iter()
            .position(|list| &list.id == id)
            .ok_or_else(|| StoreError::ListNotFound(id.clone()))?;

        if !self.lists[index].kind.is_deletable() {
            return Err(self.reject(StoreError::ProtectedList(id.clone())));
        }

        let removed = self.lists.remove(index);
        if self.active_list_id.as_ref() == Some(id) {
            self.active_list_id = self.lists.first().map(|list| list.id.clone());
        }
        debug!("Deleted list {}", id);
        self.persist();
        self.notices.push(Notice::success(Message::ListDeleted));
        Ok(removed)
    }

    // ========================
    // Item operations
    // ========================

    /// Append an item unless one with the same name (ignoring case) exists
    pub fn add_item(&mut self, list_id: &ListId, new_item: NewItem) -> StoreResult<ItemId> {
        let name = new_item.name.trim().to_string();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }

        let now = self.clock.now();
        let list = find_by_id(&self.lists, list_id)
            .ok_or_else(|| StoreError::ListNotFound(list_id.clone()))?;
        if list.contains_name(&name) {
            return Err(self.reject(StoreError::DuplicateItem(name)));
        }

        let id = ItemId::new(self.ids.next(now));
        let list = self.list_mut(list_id)?;
        list.items.push(new_item.into_item(id.clone(), name));
        list.touch(now);
        debug!("Added item {} to list {}", id, list_id);
        self.persist();
        Ok(id)
    }

    /// Replace the stored item that has `item.id`
    pub fn update_item(&mut self, list_id: &ListId, item: Item) -> StoreResult<()> {
        let now = self.clock.now();
        let list = self.list_mut(list_id)?;
        let slot = find_by_id_mut(&mut list.items, &item.id)
            .ok_or_else(|| StoreError::ItemNotFound(item.id.clone()))?;
        *slot = item;
        list.touch(now);
        self.persist();
        Ok(())
    }

    pub fn remove_item(&mut self, list_id: &ListId, item_id: &ItemId) -> StoreResult<Item> {
        let now = self.clock.now();
        let list = self.list_mut(list_id)?;
        let index = list
            .items
            .iter()
            .position(|item| &item.id == item_id)
            .ok_or_else(|| StoreError::ItemNotFound(item_id.clone()))?;
        let removed = list.items.remove(index);
        list.touch(now);
        self.persist();
        Ok(removed)
    }

    /// Flip the completion flag, returning the new value
    pub fn toggle_item_completed(&mut self, list_id: &ListId, item_id: &ItemId) -> StoreResult<bool> {
        let now = self.clock.now();
        let list = self.list_mut(list_id)?;
        let item = find_by_id_mut(&mut list.items, item_id)
            .ok_or_else(|| StoreError::ItemNotFound(item_id.clone()))?;
        item.completed = !item.completed;
        let completed = item.completed;
        list.touch(now);
        self.persist();
        Ok(completed)
    }

    /// Add every ingredient found in `text`, returning how many were inserted
    pub fn import_recipe(&mut self, list_id: &ListId, text: &str) -> StoreResult<usize> {
        if self.list(list_id).is_none() {
            return Err(StoreError::ListNotFound(list_id.clone()));
        }

        let ingredients = extract_ingredients(text);
        if ingredients.is_empty() {
            return Err(self.reject(StoreError::EmptyExtraction));
        }

        let inserted = ingredients
            .into_iter()
            .filter(|name| self.add_item(list_id, NewItem::named(name.as_str())).is_ok())
            .count();
        debug!("Imported {} ingredients into list {}", inserted, list_id);
        let notice = if inserted == 0 {
            Notice::info(Message::IngredientsAlreadyListed)
        } else {
            Notice::success(Message::IngredientsAdded { count: inserted })
        };
        self.notices.push(notice);
        Ok(inserted)
    }

    /// Add a finished voice transcript as an item
    pub fn add_transcript(&mut self, list_id: &ListId, transcript: Transcript) -> StoreResult<ItemId> {
        let name = transcript.text.trim().to_string();
        let id = self.add_item(list_id, NewItem::named(name.as_str()).language(transcript.language))?;
        self.notices.push(Notice::success(Message::ItemAdded { name }));
        Ok(id)
    }

    // ========================
    // Internals
    // ========================

    fn ensure_default_list(&mut self, now: DateTime<Utc>) {
        if self.list(&ListId::new(DEFAULT_LIST_ID)).is_none() {
            debug!("Creating default list");
            self.lists.push(seed::default_list(now));
        }
    }

    fn list_mut(&mut self, id: &ListId) -> StoreResult<&mut ShoppingList> {
        find_by_id_mut(&mut self.lists, id).ok_or_else(|| StoreError::ListNotFound(id.clone()))
    }

    /// Queue the rejection's notice and hand the error back
    fn reject(&mut self, err: StoreError) -> StoreError {
        warn!("Rejected: {}", err);
        if let Some(notice) = err.notice() {
            self.notices.push(notice);
        }
        err
    }

    fn persist(&mut self) {
        self.persist_lists();
        self.persist_active();
    }

    fn persist_lists(&mut self) {
        let stored: Vec<&ShoppingList> = self
            .lists
            .iter()
            .filter(|list| list.kind.is_persisted())
            .collect();
        let result = serde_json::to_string(&stored)
            .map_err(Into::into)
            .and_then(|json| self.storage.set(LISTS_KEY, &json));
        if let Err(err) = result {
            error!("Failed to save lists: {}", err);
            self.notices.push(Notice::error(Message::PersistFailed));
        }
    }

    fn persist_active(&mut self) {
        let result = match &self.active_list_id {
            Some(id) => self.storage.set(ACTIVE_LIST_KEY, id.as_str()),
            None => self.storage.remove(ACTIVE_LIST_KEY),
        };
        if let Err(err) = result {
            error!("Failed to save active list: {}", err);
            self.notices.push(Notice::error(Message::PersistFailed));
        }
    }
}

/// Read the saved lists; a missing key is an empty set
fn load_lists<S: KeyValueStore>(storage: &S) -> Result<Vec<ShoppingList>, String> {
    match storage.get(LISTS_KEY).map_err(|e| e.to_string())? {
        Some(json) => serde_json::from_str(&json).map_err(|e| e.to_string()),
        None => Ok(Vec::new()),
    }
}
