//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is a
//! render mirror of `bazar_core::ListStore`, refreshed after every dispatch.

use leptos::prelude::*;
use reactive_stores::Store;

use bazar_core::{ListId, Message, NoticeLevel, ShoppingList};

/// A notice on screen
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: Message,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All lists, festival lists first
    pub lists: Vec<ShoppingList>,
    /// Currently selected list
    pub active_list_id: Option<ListId>,
    /// Toasts currently shown, oldest first
    pub toasts: Vec<Toast>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the mirrored lists and selection
pub fn store_sync_lists(store: &AppStore, lists: Vec<ShoppingList>, active: Option<ListId>) {
    *store.lists().write() = lists;
    *store.active_list_id().write() = active;
}

/// Add a toast to the store
pub fn store_push_toast(store: &AppStore, toast: Toast) {
    store.toasts().write().push(toast);
}

/// Remove a toast from the store by ID
pub fn store_remove_toast(store: &AppStore, toast_id: u64) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}

/// The selected list, read reactively
pub fn store_active_list(store: &AppStore) -> Option<ShoppingList> {
    let active = store.active_list_id().get()?;
    store.lists().get().into_iter().find(|list| list.id == active)
}
