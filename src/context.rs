//! Application Context
//!
//! Owns the list store for the lifetime of the page and hands it to
//! components through the Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use bazar_core::{Language, ListId, ListStore, Notice};

use crate::storage::BrowserStorage;
use crate::store::{store_push_toast, store_remove_toast, store_sync_lists, AppStore, Toast};

/// How long a toast stays on screen
const TOAST_MILLIS: u32 = 3_000;

pub type CoreStore = ListStore<BrowserStorage>;

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    core: StoredValue<CoreStore, LocalStorage>,
    store: AppStore,
    /// UI language - read
    pub language: ReadSignal<Language>,
    /// UI language - write
    set_language: WriteSignal<Language>,
    next_toast_id: StoredValue<u64>,
}

impl AppContext {
    pub fn new(
        core: CoreStore,
        store: AppStore,
        language: (ReadSignal<Language>, WriteSignal<Language>),
    ) -> Self {
        let ctx = Self {
            core: StoredValue::new_local(core),
            store,
            language: language.0,
            set_language: language.1,
            next_toast_id: StoredValue::new(0),
        };
        // surface anything initialization reported
        ctx.dispatch(|_| ());
        ctx
    }

    /// Run an operation against the list store, then refresh the render
    /// mirror and show the notices it produced
    pub fn dispatch<R>(&self, op: impl FnOnce(&mut CoreStore) -> R) -> Option<R> {
        let mut result = None;
        let mut notices = Vec::new();
        self.core.update_value(|core| {
            result = Some(op(core));
            notices = core.take_notices();
        });
        self.core.with_value(|core| {
            store_sync_lists(&self.store, core.lists().to_vec(), core.active_list_id().cloned());
        });
        for notice in notices {
            self.notify(notice);
        }
        result
    }

    /// Run an operation against the active list, or tell the user none is selected
    pub fn dispatch_active<R>(&self, op: impl FnOnce(&mut CoreStore, &ListId) -> R) -> Option<R> {
        let active = self.core.with_value(|core| core.active_list_id().cloned());
        match active {
            Some(id) => self.dispatch(|core| op(core, &id)),
            None => {
                self.notify(Notice::error(bazar_core::Message::NoActiveList));
                None
            }
        }
    }

    /// Show a toast and schedule its removal
    pub fn notify(&self, notice: Notice) {
        let id = self.next_toast_id.get_value();
        self.next_toast_id.set_value(id + 1);
        store_push_toast(&self.store, Toast { id, level: notice.level, message: notice.message });

        let store = self.store;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
            store_remove_toast(&store, id);
        });
    }

    pub fn toggle_language(&self) {
        self.set_language.update(|lang| *lang = lang.toggled());
    }
}
