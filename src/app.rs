//! Bazar List Frontend App
//!
//! Single-page layout: list selection on top, the active list in the
//! middle, input controls below.

use leptos::prelude::*;
use reactive_stores::Store;

use bazar_core::{Language, ListStore};

use crate::components::{
    FestivalListsDialog, Header, ListSelector, RecipeDialog, ShoppingListView, TextInput, Toasts, VoiceInput,
};
use crate::context::AppContext;
use crate::storage::BrowserStorage;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let language = signal(Language::Bengali);

    // Provide context to all children
    provide_context(store);
    let core = ListStore::initialize(BrowserStorage::open());
    provide_context(AppContext::new(core, store, language));

    view! {
        <div class="app-layout">
            <Header />

            <main class="main-content">
                <div class="list-toolbar">
                    <ListSelector />
                    <FestivalListsDialog />
                </div>

                <ShoppingListView />

                <section class="input-panel">
                    <TextInput />
                    <VoiceInput />
                    <RecipeDialog />
                </section>
            </main>

            <Toasts />
        </div>
    }
}
