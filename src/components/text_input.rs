//! Text Input Component
//!
//! Free-text add box. The item's language is guessed from its script.

use leptos::prelude::*;

use bazar_core::{Language, NewItem};

use crate::context::AppContext;

#[component]
pub fn TextInput() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let lang = ctx.language;
    let (item_name, set_item_name) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = item_name.get();
        let text = text.trim();
        if text.is_empty() { return; }

        let new_item = NewItem::named(text).language(Language::detect(text));
        if ctx.dispatch_active(|core, id| core.add_item(id, new_item)).is_some() {
            set_item_name.set(String::new());
        }
    };

    view! {
        <form class="new-item-form" on:submit=add_item>
            <div class="new-item-row">
                <input
                    type="text"
                    placeholder=move || lang.get().t("আইটেম নাম লিখুন...", "Enter item name...")
                    prop:value=move || item_name.get()
                    on:input=move |ev| set_item_name.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || item_name.get().trim().is_empty()>
                    "➤"
                </button>
            </div>
        </form>
    }
}
