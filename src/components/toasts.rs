//! Toasts Component
//!
//! Renders notices in the current UI language.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Toasts() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let lang = ctx.language;

    view! {
        <div class="toast-area">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let message = toast.message.clone();
                    view! {
                        <div class=format!("toast toast-{}", toast.level.as_str())>
                            {move || message.text(lang.get())}
                        </div>
                    }
                }
            />
        </div>
    }
}
