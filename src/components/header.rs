//! Header Component
//!
//! App title and the UI language toggle.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let lang = ctx.language;

    view! {
        <header class="app-header">
            <h1>{move || lang.get().t("বাজারের তালিকা", "Shopping List")}</h1>
            <button
                class="language-toggle"
                title=move || lang.get().t("ভাষা পরিবর্তন করুন", "Change language")
                on:click=move |_| ctx.toggle_language()
            >
                {move || lang.get().toggled().native_name()}
            </button>
        </header>
    }
}
