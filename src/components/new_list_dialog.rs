//! New List Dialog Component
//!
//! Form for creating a list with a kind selector.

use leptos::prelude::*;

use bazar_core::ListKind;

use crate::context::AppContext;

/// Kinds a user may create; festival lists are built in
const CREATABLE_KINDS: &[ListKind] = &[ListKind::Custom, ListKind::Recipe];

#[component]
pub fn NewListDialog(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let lang = ctx.language;

    let (name, set_name) = signal(String::new());
    let (kind, set_kind) = signal(ListKind::Custom);

    let create_list = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = name.get();
        let text = text.trim();
        if text.is_empty() { return; }

        let selected = kind.get();
        ctx.dispatch(|core| core.add_list(text, selected));
        set_name.set(String::new());
        on_close.run(());
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <form
                class="dialog new-list-dialog"
                on:click=|ev| ev.stop_propagation()
                on:submit=create_list
            >
                <h2>{move || lang.get().t("নতুন তালিকা তৈরি করুন", "Create a new list")}</h2>
                <input
                    type="text"
                    placeholder=move || lang.get().t("তালিকার নাম", "List name")
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />

                <div class="type-selector-row">
                    {CREATABLE_KINDS.iter().map(|option| {
                        let option = *option;
                        view! {
                            <button
                                type="button"
                                class=move || if kind.get() == option { "type-btn small active" } else { "type-btn small" }
                                on:click=move |_| set_kind.set(option)
                            >
                                {move || option.label(lang.get())}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <div class="dialog-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>
                        {move || lang.get().t("বাতিল", "Cancel")}
                    </button>
                    <button type="submit" disabled=move || name.get().trim().is_empty()>
                        {move || lang.get().t("তৈরি করুন", "Create")}
                    </button>
                </div>
            </form>
        </div>
    }
}
