//! List Selector Component
//!
//! Dropdown of all lists grouped by kind, with add and delete controls.

use leptos::prelude::*;

use bazar_core::{ListId, ListKind};

use crate::components::{DeleteConfirmButton, NewListDialog};
use crate::context::AppContext;
use crate::store::{store_active_list, use_app_store, AppStateStoreFields};

#[component]
pub fn ListSelector() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let lang = ctx.language;
    let (adding, set_adding) = signal(false);

    let on_change = move |ev: web_sys::Event| {
        let id = ListId::new(event_target_value(&ev));
        ctx.dispatch(|core| core.set_active_list(&id));
    };

    // Non-empty kind groups, in selector order
    let groups = move || {
        let lists = store.lists().get();
        ListKind::ALL
            .iter()
            .map(|kind| {
                let members: Vec<_> = lists.iter().filter(|list| list.kind == *kind).cloned().collect();
                (*kind, members)
            })
            .filter(|(_, members)| !members.is_empty())
            .collect::<Vec<_>>()
    };

    view! {
        <div class="list-selector">
            <select
                class="list-select"
                on:change=on_change
                prop:value=move || store.active_list_id().get().map(|id| id.to_string()).unwrap_or_default()
            >
                {move || {
                    let active = store.active_list_id().get();
                    groups().into_iter().map(|(kind, members)| {
                        let active = active.clone();
                        view! {
                            <optgroup label=kind.label(lang.get())>
                                {members.into_iter().map(|list| {
                                    let selected = active.as_ref() == Some(&list.id);
                                    view! {
                                        <option value=list.id.to_string() selected=selected>
                                            {list.name.clone()}
                                        </option>
                                    }
                                }).collect_view()}
                            </optgroup>
                        }
                    }).collect_view()
                }}
            </select>

            <button
                class="add-list-btn"
                title=move || lang.get().t("নতুন তালিকা", "New list")
                on:click=move |_| set_adding.set(true)
            >
                "+"
            </button>

            // Festival lists never offer deletion
            {move || store_active_list(&store)
                .filter(|list| list.kind.is_deletable())
                .map(|list| {
                    let id = list.id.clone();
                    view! {
                        <DeleteConfirmButton
                            button_class="delete-list-btn"
                            prompt=Signal::derive(move || lang.get().t("মুছবেন?", "Delete?").to_string())
                            on_confirm=move |_: ()| {
                                ctx.dispatch(|core| core.delete_list(&id));
                            }
                        />
                    }
                })}

            <Show when=move || adding.get()>
                <NewListDialog on_close=move |_: ()| set_adding.set(false) />
            </Show>
        </div>
    }
}
