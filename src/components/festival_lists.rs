//! Festival Lists Dialog Component
//!
//! Quick selection of the built-in festival lists.

use leptos::prelude::*;

use bazar_core::ListKind;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FestivalListsDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let lang = ctx.language;
    let (open, set_open) = signal(false);

    let festivals = move || {
        store
            .lists()
            .get()
            .into_iter()
            .filter(|list| list.kind == ListKind::Festival)
            .collect::<Vec<_>>()
    };

    view! {
        <button class="festival-btn" on:click=move |_| set_open.set(true)>
            "🪔 " {move || ListKind::Festival.label(lang.get())}
        </button>

        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| set_open.set(false)>
                <div class="dialog festival-dialog" on:click=|ev| ev.stop_propagation()>
                    <h2>{move || ListKind::Festival.label(lang.get())}</h2>
                    <For
                        each=festivals
                        key=|list| list.id.clone()
                        children=move |list| {
                            let id = list.id.clone();
                            let preview = list
                                .items
                                .iter()
                                .map(|item| item.name.as_str())
                                .collect::<Vec<_>>()
                                .join(", ");
                            view! {
                                <button
                                    class="festival-card"
                                    on:click=move |_| {
                                        ctx.dispatch(|core| core.set_active_list(&id));
                                        set_open.set(false);
                                    }
                                >
                                    <span class="festival-name">{list.name.clone()}</span>
                                    <span class="festival-items">{preview}</span>
                                </button>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
