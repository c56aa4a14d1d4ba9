//! Item Row Component
//!
//! One item with toggle, inline edit and delete.

use leptos::prelude::*;

use bazar_core::{Item, ListId};

use crate::context::AppContext;

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}

#[component]
pub fn ItemRow(list_id: ListId, item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let lang = ctx.language;

    let completed = item.completed;
    let amount = item.amount();
    let (editing, set_editing) = signal(false);
    let (name, set_name) = signal(item.name.clone());
    let (category, set_category) = signal(item.category.clone().unwrap_or_default());
    let (quantity, set_quantity) = signal(item.quantity.clone().unwrap_or_default());
    let (unit, set_unit) = signal(item.unit.clone().unwrap_or_default());

    let original = StoredValue::new(item.clone());
    let list_id = StoredValue::new(list_id);
    let item_id = StoredValue::new(item.id.clone());

    let toggle = move |_| {
        ctx.dispatch(|core| core.toggle_item_completed(&list_id.get_value(), &item_id.get_value()));
    };

    let remove = move |_| {
        ctx.dispatch(|core| core.remove_item(&list_id.get_value(), &item_id.get_value()));
    };

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(new_name) = non_empty(name.get()) else { return; };
        let mut updated = original.get_value();
        updated.name = new_name;
        updated.category = non_empty(category.get());
        updated.quantity = non_empty(quantity.get());
        updated.unit = non_empty(unit.get());
        ctx.dispatch(|core| core.update_item(&list_id.get_value(), updated));
        set_editing.set(false);
    };

    view! {
        <div class=if completed { "item-row completed" } else { "item-row" }>
            <Show
                when=move || editing.get()
                fallback=move || {
                    let text = original.with_value(|item| item.name.clone());
                    let amount = amount.clone();
                    view! {
                        // Checkbox
                        <input type="checkbox" checked=completed on:change=toggle />

                        // Text
                        <span class="item-text" on:dblclick=move |_| set_editing.set(true)>{text}</span>
                        {amount.map(|amount| view! { <span class="item-amount">{amount}</span> })}

                        <button
                            class="edit-btn"
                            title=move || lang.get().t("সম্পাদনা", "Edit")
                            on:click=move |_| set_editing.set(true)
                        >
                            "✎"
                        </button>
                        <button class="delete-btn" on:click=remove>"×"</button>
                    }
                }
            >
                <form class="item-edit-form" on:submit=save>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        class="small"
                        placeholder=move || lang.get().t("পরিমাণ", "Qty")
                        prop:value=move || quantity.get()
                        on:input=move |ev| set_quantity.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        class="small"
                        placeholder=move || lang.get().t("একক", "Unit")
                        prop:value=move || unit.get()
                        on:input=move |ev| set_unit.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder=move || lang.get().t("বিভাগ", "Category")
                        prop:value=move || category.get()
                        on:input=move |ev| set_category.set(event_target_value(&ev))
                    />
                    <button type="submit" class="confirm-btn">"✓"</button>
                    <button type="button" class="cancel-btn" on:click=move |_| set_editing.set(false)>"✗"</button>
                </form>
            </Show>
        </div>
    }
}
