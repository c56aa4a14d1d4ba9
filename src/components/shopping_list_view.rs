//! Shopping List View Component
//!
//! The active list: pending items grouped by category, then the completed
//! section.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::context::AppContext;
use crate::store::{store_active_list, use_app_store};

#[component]
pub fn ShoppingListView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let lang = ctx.language;
    let active = Memo::new(move |_| store_active_list(&store));

    view! {
        <div class="shopping-list">
            {move || match active.get() {
                None => view! {
                    <div class="empty-state">
                        <p class="empty-title">{move || lang.get().t("কোন তালিকা নির্বাচন করা হয়নি", "No list selected")}</p>
                        <p class="empty-hint">
                            {move || lang.get().t(
                                "অনুগ্রহ করে একটি তালিকা নির্বাচন করুন বা নতুন তালিকা তৈরি করুন",
                                "Please select a list or create a new one",
                            )}
                        </p>
                    </div>
                }.into_any(),
                Some(list) => {
                    let list_id = list.id.clone();
                    let groups: Vec<_> = list
                        .pending_by_category()
                        .into_iter()
                        .map(|group| (group.category.map(str::to_string), group.items.into_iter().cloned().collect::<Vec<_>>()))
                        .collect();
                    let completed: Vec<_> = list.completed_items().into_iter().cloned().collect();
                    let completed_count = completed.len();
                    let no_items = list.is_empty();

                    view! {
                        <h2 class="list-title">{list.name.clone()}</h2>

                        {if no_items {
                            view! {
                                <div class="empty-state">
                                    <p>{move || lang.get().t("এখনও কোন আইটেম যোগ করা হয়নি", "No items yet")}</p>
                                    <p class="empty-hint">
                                        {move || lang.get().t(
                                            "মাইক বাটন ক্লিক করে কথা বলে আইটেম যোগ করুন",
                                            "Tap the mic and speak to add items",
                                        )}
                                    </p>
                                </div>
                            }.into_any()
                        } else {
                            let list_id = list_id.clone();
                            groups.into_iter().map(|(category, items)| {
                                let list_id = list_id.clone();
                                view! {
                                    <div class="category-group">
                                        {category.map(|name| view! { <h3 class="category-title">{name}</h3> })}
                                        {items.into_iter().map(|item| {
                                            view! { <ItemRow list_id=list_id.clone() item=item /> }
                                        }).collect_view()}
                                    </div>
                                }
                            }).collect_view().into_any()
                        }}

                        {(completed_count > 0).then(|| {
                            let list_id = list_id.clone();
                            view! {
                                <div class="completed-section">
                                    <h3 class="category-title">
                                        {move || lang.get().t("সম্পূর্ণ আইটেম", "Completed items")}
                                        {format!(" ({})", completed_count)}
                                    </h3>
                                    {completed.into_iter().map(|item| {
                                        view! { <ItemRow list_id=list_id.clone() item=item /> }
                                    }).collect_view()}
                                </div>
                            }
                        })}
                    }.into_any()
                }
            }}
        </div>
    }
}
