//! Recipe Dialog Component
//!
//! Paste a recipe; its ingredients are added to the active list.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn RecipeDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let lang = ctx.language;
    let (open, set_open) = signal(false);
    let (recipe_text, set_recipe_text) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = recipe_text.get();
        if text.trim().is_empty() { return; }

        ctx.dispatch_active(|core, id| core.import_recipe(id, &text));
        set_recipe_text.set(String::new());
        set_open.set(false);
    };

    view! {
        <button class="recipe-btn" on:click=move |_| set_open.set(true)>
            "📖 " {move || lang.get().t("রেসিপি থেকে উপকরণ যোগ করুন", "Add ingredients from a recipe")}
        </button>

        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| set_open.set(false)>
                <form
                    class="dialog recipe-dialog"
                    on:click=|ev| ev.stop_propagation()
                    on:submit=submit
                >
                    <h2>{move || lang.get().t("রেসিপি থেকে উপকরণ যোগ করুন", "Add ingredients from a recipe")}</h2>
                    <p class="dialog-description">
                        {move || lang.get().t(
                            "রেসিপি পেস্ট করুন বা টাইপ করুন। আমরা উপকরণগুলি আপনার তালিকায় যোগ করব।",
                            "Paste or type a recipe. We will add the ingredients to your list.",
                        )}
                    </p>
                    <textarea
                        class="recipe-text"
                        placeholder=move || lang.get().t("এখানে রেসিপি পেস্ট করুন...", "Paste the recipe here...")
                        prop:value=move || recipe_text.get()
                        on:input=move |ev| set_recipe_text.set(event_target_value(&ev))
                    ></textarea>
                    <div class="dialog-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| set_open.set(false)>
                            {move || lang.get().t("বাতিল", "Cancel")}
                        </button>
                        <button type="submit">
                            {move || lang.get().t("উপকরণ যোগ করুন", "Add ingredients")}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
