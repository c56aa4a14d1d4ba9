//! UI Components
//!
//! Leptos components for the list screen and its dialogs.

mod delete_confirm_button;
mod festival_lists;
mod header;
mod item_row;
mod list_selector;
mod new_list_dialog;
mod recipe_dialog;
mod shopping_list_view;
mod text_input;
mod toasts;
mod voice_input;

pub use delete_confirm_button::DeleteConfirmButton;
pub use festival_lists::FestivalListsDialog;
pub use header::Header;
pub use item_row::ItemRow;
pub use list_selector::ListSelector;
pub use new_list_dialog::NewListDialog;
pub use recipe_dialog::RecipeDialog;
pub use shopping_list_view::ShoppingListView;
pub use text_input::TextInput;
pub use toasts::Toasts;
pub use voice_input::VoiceInput;
