//! UI Components
//!
//! Leptos components for the list, its dialogs and the action banner.

mod modal;
mod todo_entry;
mod todo_list;
mod add_todo_dialog;
mod update_todo_dialog;
mod delete_confirm_dialog;
mod action_message;

pub use modal::Modal;
pub use todo_entry::TodoEntry;
pub use todo_list::TodoList;
pub use add_todo_dialog::AddTodoDialog;
pub use update_todo_dialog::UpdateTodoDialog;
pub use delete_confirm_dialog::DeleteConfirmDialog;
pub use action_message::ActionMessage;
