//! Add Todo Dialog
//!
//! Form for creating new items. Stays open when the text is blank or the
//! store rejects the insert.

use leptos::prelude::*;

use crate::components::Modal;
use crate::context::AppContext;

#[component]
pub fn AddTodoDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let is_open = Signal::derive(move || ctx.state.with(|s| s.add_dialog.is_open()));
    let draft = move || ctx.state.with(|s| s.add_dialog.draft().unwrap_or_default().to_string());
    let close = Callback::new(move |_: ()| ctx.state.update(|s| s.close_add()));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit_add();
    };

    view! {
        <Modal open=is_open on_dismiss=close panel_class="add-todo-form-dialog">
            <form class="add-todo-input-form" on:submit=submit>
                <label for="add_todo_input">"New todo"</label>
                <input
                    type="text"
                    id="add_todo_input"
                    name="add_todo_input"
                    placeholder="What needs doing?"
                    autofocus=true
                    prop:value=draft
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        ctx.state.update(|s| s.set_add_draft(text));
                    }
                />
                <div class="dialog-buttons">
                    <button type="button" class="cancel-btn" on:click=move |_| close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="submit-add-todo-btn">"Add"</button>
                </div>
            </form>
        </Modal>
    }
}
