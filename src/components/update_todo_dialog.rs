//! Update Todo Dialog
//!
//! Edits the displayed text of one entry. The change is local to the
//! page; a reload shows the stored text again.

use leptos::prelude::*;

use crate::components::Modal;
use crate::context::AppContext;

#[component]
pub fn UpdateTodoDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let is_open = Signal::derive(move || ctx.state.with(|s| s.edit_dialog.is_open()));
    let draft = move || ctx.state.with(|s| s.edit_dialog.draft().unwrap_or_default().to_string());
    let close = Callback::new(move |_: ()| ctx.state.update(|s| s.close_edit()));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit_edit();
    };

    view! {
        <Modal open=is_open on_dismiss=close panel_class="update-todo-form-dialog">
            <form class="update-todo-input-form" on:submit=submit>
                <label for="update_todo_input">"Edit todo"</label>
                <input
                    type="text"
                    id="update_todo_input"
                    name="update_todo_input"
                    autofocus=true
                    prop:value=draft
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        ctx.state.update(|s| s.set_edit_draft(text));
                    }
                />
                <div class="dialog-buttons">
                    <button type="button" class="cancel-btn" on:click=move |_| close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="submit-update-todo-btn">"Save"</button>
                </div>
            </form>
        </Modal>
    }
}
