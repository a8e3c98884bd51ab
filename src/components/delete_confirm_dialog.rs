//! Delete Confirm Dialog
//!
//! Non-blocking two-step confirmation. Both questions must be answered
//! "Yes" before the delete is sent; "No" at either step cancels.

use leptos::prelude::*;

use crate::components::Modal;
use crate::context::AppContext;

#[component]
pub fn DeleteConfirmDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let question = move || ctx.state.with(|s| s.delete_prompt.question());
    let is_open = Signal::derive(move || question().is_some());
    let decline = Callback::new(move |_: ()| ctx.decline_delete());

    view! {
        <Modal open=is_open on_dismiss=decline panel_class="delete-confirm-dialog">
            <p class="delete-confirm-text">{move || question().unwrap_or_default()}</p>
            <div class="dialog-buttons">
                <button type="button" class="cancel-btn" on:click=move |_| decline.run(())>
                    "No"
                </button>
                <button type="button" class="confirm-btn" on:click=move |_| ctx.affirm_delete()>
                    "Yes"
                </button>
            </div>
        </Modal>
    }
}
