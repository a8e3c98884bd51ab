//! Modal Overlay
//!
//! Backdrop + panel. Clicking the backdrop dismisses; clicks inside the
//! panel do not reach it.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_dismiss: Callback<()>,
    #[prop(into)] panel_class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let panel_class = format!("modal {}", panel_class);

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_dismiss.run(())>
                <div
                    class=panel_class.clone()
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev| ev.stop_propagation()
                >
                    {children()}
                </div>
            </div>
        </Show>
    }
}
