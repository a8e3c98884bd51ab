//! Action Message Banner

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn ActionMessage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div
            class=move || ctx.state.with(|s| s.notice.container_class())
            role="status"
            aria-live="polite"
        >
            <span class="action-message-text">
                {move || ctx.state.with(|s| s.notice.message().to_string())}
            </span>
        </div>
    }
}
