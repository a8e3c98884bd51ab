//! Todo List Component

use leptos::prelude::*;

use crate::board::markup;
use crate::components::TodoEntry;
use crate::context::AppContext;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let entries = move || ctx.state.with(|s| s.board.entries().to_vec());
    let is_empty = move || ctx.state.with(|s| s.board.is_empty());

    view! {
        <section class="todo-list-section">
            <Show
                when=move || !is_empty()
                fallback=|| view! { <p class="empty-list">"Nothing to do."</p> }
            >
                <ul class=markup::LIST_CONTAINER>
                    <For
                        each=entries
                        // text and completed are part of the key so local edits redraw the row
                        key=|entry| (entry.id, entry.text.clone(), entry.completed)
                        children=move |entry| view! { <TodoEntry entry=entry /> }
                    />
                </ul>
            </Show>
        </section>
    }
}
