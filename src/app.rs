//! Todo App
//!
//! Root component: header, list, dialogs and action banner.

use leptos::prelude::*;

use crate::components::{ActionMessage, AddTodoDialog, DeleteConfirmDialog, TodoList, UpdateTodoDialog};
use crate::config::connect_store;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(connect_store());
    provide_context(ctx);

    // Load on mount and whenever a reload is requested
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        log::debug!("loading todos, trigger={}", trigger);
        ctx.load();
    });

    let item_count = move || ctx.state.with(|s| s.board.len());

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Todo List"</h1>
                <button
                    type="button"
                    id="open_add_todo_form_btn"
                    class="open-add-todo-form-btn"
                    on:click=move |_| ctx.state.update(|s| s.open_add())
                >
                    "Add Todo"
                </button>
                <button type="button" class="refresh-btn" on:click=move |_| ctx.reload()>
                    "Refresh"
                </button>
                <Show when=move || ctx.is_syncing()>
                    <span class="sync-indicator">"Syncing..."</span>
                </Show>
            </header>

            <Show when=move || !ctx.is_connected()>
                <p class="store-warning">"The todo store is not configured; see the console."</p>
            </Show>

            <main class="main-content">
                <TodoList />
                <p class="item-count">
                    {move || match item_count() {
                        1 => "1 todo".to_string(),
                        n => format!("{} todos", n),
                    }}
                </p>
            </main>

            <AddTodoDialog />
            <UpdateTodoDialog />
            <DeleteConfirmDialog />
            <ActionMessage />
        </div>
    }
}
