//! Todo Entry Component
//!
//! One list row: text plus complete / edit / delete controls.

use leptos::prelude::*;

use crate::board::{markup, Entry};
use crate::context::AppContext;
use crate::controller::{EntryAction, EntryCommand};

/// A single row in the list
#[component]
pub fn TodoEntry(entry: Entry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = entry.id;
    let text_class = entry.text_class();

    view! {
        <li class=markup::ENTRY data-todo-id=id.to_string()>
            <span class=text_class>{entry.text}</span>
            <div class=markup::CONTROLS>
                {EntryAction::ALL.into_iter().map(move |action| view! {
                    <button
                        type="button"
                        class=action.class()
                        title=action.label()
                        aria-label=action.label()
                        on:click=move |ev| {
                            ev.stop_propagation();
                            ctx.dispatch(EntryCommand::new(action, id));
                        }
                    >
                        {action.label()}
                    </button>
                }).collect_view()}
            </div>
        </li>
    }
}
