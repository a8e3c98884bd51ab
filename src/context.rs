//! Application Context
//!
//! Shared state provided via Leptos Context API, plus the glue that runs
//! controller flows on the UI thread.

use std::future::Future;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, warn};
use todo_store::{StoreError, SupabaseRepository};

use crate::controller::{self, EntryCommand, StateCell, TodoState};
use crate::notification::{NoticeTicket, NOTICE_DURATION_MS};

impl StateCell for RwSignal<TodoState> {
    fn read_state<T>(&self, f: impl FnOnce(&TodoState) -> T) -> Option<T> {
        self.try_with_untracked(f)
    }

    fn update_state<T>(&self, f: impl FnOnce(&mut TodoState) -> T) -> Option<T> {
        self.try_update(f)
    }
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Store client; `None` when the page has no usable config
    repo: StoredValue<Option<SupabaseRepository>, LocalStorage>,
    /// Everything on screen
    pub state: RwSignal<TodoState>,
    /// Bumped to re-fetch the list
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
    /// Store calls in flight (shown, never used to block input)
    pub pending: RwSignal<u32>,
}

impl AppContext {
    pub fn new(repo: Option<SupabaseRepository>) -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        Self {
            repo: StoredValue::new_local(repo),
            state: RwSignal::new(TodoState::new()),
            reload_trigger,
            set_reload_trigger,
            pending: RwSignal::new(0),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.repo.with_value(|repo| repo.is_some())
    }

    /// Any store call still in flight
    pub fn is_syncing(&self) -> bool {
        self.pending.get() != 0
    }

    /// Trigger a reload of items
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Run a store flow on the UI thread, counting it as pending
    fn spawn_flow<F, Fut>(&self, name: &'static str, flow: F)
    where
        F: FnOnce(SupabaseRepository) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let Some(repo) = self.repo.get_value() else {
            warn!("{} skipped: store is not configured", name);
            return;
        };
        let pending = self.pending;
        pending.update(|n| *n += 1);
        spawn_local(async move {
            flow(repo).await;
            pending.update(|n| *n = n.saturating_sub(1));
        });
    }

    pub fn load(&self) {
        let state = self.state;
        self.spawn_flow("load", move |repo| async move {
            let _ = controller::load(&repo, &state).await;
        });
    }

    pub fn submit_add(&self) {
        let state = self.state;
        self.spawn_flow("add", move |repo| async move {
            if let Err(StoreError::Validation(reason)) = controller::submit_add(&repo, &state).await {
                debug!("add ignored: {}", reason);
            }
        });
    }

    pub fn affirm_delete(&self) {
        // without a store the prompt could never advance
        if !self.is_connected() {
            warn!("delete skipped: store is not configured");
            self.decline_delete();
            return;
        }
        let ctx = *self;
        self.spawn_flow("delete", move |repo| async move {
            if let Ok(Some(ticket)) = controller::affirm_delete(&repo, &ctx.state).await {
                ctx.schedule_expiry(ticket);
            }
        });
    }

    pub fn decline_delete(&self) {
        self.state.update(|s| s.delete_prompt.decline());
    }

    /// Complete / edit / delete control clicked
    pub fn dispatch(&self, command: EntryCommand) {
        if let Some(ticket) = self.state.update_state(|s| s.dispatch(command)).flatten() {
            self.schedule_expiry(ticket);
        }
    }

    pub fn submit_edit(&self) {
        if let Some(ticket) = self.state.update_state(|s| s.submit_edit()).flatten() {
            self.schedule_expiry(ticket);
        }
    }

    /// Hide the banner after the display period unless a newer one replaced it
    fn schedule_expiry(&self, ticket: NoticeTicket) {
        let state = self.state;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_DURATION_MS).await;
            state.update_state(|s| s.expire_notice(ticket));
        });
    }
}
