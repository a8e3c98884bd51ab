//! Interaction Controller
//!
//! Dialog state machines and the flows behind each control. State is
//! reached through `StateCell` so the same flows drive the Leptos signal
//! in the browser and a plain `RefCell` in tests.

use std::cell::RefCell;

use log::{debug, error, info};
use todo_store::{validate_text, Item, ItemId, ItemRepository, StoreResult};

use crate::board::{markup, Board};
use crate::notification::{Notice, NoticeKind, NoticeTicket};

pub const FIRST_DELETE_QUESTION: &str = "Do you want to delete the todo?";
pub const SECOND_DELETE_QUESTION: &str = "Are you absolutely sure you want to delete the todo?";

/// What a per-entry control does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAction {
    Complete,
    Edit,
    Delete,
}

impl EntryAction {
    pub const ALL: [EntryAction; 3] = [EntryAction::Complete, EntryAction::Edit, EntryAction::Delete];

    pub fn class(self) -> &'static str {
        match self {
            EntryAction::Complete => markup::COMPLETE_BTN,
            EntryAction::Edit => markup::UPDATE_BTN,
            EntryAction::Delete => markup::DELETE_BTN,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EntryAction::Complete => "Complete",
            EntryAction::Edit => "Edit",
            EntryAction::Delete => "Delete",
        }
    }
}

/// An action bound to the entry that owns the control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryCommand {
    pub action: EntryAction,
    pub id: ItemId,
}

impl EntryCommand {
    pub fn new(action: EntryAction, id: ItemId) -> Self {
        Self { action, id }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AddDialog {
    #[default]
    Closed,
    Open { draft: String },
}

impl AddDialog {
    pub fn is_open(&self) -> bool {
        matches!(self, AddDialog::Open { .. })
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            AddDialog::Open { draft } => Some(draft),
            AddDialog::Closed => None,
        }
    }
}

/// Edit form; the target id travels with the open dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditDialog {
    #[default]
    Closed,
    Open { id: ItemId, draft: String },
}

impl EditDialog {
    pub fn is_open(&self) -> bool {
        matches!(self, EditDialog::Open { .. })
    }

    pub fn target(&self) -> Option<ItemId> {
        match self {
            EditDialog::Open { id, .. } => Some(*id),
            EditDialog::Closed => None,
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            EditDialog::Open { draft, .. } => Some(draft),
            EditDialog::Closed => None,
        }
    }
}

/// Two-step delete confirmation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeletePrompt {
    #[default]
    Idle,
    Confirm(ItemId),
    ReallyConfirm(ItemId),
}

impl DeletePrompt {
    pub fn request(&mut self, id: ItemId) {
        *self = DeletePrompt::Confirm(id);
    }

    /// Answer "yes" to the current question.
    /// Returns the id once both questions were affirmed.
    pub fn affirm(&mut self) -> Option<ItemId> {
        match *self {
            DeletePrompt::Idle => None,
            DeletePrompt::Confirm(id) => {
                *self = DeletePrompt::ReallyConfirm(id);
                None
            }
            DeletePrompt::ReallyConfirm(id) => {
                *self = DeletePrompt::Idle;
                Some(id)
            }
        }
    }

    pub fn decline(&mut self) {
        *self = DeletePrompt::Idle;
    }

    pub fn question(&self) -> Option<&'static str> {
        match self {
            DeletePrompt::Idle => None,
            DeletePrompt::Confirm(_) => Some(FIRST_DELETE_QUESTION),
            DeletePrompt::ReallyConfirm(_) => Some(SECOND_DELETE_QUESTION),
        }
    }

    pub fn target(&self) -> Option<ItemId> {
        match self {
            DeletePrompt::Idle => None,
            DeletePrompt::Confirm(id) | DeletePrompt::ReallyConfirm(id) => Some(*id),
        }
    }
}

/// Everything the page shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoState {
    pub board: Board,
    pub add_dialog: AddDialog,
    pub edit_dialog: EditDialog,
    pub delete_prompt: DeletePrompt,
    pub notice: Notice,
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a control click. Returns a ticket when a notice was shown.
    pub fn dispatch(&mut self, command: EntryCommand) -> Option<NoticeTicket> {
        match command.action {
            EntryAction::Complete => self.toggle_completed(command.id),
            EntryAction::Edit => {
                self.open_edit(command.id);
                None
            }
            EntryAction::Delete => {
                if self.board.get(command.id).is_some() {
                    self.delete_prompt.request(command.id);
                }
                None
            }
        }
    }

    fn toggle_completed(&mut self, id: ItemId) -> Option<NoticeTicket> {
        match self.board.toggle_completed(id)? {
            true => Some(self.show_notice(NoticeKind::Completed)),
            false => None,
        }
    }

    pub fn open_add(&mut self) {
        if !self.add_dialog.is_open() {
            self.add_dialog = AddDialog::Open {
                draft: String::new(),
            };
        }
    }

    pub fn close_add(&mut self) {
        self.add_dialog = AddDialog::Closed;
    }

    pub fn set_add_draft(&mut self, text: String) {
        if let AddDialog::Open { draft } = &mut self.add_dialog {
            *draft = text;
        }
    }

    /// Open the edit form for `id`, pre-filled with its displayed text.
    /// A newer open replaces any pending edit.
    pub fn open_edit(&mut self, id: ItemId) {
        if let Some(text) = self.board.text_of(id) {
            self.edit_dialog = EditDialog::Open {
                id,
                draft: text.to_string(),
            };
        }
    }

    pub fn close_edit(&mut self) {
        self.edit_dialog = EditDialog::Closed;
    }

    pub fn set_edit_draft(&mut self, text: String) {
        if let EditDialog::Open { draft, .. } = &mut self.edit_dialog {
            *draft = text;
        }
    }

    /// Apply the edit locally. Nothing is sent to the store.
    pub fn submit_edit(&mut self) -> Option<NoticeTicket> {
        let (id, draft) = match &self.edit_dialog {
            EditDialog::Open { id, draft } => (*id, draft.clone()),
            EditDialog::Closed => return None,
        };
        if let Err(e) = validate_text(&draft) {
            debug!("edit of {} ignored: {}", id, e);
            return None;
        }

        self.edit_dialog = EditDialog::Closed;
        if self.board.apply_edit(id, &draft) {
            Some(self.show_notice(NoticeKind::Updated))
        } else {
            debug!("edit target {} is no longer listed", id);
            None
        }
    }

    pub fn show_notice(&mut self, kind: NoticeKind) -> NoticeTicket {
        self.notice.show(kind, kind.default_message())
    }

    pub fn expire_notice(&mut self, ticket: NoticeTicket) -> bool {
        self.notice.expire(ticket)
    }

    pub fn apply_listing(&mut self, items: &[Item]) {
        self.board.render(items);
        // an open prompt for a row that is gone has nothing left to delete
        if let Some(id) = self.delete_prompt.target() {
            if self.board.get(id).is_none() {
                self.delete_prompt.decline();
            }
        }
    }
}

/// Access to the shared page state
pub trait StateCell {
    /// Read the state without marking it changed
    fn read_state<T>(&self, f: impl FnOnce(&TodoState) -> T) -> Option<T>;

    /// Run `f` against the state; `None` when the state no longer exists
    fn update_state<T>(&self, f: impl FnOnce(&mut TodoState) -> T) -> Option<T>;
}

impl StateCell for RefCell<TodoState> {
    fn read_state<T>(&self, f: impl FnOnce(&TodoState) -> T) -> Option<T> {
        Some(f(&self.borrow()))
    }

    fn update_state<T>(&self, f: impl FnOnce(&mut TodoState) -> T) -> Option<T> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Fetch every row and redraw. On failure the list is left as it was.
pub async fn load<R, S>(repo: &R, state: &S) -> StoreResult<usize>
where
    R: ItemRepository + ?Sized,
    S: StateCell,
{
    let items = repo.list_items().await.map_err(|e| {
        error!("Error fetching todos: {}", e);
        e
    })?;
    debug!("rendering {} todos", items.len());
    state.update_state(|s| s.apply_listing(&items));
    Ok(items.len())
}

/// Insert the add-form draft, close the form and re-list.
///
/// Blank drafts are rejected before the store is called and the form
/// stays open; so does a failed insert.
pub async fn submit_add<R, S>(repo: &R, state: &S) -> StoreResult<Option<Item>>
where
    R: ItemRepository + ?Sized,
    S: StateCell,
{
    let draft = match state
        .read_state(|s| s.add_dialog.draft().map(str::to_string))
        .flatten()
    {
        Some(draft) => draft,
        None => return Ok(None),
    };
    validate_text(&draft)?;

    let created = repo.insert_item(&draft).await.map_err(|e| {
        error!("Error adding todo: {}", e);
        e
    })?;
    info!("added todo {}", created.id);
    state.update_state(|s| s.close_add());

    // the insert stands even if the re-list fails
    let _ = load(repo, state).await;
    Ok(Some(created))
}

/// Answer "yes" to the delete prompt; deletes once both steps agree.
///
/// Returns the ticket of the "deleted" notice when a row was removed.
pub async fn affirm_delete<R, S>(repo: &R, state: &S) -> StoreResult<Option<NoticeTicket>>
where
    R: ItemRepository + ?Sized,
    S: StateCell,
{
    let id = match state.update_state(|s| s.delete_prompt.affirm()).flatten() {
        Some(id) => id,
        None => return Ok(None),
    };

    repo.delete_item(id).await.map_err(|e| {
        error!("Error deleting todo {}: {}", id, e);
        e
    })?;
    info!("deleted todo {}", id);
    let ticket = state.update_state(|s| s.show_notice(NoticeKind::Deleted));

    let _ = load(repo, state).await;
    Ok(ticket)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;
    use todo_store::{CallCounts, InMemoryRepository, StoreError, StoreOperation};

    fn loaded(repo: &InMemoryRepository) -> RefCell<TodoState> {
        let state = RefCell::new(TodoState::new());
        block_on(load(repo, &state)).unwrap();
        state
    }

    fn add(repo: &InMemoryRepository, state: &RefCell<TodoState>, text: &str) -> StoreResult<Option<Item>> {
        state.borrow_mut().open_add();
        state.borrow_mut().set_add_draft(text.to_string());
        block_on(submit_add(repo, state))
    }

    #[test]
    fn test_action_classes_match_markup() {
        let classes: Vec<_> = EntryAction::ALL.iter().map(|a| a.class()).collect();
        assert_eq!(classes, vec!["complete-todo-btn", "update-todo-btn", "delete-todo-btn"]);
    }

    #[test]
    fn test_load_renders_store_rows() {
        let repo = InMemoryRepository::with_items(vec![Item::new(1, "Buy milk")]);
        let state = loaded(&repo);
        let state = state.borrow();
        assert_eq!(state.board.len(), 1);
        assert_eq!(state.board.text_of(1), Some("Buy milk"));
    }

    #[test]
    fn test_failed_load_keeps_previous_list() {
        let repo = InMemoryRepository::with_items(vec![Item::new(1, "Buy milk")]);
        let state = loaded(&repo);
        repo.fail_next(StoreOperation::List);

        let err = block_on(load(&repo, &state)).unwrap_err();
        assert!(err.is_remote());
        assert_eq!(state.borrow().board.text_of(1), Some("Buy milk"));
    }

    #[test]
    fn test_add_inserts_and_clears_form() {
        let repo = InMemoryRepository::new();
        let state = loaded(&repo);

        let created = add(&repo, &state, "Walk dog").unwrap().unwrap();

        let mut s = state.borrow_mut();
        assert_eq!(repo.calls().insert, 1);
        assert_eq!(s.board.len(), 1);
        assert_eq!(s.board.text_of(created.id), Some("Walk dog"));
        assert_eq!(s.add_dialog, AddDialog::Closed);

        // reopening starts from an empty input
        s.open_add();
        assert_eq!(s.add_dialog.draft(), Some(""));
    }

    #[test]
    fn test_blank_add_makes_no_store_call() {
        for blank in ["", "   ", "\t\n"] {
            let repo = InMemoryRepository::new();
            let state = loaded(&repo);
            let before = repo.calls();

            let err = add(&repo, &state, blank).unwrap_err();

            assert!(matches!(err, StoreError::Validation(_)));
            assert_eq!(repo.calls(), before);
            assert!(state.borrow().add_dialog.is_open());
            assert!(state.borrow().board.is_empty());
        }
    }

    #[test]
    fn test_failed_add_keeps_form_and_draft() {
        let repo = InMemoryRepository::new();
        let state = loaded(&repo);
        repo.fail_next(StoreOperation::Insert);

        assert!(add(&repo, &state, "Pay rent").unwrap_err().is_remote());

        let state = state.borrow();
        assert_eq!(state.add_dialog.draft(), Some("Pay rent"));
        assert!(state.board.is_empty());
        assert!(repo.snapshot().is_empty());
    }

    #[test]
    fn test_add_without_open_form_is_noop() {
        let repo = InMemoryRepository::new();
        let state = RefCell::new(TodoState::new());
        assert_eq!(block_on(submit_add(&repo, &state)).unwrap(), None);
        assert_eq!(repo.calls(), CallCounts::default());
    }

    /// Counts writes so read-only paths can be checked
    #[derive(Default)]
    struct CountingCell {
        state: RefCell<TodoState>,
        writes: Cell<usize>,
    }

    impl StateCell for CountingCell {
        fn read_state<T>(&self, f: impl FnOnce(&TodoState) -> T) -> Option<T> {
            self.state.read_state(f)
        }

        fn update_state<T>(&self, f: impl FnOnce(&mut TodoState) -> T) -> Option<T> {
            self.writes.set(self.writes.get() + 1);
            self.state.update_state(f)
        }
    }

    #[test]
    fn test_rejected_add_does_not_write_state() {
        let repo = InMemoryRepository::new();
        let cell = CountingCell::default();

        assert_eq!(block_on(submit_add(&repo, &cell)).unwrap(), None);
        assert_eq!(cell.writes.get(), 0);

        cell.state.borrow_mut().open_add();
        cell.state.borrow_mut().set_add_draft("   ".into());
        assert!(matches!(
            block_on(submit_add(&repo, &cell)),
            Err(StoreError::Validation(_))
        ));
        assert_eq!(cell.writes.get(), 0);
        assert_eq!(repo.calls(), CallCounts::default());
    }

    #[test]
    fn test_accepted_add_writes_state() {
        let repo = InMemoryRepository::new();
        let cell = CountingCell::default();
        cell.state.borrow_mut().open_add();
        cell.state.borrow_mut().set_add_draft("Walk dog".into());

        block_on(submit_add(&repo, &cell)).unwrap();

        // close the form, then redraw the list
        assert_eq!(cell.writes.get(), 2);
        assert_eq!(cell.state.borrow().board.text_of(1), Some("Walk dog"));
    }

    #[test]
    fn test_complete_toggle_is_local() {
        let repo = InMemoryRepository::with_items(vec![Item::new(1, "Buy milk")]);
        let state = loaded(&repo);
        let before = repo.calls();
        let mut s = state.borrow_mut();

        let ticket = s.dispatch(EntryCommand::new(EntryAction::Complete, 1));
        assert!(ticket.is_some());
        assert!(s.board.get(1).unwrap().completed);
        assert_eq!(s.notice.message(), "Todo completed!");

        // turning it back off shows nothing new
        let notice_before = s.notice.clone();
        assert_eq!(s.dispatch(EntryCommand::new(EntryAction::Complete, 1)), None);
        assert!(!s.board.get(1).unwrap().completed);
        assert_eq!(s.notice, notice_before);

        assert_eq!(repo.calls(), before);
    }

    #[test]
    fn test_edit_is_visual_only() {
        let repo = InMemoryRepository::with_items(vec![Item::new(1, "Buy milk")]);
        let state = loaded(&repo);
        let before = repo.calls();
        {
            let mut s = state.borrow_mut();
            s.dispatch(EntryCommand::new(EntryAction::Complete, 1));
            s.dispatch(EntryCommand::new(EntryAction::Edit, 1));
            assert_eq!(s.edit_dialog.draft(), Some("Buy milk"));

            s.set_edit_draft("Buy oat milk".into());
            assert!(s.submit_edit().is_some());
            assert_eq!(s.edit_dialog, EditDialog::Closed);
            assert_eq!(s.board.text_of(1), Some("Buy oat milk"));
            assert!(!s.board.get(1).unwrap().completed);
            assert_eq!(s.notice.message(), "Todo updated!");
        }
        assert_eq!(repo.calls().mutations(), before.mutations());

        // a reload shows the stored text again
        block_on(load(&repo, &state)).unwrap();
        assert_eq!(state.borrow().board.text_of(1), Some("Buy milk"));
    }

    #[test]
    fn test_second_edit_open_retargets() {
        let repo = InMemoryRepository::with_items(vec![Item::new(1, "one"), Item::new(2, "two")]);
        let state = loaded(&repo);
        let mut s = state.borrow_mut();

        s.dispatch(EntryCommand::new(EntryAction::Edit, 1));
        s.dispatch(EntryCommand::new(EntryAction::Edit, 2));
        assert_eq!(s.edit_dialog.target(), Some(2));
        assert_eq!(s.edit_dialog.draft(), Some("two"));

        s.set_edit_draft("TWO".into());
        s.submit_edit();
        assert_eq!(s.board.text_of(1), Some("one"));
        assert_eq!(s.board.text_of(2), Some("TWO"));
    }

    #[test]
    fn test_blank_edit_keeps_dialog_open() {
        let repo = InMemoryRepository::with_items(vec![Item::new(1, "one")]);
        let state = loaded(&repo);
        let mut s = state.borrow_mut();

        s.dispatch(EntryCommand::new(EntryAction::Edit, 1));
        s.set_edit_draft("  ".into());
        assert_eq!(s.submit_edit(), None);
        assert!(s.edit_dialog.is_open());
        assert_eq!(s.board.text_of(1), Some("one"));

        s.close_edit();
        assert_eq!(s.submit_edit(), None);
    }

    #[test]
    fn test_delete_needs_two_affirmations() {
        let repo = InMemoryRepository::with_items(vec![Item::new(1, "Buy milk")]);
        let state = loaded(&repo);

        state.borrow_mut().dispatch(EntryCommand::new(EntryAction::Delete, 1));
        assert_eq!(state.borrow().delete_prompt.question(), Some(FIRST_DELETE_QUESTION));

        assert_eq!(block_on(affirm_delete(&repo, &state)).unwrap(), None);
        assert_eq!(state.borrow().delete_prompt.question(), Some(SECOND_DELETE_QUESTION));
        assert_eq!(repo.calls().delete, 0);

        let ticket = block_on(affirm_delete(&repo, &state)).unwrap().unwrap();
        assert_eq!(repo.calls().delete, 1);
        assert!(repo.snapshot().is_empty());

        let mut s = state.borrow_mut();
        assert!(s.board.is_empty());
        assert_eq!(s.delete_prompt, DeletePrompt::Idle);
        assert_eq!(s.notice.message(), "Todo deleted!");
        assert!(s.notice.is_active());
        assert!(s.expire_notice(ticket));
        assert!(!s.notice.is_active());
    }

    #[test]
    fn test_declining_either_step_aborts() {
        for affirmations in 0..2 {
            let repo = InMemoryRepository::with_items(vec![Item::new(1, "Buy milk")]);
            let state = loaded(&repo);
            let before = repo.calls();

            state.borrow_mut().dispatch(EntryCommand::new(EntryAction::Delete, 1));
            for _ in 0..affirmations {
                block_on(affirm_delete(&repo, &state)).unwrap();
            }
            state.borrow_mut().delete_prompt.decline();

            assert_eq!(repo.calls(), before);
            assert_eq!(state.borrow().board.len(), 1);
            assert_eq!(block_on(affirm_delete(&repo, &state)).unwrap(), None);
        }
    }

    #[test]
    fn test_failed_delete_keeps_entry() {
        let repo = InMemoryRepository::with_items(vec![Item::new(1, "Buy milk")]);
        let state = loaded(&repo);
        repo.fail_next(StoreOperation::Delete);

        state.borrow_mut().dispatch(EntryCommand::new(EntryAction::Delete, 1));
        block_on(affirm_delete(&repo, &state)).unwrap();
        assert!(block_on(affirm_delete(&repo, &state)).unwrap_err().is_remote());

        let s = state.borrow();
        assert_eq!(s.board.text_of(1), Some("Buy milk"));
        assert!(!s.notice.is_active());
    }

    #[test]
    fn test_delete_of_unlisted_id_is_ignored() {
        let repo = InMemoryRepository::new();
        let state = loaded(&repo);
        state.borrow_mut().dispatch(EntryCommand::new(EntryAction::Delete, 5));
        assert_eq!(state.borrow().delete_prompt, DeletePrompt::Idle);
    }

    #[test]
    fn test_buy_milk_scenario() {
        let repo = InMemoryRepository::with_items(vec![Item::new(1, "Buy milk")]);
        let state = loaded(&repo);
        assert_eq!(state.borrow().board.entries()[0].text, "Buy milk");

        state.borrow_mut().dispatch(EntryCommand::new(EntryAction::Delete, 1));
        block_on(affirm_delete(&repo, &state)).unwrap();
        block_on(affirm_delete(&repo, &state)).unwrap();

        assert!(block_on(repo.list_items()).unwrap().is_empty());
        assert!(state.borrow().board.is_empty());
    }
}
