//! List View Model
//!
//! What the list currently shows. Completion and edited text live only
//! here and are thrown away on the next fetch.

use todo_store::{Item, ItemId};

/// Class names shared with the stylesheet
pub mod markup {
    pub const LIST_CONTAINER: &str = "todo-list-container";
    pub const ENTRY: &str = "todo-list-item";
    pub const TEXT: &str = "todo-text";
    pub const COMPLETED: &str = "completed";
    pub const CONTROLS: &str = "container todo-list-controls-buttons-container";
    pub const COMPLETE_BTN: &str = "complete-todo-btn";
    pub const UPDATE_BTN: &str = "update-todo-btn";
    pub const DELETE_BTN: &str = "delete-todo-btn";
}

/// One rendered row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: ItemId,
    pub text: String,
    pub completed: bool,
}

impl Entry {
    fn from_item(item: &Item) -> Self {
        Self {
            id: item.id,
            text: item.todo_text.clone(),
            completed: false,
        }
    }

    pub fn text_class(&self) -> String {
        if self.completed {
            format!("{} {}", markup::TEXT, markup::COMPLETED)
        } else {
            markup::TEXT.to_string()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    entries: Vec<Entry>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace everything on screen with `items`.
    ///
    /// Each item is prepended, so the last item listed ends up on top.
    pub fn render(&mut self, items: &[Item]) {
        self.entries = items.iter().rev().map(Entry::from_item).collect();
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn text_of(&self, id: ItemId) -> Option<&str> {
        self.get(id).map(|e| e.text.as_str())
    }

    /// Flip the completed flag; returns the new value
    pub fn toggle_completed(&mut self, id: ItemId) -> Option<bool> {
        let entry = self.entries.iter_mut().find(|e| e.id == id)?;
        entry.completed = !entry.completed;
        Some(entry.completed)
    }

    /// Replace the displayed text and clear completion
    pub fn apply_edit(&mut self, id: ItemId, text: &str) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.text = text.to_string();
                entry.completed = false;
                true
            }
            None => false,
        }
    }
}
