//! Store Models
//!
//! Rows of the remote to-do table.

use serde::{Deserialize, Serialize};

/// Identity column assigned by the store
pub type ItemId = i64;

/// Columns requested on select and returned on insert
pub const ITEM_COLUMNS: &str = "id,todo_text";

/// A stored to-do row (matches the remote table)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub todo_text: String,
}

impl Item {
    pub fn new(id: ItemId, todo_text: impl Into<String>) -> Self {
        Self {
            id,
            todo_text: todo_text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.todo_text
    }
}

/// Insert payload; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewItem<'a> {
    pub todo_text: &'a str,
}
