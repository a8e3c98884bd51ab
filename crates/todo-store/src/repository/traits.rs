//! Repository Layer - Core Trait
//!
//! The three calls the client makes against the hosted table. There is
//! no update: edits never leave the page.

use async_trait::async_trait;

use crate::error::{StoreError, StoreResult};
use crate::models::{Item, ItemId};

/// Remote item store operations
///
/// Futures are `?Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait ItemRepository {
    /// All rows, in whatever order the store returns them
    async fn list_items(&self) -> StoreResult<Vec<Item>>;

    /// Insert one row and return it with its assigned id.
    /// Empty or whitespace-only text is rejected before any request.
    async fn insert_item(&self, text: &str) -> StoreResult<Item>;

    /// Delete by id. Deleting an id that is already gone succeeds.
    async fn delete_item(&self, id: ItemId) -> StoreResult<()>;
}

/// Reject text that would produce a blank entry
pub fn validate_text(text: &str) -> StoreResult<()> {
    if text.trim().is_empty() {
        return Err(StoreError::Validation("to-do text is empty".into()));
    }
    Ok(())
}
