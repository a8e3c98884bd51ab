//! In-Memory Repository
//!
//! Stand-in for the hosted table. Keeps insertion order, assigns
//! increasing ids, counts the calls that reach it and can be told to
//! fail the next call of a given kind.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use super::traits::{validate_text, ItemRepository};
use crate::error::{StoreError, StoreOperation, StoreResult};
use crate::models::{Item, ItemId};

/// Calls that reached the store (validation rejections are not counted)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub list: usize,
    pub insert: usize,
    pub delete: usize,
}

impl CallCounts {
    pub fn mutations(&self) -> usize {
        self.insert + self.delete
    }
}

#[derive(Debug, Default)]
pub struct InMemoryRepository {
    rows: RefCell<Vec<Item>>,
    next_id: Cell<ItemId>,
    calls: Cell<CallCounts>,
    fail_next: Cell<Option<StoreOperation>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(1),
            ..Default::default()
        }
    }

    /// Seed with rows; later inserts get ids above the highest seeded one
    pub fn with_items(items: Vec<Item>) -> Self {
        let next = items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        Self {
            rows: RefCell::new(items),
            next_id: Cell::new(next),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> CallCounts {
        self.calls.get()
    }

    /// Current rows, without counting as a list call
    pub fn snapshot(&self) -> Vec<Item> {
        self.rows.borrow().clone()
    }

    /// Make the next call of `operation` fail with a remote error
    pub fn fail_next(&self, operation: StoreOperation) {
        self.fail_next.set(Some(operation));
    }

    fn record(&self, operation: StoreOperation) -> StoreResult<()> {
        let mut calls = self.calls.get();
        match operation {
            StoreOperation::List => calls.list += 1,
            StoreOperation::Insert => calls.insert += 1,
            StoreOperation::Delete => calls.delete += 1,
        }
        self.calls.set(calls);

        if self.fail_next.get() == Some(operation) {
            self.fail_next.set(None);
            return Err(StoreError::remote(operation, "simulated failure"));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl ItemRepository for InMemoryRepository {
    async fn list_items(&self) -> StoreResult<Vec<Item>> {
        self.record(StoreOperation::List)?;
        Ok(self.rows.borrow().clone())
    }

    async fn insert_item(&self, text: &str) -> StoreResult<Item> {
        validate_text(text)?;
        self.record(StoreOperation::Insert)?;

        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let item = Item::new(id, text);
        self.rows.borrow_mut().push(item.clone());
        Ok(item)
    }

    async fn delete_item(&self, id: ItemId) -> StoreResult<()> {
        self.record(StoreOperation::Delete)?;
        self.rows.borrow_mut().retain(|item| item.id != id);
        Ok(())
    }
}
