//! Todo Store
//!
//! Client for the hosted to-do table. The table itself (storage,
//! validation, id assignment) belongs to the remote service; this crate
//! only issues list/insert/delete calls against it.

pub mod config;
pub mod error;
pub mod models;
pub mod repository;

pub use config::StoreConfig;
pub use error::{StoreError, StoreOperation, StoreResult};
pub use models::{Item, ItemId, NewItem, ITEM_COLUMNS};
pub use repository::{validate_text, CallCounts, InMemoryRepository, ItemRepository, SupabaseRepository};
