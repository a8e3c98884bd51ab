//! Repository Layer
//!
//! Data access for the remote to-do table.

mod traits;
mod supabase;
mod memory;

pub use traits::{validate_text, ItemRepository};
pub use supabase::SupabaseRepository;
pub use memory::{CallCounts, InMemoryRepository};
