//! Store Connection
//!
//! Finds the store configuration for this page: an inline JSON block
//! wins over values baked in at build time.

use log::{error, info};
use todo_store::{StoreConfig, StoreResult, SupabaseRepository};

/// `<script id="todo-store-config" type="application/json">`
pub const CONFIG_ELEMENT_ID: &str = "todo-store-config";

fn page_config() -> Option<StoreResult<StoreConfig>> {
    let document = web_sys::window()?.document()?;
    let raw = document.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()?;
    if raw.trim().is_empty() {
        return None;
    }
    Some(StoreConfig::from_json(&raw))
}

/// Build the repository, or `None` (logged) when no usable config exists
pub fn connect_store() -> Option<SupabaseRepository> {
    let config = page_config().unwrap_or_else(StoreConfig::from_build_env);
    match config {
        Ok(config) => {
            info!("using store at {}", config.rest_endpoint());
            Some(SupabaseRepository::new(config))
        }
        Err(e) => {
            error!("todo store unavailable: {}", e);
            None
        }
    }
}
