//! Store Configuration
//!
//! Where the hosted table lives and the public key used to reach it.

use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

pub const DEFAULT_TABLE: &str = "todo_app";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Project base url, e.g. `https://xyz.supabase.co`
    pub url: String,
    /// Public (anon) api key
    pub anon_key: String,
    #[serde(default = "default_table")]
    pub table: String,
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

impl StoreConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            table: default_table(),
        }
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Parse and validate a JSON config document
    pub fn from_json(raw: &str) -> StoreResult<Self> {
        let config: StoreConfig = serde_json::from_str(raw)
            .map_err(|e| StoreError::Config(format!("invalid config JSON: {}", e)))?;
        config.validate()
    }

    /// Config baked in at compile time through `TODO_STORE_*` variables
    pub fn from_build_env() -> StoreResult<Self> {
        let url = option_env!("TODO_STORE_URL")
            .ok_or_else(|| StoreError::Config("TODO_STORE_URL was not set at build time".into()))?;
        let anon_key = option_env!("TODO_STORE_ANON_KEY").ok_or_else(|| {
            StoreError::Config("TODO_STORE_ANON_KEY was not set at build time".into())
        })?;
        let table = option_env!("TODO_STORE_TABLE").unwrap_or(DEFAULT_TABLE);
        StoreConfig::new(url, anon_key).with_table(table).validate()
    }

    /// Check required fields and normalize the url
    pub fn validate(mut self) -> StoreResult<Self> {
        self.url = self.url.trim().trim_end_matches('/').to_string();
        self.anon_key = self.anon_key.trim().to_string();
        self.table = self.table.trim().to_string();

        if self.url.is_empty() {
            return Err(StoreError::Config("url is empty".into()));
        }
        if !(self.url.starts_with("https://") || self.url.starts_with("http://")) {
            return Err(StoreError::Config(format!(
                "url must start with http:// or https://, got {}",
                self.url
            )));
        }
        if self.anon_key.is_empty() {
            return Err(StoreError::Config("anon_key is empty".into()));
        }
        if self.table.is_empty() {
            return Err(StoreError::Config("table is empty".into()));
        }
        Ok(self)
    }

    /// REST endpoint for the configured table
    pub fn rest_endpoint(&self) -> String {
        format!("{}/rest/v1/{}", self.url, self.table)
    }
}
