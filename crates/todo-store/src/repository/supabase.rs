//! Supabase Repository
//!
//! `ItemRepository` over the PostgREST interface of a Supabase project.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client, Method, RequestBuilder, Response};

use super::traits::{validate_text, ItemRepository};
use crate::config::StoreConfig;
use crate::error::{describe_failure, StoreError, StoreOperation, StoreResult};
use crate::models::{Item, ItemId, NewItem, ITEM_COLUMNS};

/// Ask PostgREST to echo inserted rows back
const PREFER_REPRESENTATION: &str = "return=representation";

#[derive(Clone)]
pub struct SupabaseRepository {
    http: Client,
    config: Arc<StoreConfig>,
}

impl SupabaseRepository {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            http: Client::new(),
            config: Arc::new(config),
        }
    }

    fn request(&self, method: Method) -> RequestBuilder {
        self.http
            .request(method, self.config.rest_endpoint())
            .header("apikey", self.config.anon_key.as_str())
            .bearer_auth(&self.config.anon_key)
    }

    fn list_request(&self) -> RequestBuilder {
        self.request(Method::GET).query(&[("select", ITEM_COLUMNS)])
    }

    fn insert_request(&self, text: &str) -> RequestBuilder {
        self.request(Method::POST)
            .query(&[("select", ITEM_COLUMNS)])
            .header("Prefer", PREFER_REPRESENTATION)
            .json(&[NewItem { todo_text: text }])
    }

    fn delete_request(&self, id: ItemId) -> RequestBuilder {
        self.request(Method::DELETE).query(&[("id", id_filter(id))])
    }
}

/// PostgREST filter selecting a single row by id
pub(crate) fn id_filter(id: ItemId) -> String {
    format!("eq.{}", id)
}

/// The created row from an insert representation
fn first_inserted(rows: Vec<Item>) -> StoreResult<Item> {
    rows.into_iter().next().ok_or_else(|| {
        StoreError::remote(StoreOperation::Insert, "store returned no inserted row")
    })
}

fn transport(operation: StoreOperation) -> impl FnOnce(reqwest::Error) -> StoreError {
    move |e| StoreError::remote(operation, e.to_string())
}

/// Turn a non-2xx response into a `Remote` error carrying the service message
async fn check(operation: StoreOperation, response: Response) -> StoreResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(StoreError::remote(
        operation,
        describe_failure(status.as_u16(), status.canonical_reason(), &body),
    ))
}

#[async_trait(?Send)]
impl ItemRepository for SupabaseRepository {
    async fn list_items(&self) -> StoreResult<Vec<Item>> {
        let response = self
            .list_request()
            .send()
            .await
            .map_err(transport(StoreOperation::List))?;
        let items: Vec<Item> = check(StoreOperation::List, response)
            .await?
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;

        debug!("listed {} items from {}", items.len(), self.config.table);
        Ok(items)
    }

    async fn insert_item(&self, text: &str) -> StoreResult<Item> {
        validate_text(text)?;

        let response = self
            .insert_request(text)
            .send()
            .await
            .map_err(transport(StoreOperation::Insert))?;
        let rows: Vec<Item> = check(StoreOperation::Insert, response)
            .await?
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;

        let created = first_inserted(rows)?;
        info!("inserted item {}", created.id);
        Ok(created)
    }

    async fn delete_item(&self, id: ItemId) -> StoreResult<()> {
        let response = self
            .delete_request(id)
            .send()
            .await
            .map_err(transport(StoreOperation::Delete))?;
        check(StoreOperation::Delete, response).await?;

        info!("deleted item {}", id);
        Ok(())
    }
}
