use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no document '{id}' in collection '{collection}'")]
    NotFound { collection: String, id: String },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Capability interface over the document store: named collections of
/// id-keyed JSON documents with field-equality queries.
///
/// Per-document operations are assumed atomic at single-record granularity;
/// no multi-record transaction is ever required here.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError>;

    /// Create or fully replace the document at `id`.
    async fn set(&self, collection: &str, id: &str, doc: Value) -> Result<(), StoreError>;

    /// Fully replace the document at `id`. Fails if it does not exist.
    async fn update(&self, collection: &str, id: &str, doc: Value) -> Result<(), StoreError>;

    /// Remove the document at `id`. Removing an absent id is not an error.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;

    /// All documents whose `field` equals `value`, as (id, document) pairs.
    async fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<(String, Value)>, StoreError>;

    async fn get_all(&self, collection: &str) -> Result<Vec<(String, Value)>, StoreError>;
}
