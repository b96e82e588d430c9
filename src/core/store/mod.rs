//! Document store abstraction
//!
//! [`DocumentStore`] is the narrow interface the company service
//! consumes. [`ElasticStore`] implements it over the Elasticsearch
//! REST API; tests may substitute their own implementation.

mod elastic;
pub mod wire;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use serde_json::Value;

use crate::core::error::Result;
use crate::core::query::SearchBody;
use crate::core::types::BulkSummary;

pub use elastic::ElasticStore;

/// Result indicator for a single-document write
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteResult {
    /// Document key
    pub id: String,

    /// Engine result indicator (`updated`, `noop`, `deleted`, `not_found`, ...)
    pub result: String,
}

/// A single search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub source: Value,
}

/// Operations the company service needs from the search engine.
///
/// Implementations must be `Send + Sync`; one instance is shared by
/// every in-flight request.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Check whether `index` exists
    async fn index_exists(&self, index: &str) -> Result<bool>;

    /// Create `index` with the given `mappings`.
    ///
    /// Returns `false` when another writer created the index first.
    async fn create_index(&self, index: &str, mappings: &Value) -> Result<bool>;

    /// Index every document in one round trip, keys assigned by the engine
    async fn bulk_index(&self, index: &str, documents: &[Value]) -> Result<BulkSummary>;

    /// Merge `partial` into the stored document `id`.
    ///
    /// Fails with `DocumentNotFound` when `id` does not exist.
    async fn update(&self, index: &str, id: &str, partial: &Value) -> Result<WriteResult>;

    /// Fetch the stored source of `id` verbatim, `None` if absent
    async fn get(&self, index: &str, id: &str) -> Result<Option<Box<RawValue>>>;

    /// Delete `id`; a missing key yields a `not_found` result, not an error
    async fn delete(&self, index: &str, id: &str) -> Result<WriteResult>;

    /// Run a search and return its hits in engine order
    async fn search(&self, index: &str, body: &SearchBody) -> Result<Vec<SearchHit>>;
}
