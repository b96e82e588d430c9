//! Elasticsearch REST implementation of [`DocumentStore`]
//!
//! One [`ElasticStore`] is built at startup and shared by every
//! request. The underlying `reqwest::Client` pools connections
//! internally and never queues a request waiting for a free pooled
//! connection, so there is no connection-request timeout to set.

use async_trait::async_trait;
use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;
use serde_json::{json, Value};
use std::time::Duration;

use super::wire::{
    BulkResponse, CreateIndexResponse, ErrorResponse, GetResponse, SearchResponse, WriteResponse,
};
use super::{DocumentStore, SearchHit, WriteResult};
use crate::core::config::ElasticsearchConfig;
use crate::core::error::{CompanyError, Result};
use crate::core::query::SearchBody;
use crate::core::types::{BulkItemOutcome, BulkSummary};

const NDJSON: &str = "application/x-ndjson";

/// Client handle for an Elasticsearch node
#[derive(Debug, Clone)]
pub struct ElasticStore {
    client: reqwest::Client,
    base_url: Url,
}

impl ElasticStore {
    /// Build the shared client from connection settings
    pub fn connect(config: &ElasticsearchConfig) -> Result<Self> {
        Self::with_base_url(&config.base_url(), config.timeout())
    }

    /// Build a client for an explicit base URL
    ///
    /// Connect timeout and per-request timeout are both `timeout`.
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| CompanyError::ConfigError(format!("Invalid engine URL '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(CompanyError::ConfigError(format!(
                "Engine URL cannot be used as a base: {base_url}"
            )));
        }

        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .user_agent(concat!("company-search/", env!("CARGO_PKG_VERSION")))
            .build()?;

        tracing::debug!(url = %base_url, timeout_sec = timeout.as_secs(), "Engine client ready");

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL joined with percent-encoded path segments
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

/// Newline-delimited `_bulk` body indexing every document into `index`
pub(crate) fn bulk_body(index: &str, documents: &[Value]) -> Result<String> {
    let action = serde_json::to_string(&json!({ "index": { "_index": index } }))?;
    let mut body = String::new();
    for document in documents {
        body.push_str(&action);
        body.push('\n');
        body.push_str(&serde_json::to_string(document)?);
        body.push('\n');
    }
    Ok(body)
}

/// Decode a JSON body, reporting malformed payloads as serialization errors
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Engine error type and human-readable reason from an error body
fn parse_error(body: &str) -> (Option<String>, String) {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(parsed) => (
            parsed.error.error_type().map(str::to_string),
            parsed.error.describe(),
        ),
        Err(_) => (None, body.to_string()),
    }
}

/// Convert a non-success response into an error
async fn engine_error(index: &str, response: Response) -> CompanyError {
    let status = response.status().as_u16();
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => return CompanyError::Transport(e),
    };

    let (error_type, reason) = parse_error(&body);
    if error_type.as_deref() == Some("index_not_found_exception") {
        return CompanyError::IndexNotFound(index.to_string());
    }

    CompanyError::Engine { status, reason }
}

#[async_trait]
impl DocumentStore for ElasticStore {
    async fn index_exists(&self, index: &str) -> Result<bool> {
        let response = self.client.head(self.url(&[index])).send().await?;

        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            _ => Err(engine_error(index, response).await),
        }
    }

    async fn create_index(&self, index: &str, mappings: &Value) -> Result<bool> {
        let response = self
            .client
            .put(self.url(&[index]))
            .json(&json!({ "mappings": mappings }))
            .send()
            .await?;

        if response.status().is_success() {
            let created: CreateIndexResponse = read_json(response).await?;
            tracing::info!(index = %created.index, acknowledged = created.acknowledged, "Created index");
            return Ok(true);
        }

        let status = response.status().as_u16();
        let body = response.text().await?;
        match parse_error(&body) {
            (Some(kind), _) if kind == "resource_already_exists_exception" => {
                tracing::debug!(index, "Index created concurrently");
                Ok(false)
            }
            (_, reason) => Err(CompanyError::Engine { status, reason }),
        }
    }

    async fn bulk_index(&self, index: &str, documents: &[Value]) -> Result<BulkSummary> {
        if documents.is_empty() {
            return Ok(BulkSummary::default());
        }

        let response = self
            .client
            .post(self.url(&["_bulk"]))
            .header(reqwest::header::CONTENT_TYPE, NDJSON)
            .body(bulk_body(index, documents)?)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(engine_error(index, response).await);
        }

        let bulk: BulkResponse = read_json(response).await?;
        let items = bulk
            .items
            .into_iter()
            .filter_map(|item| item.into_values().next())
            .map(|result| BulkItemOutcome {
                id: result.id,
                status: result.status,
                error: result.error.map(|e| e.describe()),
            })
            .collect();

        Ok(BulkSummary { items })
    }

    async fn update(&self, index: &str, id: &str, partial: &Value) -> Result<WriteResult> {
        let response = self
            .client
            .post(self.url(&[index, "_update", id]))
            .json(&json!({ "doc": partial }))
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                let written: WriteResponse = read_json(response).await?;
                Ok(WriteResult {
                    id: written.id,
                    result: written.result,
                })
            }
            // document_missing_exception, or the whole index is absent
            StatusCode::NOT_FOUND => Err(CompanyError::DocumentNotFound(id.to_string())),
            _ => Err(engine_error(index, response).await),
        }
    }

    async fn get(&self, index: &str, id: &str) -> Result<Option<Box<RawValue>>> {
        let response = self.client.get(self.url(&[index, "_doc", id])).send().await?;

        match response.status() {
            StatusCode::OK => {
                let document: GetResponse = read_json(response).await?;
                Ok(document.source.filter(|_| document.found))
            }
            StatusCode::NOT_FOUND => Ok(None),
            _ => Err(engine_error(index, response).await),
        }
    }

    async fn delete(&self, index: &str, id: &str) -> Result<WriteResult> {
        let response = self
            .client
            .delete(self.url(&[index, "_doc", id]))
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                let written: WriteResponse = read_json(response).await?;
                Ok(WriteResult {
                    id: written.id,
                    result: written.result,
                })
            }
            StatusCode::NOT_FOUND => {
                // A missing document still carries a result; a missing index does not
                let body = response.bytes().await?;
                let result = serde_json::from_slice::<WriteResponse>(&body)
                    .map(|written| written.result)
                    .unwrap_or_else(|_| "not_found".to_string());
                Ok(WriteResult {
                    id: id.to_string(),
                    result,
                })
            }
            _ => Err(engine_error(index, response).await),
        }
    }

    async fn search(&self, index: &str, body: &SearchBody) -> Result<Vec<SearchHit>> {
        let response = self
            .client
            .post(self.url(&[index, "_search"]))
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(engine_error(index, response).await);
        }

        let found: SearchResponse = read_json(response).await?;
        if found.timed_out {
            tracing::warn!(index, "Search timed out, returning partial hits");
        }

        Ok(found
            .hits
            .hits
            .into_iter()
            .map(|hit| SearchHit {
                id: hit.id,
                source: hit.source,
            })
            .collect())
    }
}
