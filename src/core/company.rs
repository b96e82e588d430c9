//! Company operations
//!
//! Translates each company operation into one document store call and
//! decodes the result. Shared by the HTTP and CLI adapters.

use serde_json::value::RawValue;
use std::sync::Arc;

use crate::core::config::SearchConfig;
use crate::core::error::{CompanyError, Result};
use crate::core::query::{self, SearchBody};
use crate::core::schema::company_mappings;
use crate::core::store::{DocumentStore, WriteResult};
use crate::core::types::{sample_companies, BulkSummary, Company, CompanyUpdate, IndexStatus};

/// Company record operations over a shared document store
pub struct CompanyService {
    store: Arc<dyn DocumentStore>,
    index: String,
    search: SearchConfig,
}

impl CompanyService {
    pub fn new(store: Arc<dyn DocumentStore>, index: impl Into<String>, search: SearchConfig) -> Self {
        Self {
            store,
            index: index.into(),
            search,
        }
    }

    pub fn index(&self) -> &str {
        &self.index
    }

    /// Create the index with the company mapping unless it already exists
    pub async fn ensure_index(&self) -> Result<IndexStatus> {
        let created = if self.store.index_exists(&self.index).await? {
            tracing::debug!(index = %self.index, "Index already present");
            false
        } else {
            self.store
                .create_index(&self.index, &company_mappings())
                .await?
        };

        if created {
            tracing::info!(index = %self.index, "Response: created index");
        }

        Ok(IndexStatus {
            index: self.index.clone(),
            created,
        })
    }

    /// Index every record in a single bulk request
    ///
    /// Rejected items do not fail the call; they are logged and
    /// reported in the returned summary.
    pub async fn save(&self, companies: &[Company]) -> Result<BulkSummary> {
        if companies.is_empty() {
            return Err(CompanyError::InvalidRequest(
                "At least one company is required".to_string(),
            ));
        }

        let documents = companies
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let summary = self.store.bulk_index(&self.index, &documents).await?;

        for item in &summary.items {
            match &item.error {
                None => tracing::info!(id = ?item.id, status = item.status, "Bulk response item"),
                Some(reason) => tracing::warn!(
                    id = ?item.id,
                    status = item.status,
                    reason = %reason,
                    "Bulk item rejected"
                ),
            }
        }

        Ok(summary)
    }

    /// Write the two demonstration records
    pub async fn seed(&self) -> Result<BulkSummary> {
        self.save(&sample_companies()).await
    }

    /// Merge the supplied fields into an existing record
    pub async fn update(&self, id: &str, update: &CompanyUpdate) -> Result<WriteResult> {
        if !update.has_updates() {
            return Err(CompanyError::InvalidRequest(
                "Update must set at least one field".to_string(),
            ));
        }

        let partial = serde_json::to_value(update)?;
        let written = self.store.update(&self.index, id, &partial).await?;
        tracing::info!(id = %written.id, result = %written.result, "Response: updated");

        Ok(written)
    }

    /// Stored document for `id`, byte for byte as the engine holds it
    pub async fn read(&self, id: &str) -> Result<Box<RawValue>> {
        let source = self
            .store
            .get(&self.index, id)
            .await?
            .ok_or_else(|| CompanyError::DocumentNotFound(id.to_string()))?;
        tracing::info!(id, "Response: read");

        Ok(source)
    }

    /// Delete `id`, returning the engine's result indicator
    pub async fn delete(&self, id: &str) -> Result<String> {
        let written = self.store.delete(&self.index, id).await?;
        tracing::info!(id = %written.id, result = %written.result, "Response: deleted");

        Ok(written.result)
    }

    pub async fn search_all(&self) -> Result<Vec<Company>> {
        let body = query::all_companies(&self.search.timeout_value());
        self.run(&body).await
    }

    /// Companies with `from <= age <= to`, at most one page
    ///
    /// Bounds go to the engine as given; `from > to` matches nothing.
    pub async fn search_range(&self, from: i32, to: i32) -> Result<Vec<Company>> {
        let body = query::age_between(
            from,
            to,
            self.search.page_size,
            &self.search.timeout_value(),
        );
        self.run(&body).await
    }

    /// Companies matching `age` and `designation` exactly, at most one page
    pub async fn filter(&self, age: i32, designation: &str) -> Result<Vec<Company>> {
        let body = query::age_and_designation(
            age,
            designation,
            self.search.page_size,
            &self.search.timeout_value(),
        );
        self.run(&body).await
    }

    /// Run a search and decode every hit; one malformed hit fails the lot
    async fn run(&self, body: &SearchBody) -> Result<Vec<Company>> {
        let hits = self.store.search(&self.index, body).await?;

        hits.into_iter()
            .map(|hit| serde_json::from_value(hit.source).map_err(CompanyError::from))
            .collect()
    }
}
