//! Core data types for the company search service.
//!
//! This module defines the company record, its partial-update form,
//! and the request/response payloads shared by the HTTP and CLI
//! adapters.

use serde::{Deserialize, Serialize};

/// A company record as stored in the index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub age: i32,
    pub designation: String,
    pub experience: i32,
    pub salary: i64,
}

impl Company {
    pub fn new(
        name: impl Into<String>,
        age: i32,
        designation: impl Into<String>,
        experience: i32,
        salary: i64,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            designation: designation.into(),
            experience,
            salary,
        }
    }
}

/// The two demonstration records written by the seed operation
pub fn sample_companies() -> Vec<Company> {
    vec![
        Company::new("Name1", 24, "Designation1", 2, 120_000),
        Company::new("Name2", 27, "Designation2", 7, 180_000),
    ]
}

/// Partial company document for merge updates
///
/// Only fields that are `Some` are sent; the engine leaves the
/// others unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<i64>,
}

impl CompanyUpdate {
    /// Check if any fields are set for update
    pub fn has_updates(&self) -> bool {
        self.name.is_some()
            || self.age.is_some()
            || self.designation.is_some()
            || self.experience.is_some()
            || self.salary.is_some()
    }
}

/// Body accepted by the save endpoint: one record or a batch
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SavePayload {
    One(Company),
    Many(Vec<Company>),
}

impl SavePayload {
    pub fn into_vec(self) -> Vec<Company> {
        match self {
            SavePayload::One(company) => vec![company],
            SavePayload::Many(companies) => companies,
        }
    }
}

/// Query parameters for the filter endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterParams {
    pub age: i32,
    pub designation: String,
}

/// Outcome of a single item in a bulk request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkItemOutcome {
    /// Key assigned (or supplied) for the document
    pub id: Option<String>,

    /// Engine status code for this item
    pub status: u16,

    /// Failure reason, if the item was rejected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BulkItemOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none() && (200..300).contains(&self.status)
    }
}

/// Aggregate result of a bulk write
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulkSummary {
    pub items: Vec<BulkItemOutcome>,
}

impl BulkSummary {
    pub fn succeeded(&self) -> usize {
        self.items.iter().filter(|item| item.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.items.len() - self.succeeded()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }

    /// Keys of the documents that were written
    pub fn ids(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|item| item.is_success())
            .filter_map(|item| item.id.clone())
            .collect()
    }
}

/// Response body for a bulk write with rejected items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartialSaveResponse {
    pub status: String,
    pub succeeded: usize,
    pub failed: usize,
    pub errors: Vec<BulkItemError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkItemError {
    pub id: Option<String>,
    pub reason: String,
}

impl From<&BulkSummary> for PartialSaveResponse {
    fn from(summary: &BulkSummary) -> Self {
        Self {
            status: "partial".to_string(),
            succeeded: summary.succeeded(),
            failed: summary.failed(),
            errors: summary
                .items
                .iter()
                .filter(|item| !item.is_success())
                .map(|item| BulkItemError {
                    id: item.id.clone(),
                    reason: item
                        .error
                        .clone()
                        .unwrap_or_else(|| format!("status {}", item.status)),
                })
                .collect(),
        }
    }
}

/// Result of the ensure-index operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexStatus {
    pub index: String,
    pub created: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
