//! Response bodies returned by the Elasticsearch REST API
//!
//! Only the fields this service reads are declared; everything else
//! in the engine's responses is ignored.

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use serde_json::Value;
use std::collections::HashMap;

/// `PUT /{index}` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateIndexResponse {
    #[serde(default)]
    pub acknowledged: bool,
    pub index: String,
}

/// `GET /{index}/_doc/{id}` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub found: bool,
    /// Stored document exactly as the engine returned it
    #[serde(rename = "_source", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Box<RawValue>>,
}

/// Update and delete responses share this shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriteResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub result: String,
}

/// `POST /{index}/_search` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub timed_out: bool,
    pub hits: Hits,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hits {
    pub hits: Vec<Hit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hit {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_source", default)]
    pub source: Value,
}

/// `POST /_bulk` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkResponse {
    pub errors: bool,
    /// One single-key map per action, keyed by action name (`index`, ...)
    pub items: Vec<HashMap<String, BulkItemResult>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkItemResult {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

/// Error envelope used by every failing engine call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    #[serde(default)]
    pub status: u16,
}

/// Older engines (and some proxies) report errors as a bare string
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorBody {
    Detail(ErrorDetail),
    Message(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(rename = "type")]
    pub error_type: String,
    #[serde(default)]
    pub reason: Option<String>,
}

impl ErrorDetail {
    pub fn describe(&self) -> String {
        match &self.reason {
            Some(reason) => format!("{}: {}", self.error_type, reason),
            None => self.error_type.clone(),
        }
    }
}

impl ErrorBody {
    pub fn error_type(&self) -> Option<&str> {
        match self {
            ErrorBody::Detail(detail) => Some(&detail.error_type),
            ErrorBody::Message(_) => None,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            ErrorBody::Detail(detail) => detail.describe(),
            ErrorBody::Message(message) => message.clone(),
        }
    }
}
