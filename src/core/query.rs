//! Search request bodies in the engine's query DSL
//!
//! Only the shapes the company endpoints need are modelled: match-all,
//! term, range and a bool query with non-scoring filter clauses.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::core::schema::{FIELD_AGE, FIELD_DESIGNATION_EXACT};

/// A query clause
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Query {
    /// Match every document
    MatchAll(MatchAllQuery),

    /// Exact, un-analysed match on a single field
    Term(BTreeMap<String, Value>),

    /// Bounded match on a single field
    Range(BTreeMap<String, RangeBounds>),

    Bool(BoolQuery),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchAllQuery {}

/// Range bounds; absent bounds are open
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeBounds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gte: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gt: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lte: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lt: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoolQuery {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub must: Vec<Query>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filter: Vec<Query>,
}

impl Query {
    pub fn match_all() -> Self {
        Query::MatchAll(MatchAllQuery {})
    }

    pub fn term(field: &str, value: impl Into<Value>) -> Self {
        Query::Term(BTreeMap::from([(field.to_string(), value.into())]))
    }

    /// Inclusive range `[from, to]` on `field`
    pub fn range_inclusive(field: &str, from: impl Into<Value>, to: impl Into<Value>) -> Self {
        Query::Range(BTreeMap::from([(
            field.to_string(),
            RangeBounds {
                gte: Some(from.into()),
                lte: Some(to.into()),
                ..Default::default()
            },
        )]))
    }

    /// Match-all with non-scoring filter clauses
    pub fn filtered(filters: Vec<Query>) -> Self {
        Query::Bool(BoolQuery {
            must: vec![Query::match_all()],
            filter: filters,
        })
    }
}

/// Body of a `_search` request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchBody {
    pub query: Query,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,

    /// Server-side timeout (e.g. `30s`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
}

impl SearchBody {
    pub fn new(query: Query) -> Self {
        Self {
            query,
            from: None,
            size: None,
            timeout: None,
        }
    }

    pub fn page(mut self, from: usize, size: usize) -> Self {
        self.from = Some(from);
        self.size = Some(size);
        self
    }

    pub fn timeout(mut self, timeout: impl Into<String>) -> Self {
        self.timeout = Some(timeout.into());
        self
    }
}

/// Every company, engine-default page size
pub fn all_companies(timeout: &str) -> SearchBody {
    SearchBody::new(Query::match_all()).timeout(timeout)
}

/// Companies whose age lies in `[from, to]`, first page only
pub fn age_between(from: i32, to: i32, page_size: usize, timeout: &str) -> SearchBody {
    SearchBody::new(Query::range_inclusive(FIELD_AGE, from, to))
        .page(0, page_size)
        .timeout(timeout)
}

/// Companies matching both age and designation exactly, first page only
pub fn age_and_designation(
    age: i32,
    designation: &str,
    page_size: usize,
    timeout: &str,
) -> SearchBody {
    SearchBody::new(Query::filtered(vec![
        Query::term(FIELD_AGE, age),
        Query::term(FIELD_DESIGNATION_EXACT, designation),
    ]))
    .page(0, page_size)
    .timeout(timeout)
}
