//! Company Search - HTTP façade over an Elasticsearch index
//!
//! Exposes create, read, update, delete and three fixed query shapes
//! for a single flat "company" record. Indexing, storage and query
//! execution are delegated to the search engine.
//!
//! # Architecture
//!
//! The codebase is organized into three main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, schema, query
//!   - store (document store trait, Elasticsearch client)
//!   - company (operations), services (service container)
//!
//! - **http**: REST API adapter (depends on core)
//!   - router, handlers, middleware, error mapping
//!
//! - **cli**: Operator command-line adapter (depends on core)

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::company::CompanyService;
pub use core::config::Config;
pub use core::error::{CompanyError, Result};
pub use core::services::Services;
pub use core::store::{DocumentStore, ElasticStore};
pub use core::types::*;
