//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of transport protocols (HTTP, CLI).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Company record and shared payloads
//! - **schema**: Index mapping
//! - **query**: Search request bodies
//! - **store**: Document store trait and Elasticsearch client
//! - **company**: Company operations
//! - **services**: Unified service container

pub mod company;
pub mod config;
pub mod error;
pub mod query;
pub mod schema;
pub mod services;
pub mod store;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use error::{CompanyError, Result};
pub use services::Services;
