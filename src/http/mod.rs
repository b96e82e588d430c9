//! HTTP REST adapter
//!
//! Depends only on core/. Never imports from cli/.
//!
//! Exposes the company operations under `/company` via the Axum web
//! framework.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::*;
pub use router::{app, company_routes};
