//! Route table for the company API

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::core::services::Services;
use crate::http::{handlers, middleware as http_middleware};

/// Routes under `/company`
///
/// - `GET /test` - Connectivity probe
/// - `PUT /index` - Ensure the index exists
/// - `POST /save` - Bulk-save one or more companies
/// - `POST /seed` - Save the demonstration records
/// - `POST /update/:id` - Partial update
/// - `GET /:id` - Raw stored document
/// - `DELETE /delete/:id` - Delete by key
/// - `GET /searchAll` - Every company
/// - `GET /search/:from/:to` - Age range, first page
/// - `GET /filter?age=&designation=` - Exact match, first page
pub fn company_routes() -> Router<Arc<Services>> {
    Router::new()
        .route("/test", get(handlers::test_handler))
        .route("/index", put(handlers::ensure_index_handler))
        .route("/save", post(handlers::save_handler))
        .route("/seed", post(handlers::seed_handler))
        .route("/update/:id", post(handlers::update_handler))
        .route("/delete/:id", delete(handlers::delete_handler))
        .route("/searchAll", get(handlers::search_all_handler))
        .route("/search/:from/:to", get(handlers::search_range_handler))
        .route("/filter", get(handlers::filter_handler))
        .route("/:id", get(handlers::read_handler))
}

/// Full application router with middleware and shared state
pub fn app(services: Arc<Services>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_handler))
        .nest("/company", company_routes())
        .layer(middleware::from_fn(http_middleware::log_request))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(services)
}
