//! HTTP request handlers for the company API
//!
//! Each handler maps one route onto one [`CompanyService`] call.
//!
//! [`CompanyService`]: crate::core::company::CompanyService

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::core::error::CompanyError;
use crate::core::services::Services;
use crate::core::types::*;
use crate::http::extract::{JsonBody, PathParams, QueryParams};

/// Body returned by a fully successful save
pub const SAVE_SUCCESS: &str = "Success";

/// Body returned by the connectivity probe
pub const TEST_ACK: &str = "Successfully Called Endpoint";

/// Health check handler
///
/// Returns server status and version information.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Connectivity probe, never touches the engine
pub async fn test_handler() -> &'static str {
    TEST_ACK
}

/// Ensure the company index exists
///
/// # Returns
///
/// Index name and whether this call created it
pub async fn ensure_index_handler(
    State(services): State<Arc<Services>>,
) -> Result<Json<IndexStatus>, CompanyError> {
    let status = services.company.ensure_index().await?;
    Ok(Json(status))
}

/// Bulk-save handler
///
/// Accepts a single company or an array of companies and indexes them
/// in one bulk request.
///
/// # Returns
///
/// - `200 "Success"` when every record was written
/// - `207` with a [`PartialSaveResponse`] when the engine rejected some
pub async fn save_handler(
    State(services): State<Arc<Services>>,
    JsonBody(payload): JsonBody<SavePayload>,
) -> Result<Response, CompanyError> {
    let companies = payload.into_vec();
    let summary = services.company.save(&companies).await?;
    Ok(save_response(&summary))
}

/// Index the two demonstration records
pub async fn seed_handler(
    State(services): State<Arc<Services>>,
) -> Result<Response, CompanyError> {
    let summary = services.company.seed().await?;
    Ok(save_response(&summary))
}

fn save_response(summary: &BulkSummary) -> Response {
    if summary.all_succeeded() {
        (StatusCode::OK, SAVE_SUCCESS).into_response()
    } else {
        (
            StatusCode::MULTI_STATUS,
            Json(PartialSaveResponse::from(summary)),
        )
            .into_response()
    }
}

/// Partial update handler
///
/// # Errors
///
/// - `DocumentNotFound`: no record with this key
/// - `InvalidRequest`: body sets no fields
pub async fn update_handler(
    State(services): State<Arc<Services>>,
    PathParams(id): PathParams<String>,
    JsonBody(update): JsonBody<CompanyUpdate>,
) -> Result<String, CompanyError> {
    let written = services.company.update(&id, &update).await?;
    Ok(written.id)
}

/// Read handler, returns the stored document byte for byte
pub async fn read_handler(
    State(services): State<Arc<Services>>,
    PathParams(id): PathParams<String>,
) -> Result<Response, CompanyError> {
    let source = services.company.read(&id).await?;
    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        String::from(source.get()),
    )
        .into_response())
}

/// Delete handler
///
/// A missing key is reported as `not_found` in the body, not as an error.
pub async fn delete_handler(
    State(services): State<Arc<Services>>,
    PathParams(id): PathParams<String>,
) -> Result<String, CompanyError> {
    services.company.delete(&id).await
}

pub async fn search_all_handler(
    State(services): State<Arc<Services>>,
) -> Result<Json<Vec<Company>>, CompanyError> {
    Ok(Json(services.company.search_all().await?))
}

/// Age range search, inclusive on both ends, first page only
pub async fn search_range_handler(
    State(services): State<Arc<Services>>,
    PathParams((from, to)): PathParams<(i32, i32)>,
) -> Result<Json<Vec<Company>>, CompanyError> {
    Ok(Json(services.company.search_range(from, to).await?))
}

/// Exact age + designation filter, taken from query parameters
pub async fn filter_handler(
    State(services): State<Arc<Services>>,
    QueryParams(params): QueryParams<FilterParams>,
) -> Result<Json<Vec<Company>>, CompanyError> {
    Ok(Json(
        services
            .company
            .filter(params.age, &params.designation)
            .await?,
    ))
}
