//! Request logging for the company API

use axum::{
    body::Body,
    extract::MatchedPath,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{error, info, warn};

/// Route template when matched (`/company/:id`), else the raw path
fn route_of(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string())
}

/// Log every request once it has been answered
///
/// Level follows the status class: INFO for success, WARN for caller
/// mistakes, ERROR for server and engine failures. Document keys stay
/// out of the `route` field so it can be aggregated.
pub async fn log_request(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let route = route_of(&request);
    let started = Instant::now();

    let response = next.run(request).await;

    let elapsed_ms = started.elapsed().as_millis() as u64;
    let status: StatusCode = response.status();

    match status.as_u16() {
        100..=399 => info!(%method, %route, status = status.as_u16(), elapsed_ms, "Handled"),
        400..=499 => warn!(%method, %route, status = status.as_u16(), elapsed_ms, "Rejected"),
        _ => error!(%method, %route, status = status.as_u16(), elapsed_ms, "Failed"),
    }

    response
}
