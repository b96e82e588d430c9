//! HTTP status mapping for [`CompanyError`]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::core::error::CompanyError;

impl CompanyError {
    /// Convert error to appropriate HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            CompanyError::DocumentNotFound(_) | CompanyError::IndexNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            CompanyError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CompanyError::Transport(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            CompanyError::Transport(_) | CompanyError::Engine { .. } => StatusCode::BAD_GATEWAY,
            CompanyError::ConfigError(_)
            | CompanyError::IoError(_)
            | CompanyError::SerdeError(_)
            | CompanyError::TomlError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Implement IntoResponse for automatic error conversion in Axum
impl IntoResponse for CompanyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
