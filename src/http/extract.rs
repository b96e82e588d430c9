//! Request extractors that reject with [`CompanyError`]
//!
//! axum's own `Json`, `Path` and `Query` answer malformed input with a
//! plain-text body. These wrappers turn the rejection into
//! `CompanyError::InvalidRequest` so every error the API returns has
//! the same JSON shape.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::CompanyError;

/// JSON request body
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

/// Typed path parameters
#[derive(Debug)]
pub struct PathParams<T>(pub T);

/// Typed query string
#[derive(Debug)]
pub struct QueryParams<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = CompanyError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| CompanyError::InvalidRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

#[async_trait]
impl<S, T> FromRequestParts<S> for PathParams<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = CompanyError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| CompanyError::InvalidRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

#[async_trait]
impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = CompanyError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| CompanyError::InvalidRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}
