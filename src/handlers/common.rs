use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::ServiceError;

pub type HandlerResult = Result<Response, ServiceError>;

/// Envelope for every successful body.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(DataResponse { data })).into_response()
}

pub fn created_response<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(DataResponse { data })).into_response()
}

pub fn no_content_response() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// Numeric `:id` path segment; an unparsable id is rendered like any other
/// service error.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub i64);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for IdPath {
    type Rejection = ServiceError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<i64>::from_request_parts(parts, state)
            .await
            .map(|Path(id)| Self(id))
            .map_err(|rejection| ServiceError::InvalidPath(rejection.body_text()))
    }
}
