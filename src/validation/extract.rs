use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRef, FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;

use super::{RequestShape, Validator};
use crate::dependency::WriteStage;
use crate::errors::ServiceError;

/// Request payload with a statically declared shape.
pub trait Shaped: DeserializeOwned {
    fn shape() -> &'static RequestShape;
}

/// JSON body that has passed shape validation.
///
/// Rejection aborts the exchange before the handler body runs, so nothing
/// downstream of the extractor ever sees an invalid payload.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: Shaped,
    Validator: FromRef<S>,
{
    type Rejection = ServiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let validator = Validator::from_ref(state);
        let body = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ServiceError::PayloadTooLarge
            } else {
                ServiceError::Validation(validator.unreadable(rejection.body_text()))
            }
        })?;

        let shape = T::shape();
        tracing::debug!(shape = shape.name(), stage = %WriteStage::Validating, "write stage");
        match validator.validate::<T>(shape, &body) {
            Ok(value) => Ok(Self(value)),
            Err(errors) => {
                tracing::info!(
                    shape = shape.name(),
                    failures = errors.failures().len(),
                    "request rejected by validation"
                );
                Err(ServiceError::Validation(errors))
            }
        }
    }
}
