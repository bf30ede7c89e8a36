//! JSON body extractor with the API's error shape.
//!
//! Axum's stock [`Json`] rejects bodies with plain-text 4xx responses
//! (422 for a missing or ill-typed field). [`AppJson`] maps every rejection
//! to an [`AppError`] so clients always get a JSON 400.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use shelter_core::error::CoreError;

use crate::error::AppError;

/// Drop-in replacement for [`Json`] in handler arguments.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(map_rejection(rejection)),
        }
    }
}

fn map_rejection(rejection: JsonRejection) -> AppError {
    match rejection {
        // Well-formed JSON that does not fit the payload shape.
        JsonRejection::JsonDataError(e) => AppError::Core(CoreError::Validation(e.body_text())),
        other => AppError::BadRequest(other.body_text()),
    }
}
