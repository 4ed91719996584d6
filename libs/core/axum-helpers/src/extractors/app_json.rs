//! JSON body extractor with structured error responses.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// JSON body extractor whose rejection goes through [`AppError`].
///
/// Field-level checks are left to the caller; this only turns a body that
/// is not JSON, is not declared as JSON, or has the wrong shape into a 400
/// response.
///
/// # Example
/// ```ignore
/// use axum::{Router, routing::post};
/// use axum_helpers::extractors::AppJson;
///
/// async fn create(AppJson(payload): AppJson<serde_json::Value>) -> String {
///     payload.to_string()
/// }
///
/// let app = Router::new().route("/", post(create));
/// ```
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(AppJson(data))
    }
}
