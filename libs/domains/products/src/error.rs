use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, errors::field_messages};
use thiserror::Error;
use validator::ValidationErrors;

use crate::validation::FIELD_ORDER;

/// Message returned when the search term is absent
pub const MISSING_QUERY_MESSAGE: &str = "Query parameter is required";

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(ValidationErrors),

    #[error("Query parameter is required")]
    MissingQuery,

    /// Internal kind of the error taxonomy. No store operation fails today;
    /// clients always see the generic 500 for it.
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => AppError::NotFound(format!("Product {} not found", id)),
            ProductError::Validation(errors) => {
                AppError::InvalidFields(field_messages(&errors, &FIELD_ORDER))
            }
            ProductError::MissingQuery => AppError::BadRequest(MISSING_QUERY_MESSAGE.to_string()),
            ProductError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ProductDraft;
    use axum::{body::to_bytes, http::StatusCode};

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_details_in_field_order() {
        let errors = ProductDraft::default().to_input().unwrap_err();
        let response = ProductError::Validation(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        let fields: Vec<&str> = body["details"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, FIELD_ORDER.to_vec());
        assert_eq!(body["details"][0]["message"], "Name is required");
    }

    #[tokio::test]
    async fn test_not_found_message() {
        let response = ProductError::NotFound("abc".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["message"], "Product abc not found");
    }

    #[tokio::test]
    async fn test_missing_query_is_400() {
        let response = ProductError::MissingQuery.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["message"], MISSING_QUERY_MESSAGE);
    }

    #[tokio::test]
    async fn test_internal_is_generic_500() {
        let response = ProductError::Internal("lock".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
