use crate::errors::AppError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use core_config::api_key::ApiKeyConfig;

/// Header carrying the caller's credential
pub const API_KEY_HEADER: &str = "x-api-key";

/// Message returned on every rejected request; never says which part was wrong
pub const FORBIDDEN_MESSAGE: &str = "Forbidden: Invalid API Key";

/// Shared-secret gate.
///
/// Lets the request through only when `x-api-key` equals the configured key
/// exactly. Anything else is answered with 403 before the inner service runs,
/// so rejected requests never reach body parsing or the handlers.
///
/// # Example
///
/// ```ignore
/// use axum_helpers::middleware::require_api_key;
/// use core_config::api_key::ApiKeyConfig;
///
/// let app = Router::new()
///     .route("/", get(handler))
///     .layer(axum::middleware::from_fn_with_state(
///         ApiKeyConfig::new("secret"),
///         require_api_key,
///     ));
/// ```
pub async fn require_api_key(
    State(config): State<ApiKeyConfig>,
    request: Request,
    next: Next,
) -> Response {
    let allowed = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|key| config.matches(key));

    if !allowed {
        tracing::debug!(
            method = %request.method(),
            path = %request.uri().path(),
            "Rejected request with missing or invalid API key"
        );
        return AppError::Forbidden(FORBIDDEN_MESSAGE.to_string()).into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    fn app(hits: Arc<AtomicUsize>) -> Router {
        Router::new()
            .route(
                "/",
                get(move || {
                    let hits = hits.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        "ok"
                    }
                }),
            )
            .layer(axum::middleware::from_fn_with_state(
                ApiKeyConfig::new("s3cret"),
                require_api_key,
            ))
    }

    fn get_with_key(key: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/");
        if let Some(key) = key {
            builder = builder.header(API_KEY_HEADER, key);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_matching_key_passes() {
        let hits = Arc::new(AtomicUsize::new(0));
        let response = app(hits.clone())
            .oneshot(get_with_key(Some("s3cret")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_key_is_forbidden_and_short_circuits() {
        let hits = Arc::new(AtomicUsize::new(0));
        let response = app(hits.clone()).oneshot(get_with_key(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_wrong_key_is_forbidden() {
        let hits = Arc::new(AtomicUsize::new(0));
        for key in ["wrong", "S3CRET", "s3cret ", ""] {
            let response = app(hits.clone())
                .oneshot(get_with_key(Some(key)))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::FORBIDDEN, "key {:?}", key);
        }
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }
}
