use super::shutdown::shutdown_signal;
use crate::errors::handlers::{not_found, panic_response};
use crate::middleware::{api_key::require_api_key, security::security_headers};
use axum::{Json, Router, middleware, routing::get};
use core_config::{api_key::ApiKeyConfig, server::ServerConfig};
use std::io;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as ScalarServable};

/// Path the raw OpenAPI document is served at
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Starts the Axum server with graceful shutdown.
///
/// # Errors
/// Returns an error if:
/// - The TCP listener fails to bind to the configured address
/// - The server encounters an error during operation
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on http://{}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Wraps application routes with documentation and the shared middleware stack.
///
/// Adds:
/// - OpenAPI JSON at [`OPENAPI_JSON_PATH`] and a Scalar UI at `/scalar`
/// - JSON 404 fallback, also for a known path with an unsupported method
/// - API key gate on every route, the fallback and the docs included
/// - Security headers
/// - Panic catching (plain-text 500, detail logged)
/// - Request tracing
///
/// Layers run outermost first: trace, catch-panic, security headers, API key gate.
/// `routes` must already have its state applied.
pub fn create_router<T>(routes: Router, api_key: ApiKeyConfig) -> Router
where
    T: OpenApi + 'static,
{
    let openapi = T::openapi();
    let openapi_json = openapi.clone();

    Router::new()
        .merge(routes)
        .route(
            OPENAPI_JSON_PATH,
            get(move || {
                let doc = openapi_json.clone();
                async move { Json(doc) }
            }),
        )
        .merge(Scalar::with_url("/scalar", openapi))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(middleware::from_fn_with_state(api_key, require_api_key))
        .layer(middleware::from_fn(security_headers))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
