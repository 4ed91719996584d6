//! # Axum Helpers
//!
//! Utilities, middleware, and helpers shared by the Axum services in this workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: App assembly, health endpoint, graceful shutdown
//! - **[`middleware`]**: API key gate, security headers
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`extractors`]**: JSON and query extractors that fail through [`AppError`]
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::{api_key::ApiKeyConfig, server::ServerConfig};
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(routes, ApiKeyConfig::new("secret"));
//!     create_app(router, &ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod server;

pub use server::{HealthResponse, create_app, create_router, health_router, shutdown_signal};

pub use middleware::{API_KEY_HEADER, require_api_key, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse, FieldMessage};

pub use extractors::{AppJson, QueryParams};
