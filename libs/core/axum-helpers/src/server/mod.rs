//! Server infrastructure module.
//!
//! This module provides:
//! - Application assembly with OpenAPI documentation and the shared middleware stack
//! - Liveness endpoint
//! - Graceful shutdown
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::{api_key::ApiKeyConfig, server::ServerConfig, app_info};
//!
//! let routes = api_routes.merge(health_router(app_info!()));
//! let app = create_router::<ApiDoc>(routes, ApiKeyConfig::new("secret"));
//! create_app(app, &ServerConfig::default()).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_app, create_router};
pub use health::{HealthResponse, health_router};
pub use shutdown::shutdown_signal;
