//! Products API routes

use axum::Router;
use domain_products::{InMemoryProductRepository, ProductService, handlers};

/// Create products router over the shared store
pub fn router(repository: InMemoryProductRepository) -> Router {
    let service = ProductService::new(repository);
    handlers::router(service)
}
