//! API routes module

pub mod products;

use axum::{Router, routing::get};
use axum_helpers::server::{create_router, health_router};
use domain_products::InMemoryProductRepository;

use crate::config::Config;
use crate::openapi::ApiDoc;

/// Plain-text greeting served at the root
async fn root() -> &'static str {
    "Hello World"
}

/// Create all API routes
pub fn routes(config: &Config, repository: InMemoryProductRepository) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/api/products", products::router(repository))
        .merge(health_router(config.app))
}

/// Full application: routes plus docs, API key gate and shared middleware
pub fn app(config: &Config, repository: InMemoryProductRepository) -> Router {
    create_router::<ApiDoc>(routes(config, repository), config.api_key.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum_helpers::API_KEY_HEADER;
    use core_config::{Environment, api_key::ApiKeyConfig, app_info, server::ServerConfig};
    use domain_products::{Product, ProductRepository};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const KEY: &str = "test-key";

    fn test_app() -> (Router, InMemoryProductRepository) {
        let config = Config {
            app: app_info!(),
            server: ServerConfig::default(),
            api_key: ApiKeyConfig::new(KEY),
            environment: Environment::Development,
        };
        let repository = InMemoryProductRepository::new();
        (app(&config, repository.clone()), repository)
    }

    fn request(method: &str, uri: &str, key: Option<&str>, body: Option<Value>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(key) = key {
            builder = builder.header(API_KEY_HEADER, key);
        }
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    fn widget() -> Value {
        json!({
            "name": "Widget",
            "description": "A small widget",
            "price": 9.99,
            "category": "Tools",
            "inStock": true
        })
    }

    async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
        response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec()
    }

    #[tokio::test]
    async fn test_root_greeting() {
        let (app, _) = test_app();

        let response = app
            .oneshot(request("GET", "/", Some(KEY), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(body_bytes(response).await, b"Hello World");
    }

    #[tokio::test]
    async fn test_missing_or_wrong_key_is_403() {
        let (app, _) = test_app();

        for key in [None, Some("wrong"), Some("")] {
            let response = app
                .clone()
                .oneshot(request("GET", "/api/products", key, None))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::FORBIDDEN);

            let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
            assert_eq!(body["message"], "Forbidden: Invalid API Key");
        }
    }

    #[tokio::test]
    async fn test_rejected_create_leaves_store_unchanged() {
        let (app, repository) = test_app();

        let response = app
            .oneshot(request("POST", "/api/products", None, Some(widget())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(repository.len().await, 0);
    }

    #[tokio::test]
    async fn test_health_is_gated_and_reports_name() {
        let (app, _) = test_app();

        let response = app
            .clone()
            .oneshot(request("GET", "/health", None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = app
            .oneshot(request("GET", "/health", Some(KEY), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body["name"], "products_api");
    }

    #[tokio::test]
    async fn test_products_mounted_under_prefix() {
        let (app, _) = test_app();

        let response = app
            .clone()
            .oneshot(request("POST", "/api/products", Some(KEY), Some(widget())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created: Product = serde_json::from_slice(&body_bytes(response).await).unwrap();

        let response = app
            .clone()
            .oneshot(request(
                "GET",
                &format!("/api/products/{}", created.id),
                Some(KEY),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(request("GET", "/api/products/stats", Some(KEY), None))
            .await
            .unwrap();
        let stats: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(stats, json!({ "Tools": 1 }));

        let response = app
            .oneshot(request(
                "GET",
                "/api/products/search?query=WIDG",
                Some(KEY),
                None,
            ))
            .await
            .unwrap();
        let found: Vec<Product> = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(found, vec![created]);
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (app, _) = test_app();

        let response = app
            .oneshot(request("GET", "/products", Some(KEY), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body["error"], "ROUTE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_openapi_lists_product_paths() {
        let (app, _) = test_app();

        let response = app
            .oneshot(request("GET", "/api-docs/openapi.json", Some(KEY), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let doc: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(doc["paths"]["/api/products/stats"].is_object());
        assert!(doc["paths"]["/api/products/{id}"].is_object());
        assert!(doc["paths"]["/api/products/{id}"]["delete"]["responses"]["403"].is_object());
        assert!(doc["paths"]["/api/products"]["post"]["responses"]["403"].is_object());
    }
}
