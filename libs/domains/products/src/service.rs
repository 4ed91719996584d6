//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{CategoryStats, ListQuery, Product, SearchQuery};
use crate::repository::ProductRepository;
use crate::validation::ProductDraft;

/// Product service providing business logic operations
///
/// Validates payloads before the store is touched and turns absent records
/// into [`ProductError::NotFound`].
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product
    #[instrument(skip(self, draft))]
    pub async fn create_product(&self, draft: ProductDraft) -> ProductResult<Product> {
        let input = draft.to_input().map_err(ProductError::Validation)?;
        Ok(self.repository.insert(input).await)
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        let uuid = parse_id(id)?;
        self.repository
            .get_by_id(uuid)
            .await
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Replace every mutable field of an existing product
    #[instrument(skip(self, draft))]
    pub async fn update_product(&self, id: &str, draft: ProductDraft) -> ProductResult<Product> {
        let input = draft.to_input().map_err(ProductError::Validation)?;
        let uuid = parse_id(id)?;
        self.repository
            .update(uuid, input)
            .await
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<()> {
        let uuid = parse_id(id)?;
        if !self.repository.remove(uuid).await {
            return Err(ProductError::NotFound(id.to_string()));
        }
        Ok(())
    }

    /// List products, optionally filtered by category, one page at a time
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: ListQuery) -> ProductResult<Vec<Product>> {
        let products = match query.category.as_deref() {
            Some(category) if !category.is_empty() => {
                self.repository.list_by_category(category).await
            }
            _ => self.repository.list_all().await,
        };

        let window = query.window(products.len());
        Ok(products
            .into_iter()
            .skip(window.start)
            .take(window.len())
            .collect())
    }

    /// Case-insensitive name search
    #[instrument(skip(self))]
    pub async fn search_products(&self, query: SearchQuery) -> ProductResult<Vec<Product>> {
        match query.query.as_deref() {
            Some(term) if !term.is_empty() => Ok(self.repository.search(term).await),
            _ => Err(ProductError::MissingQuery),
        }
    }

    /// Count products per category
    #[instrument(skip(self))]
    pub async fn product_stats(&self) -> ProductResult<CategoryStats> {
        Ok(self.repository.stats().await)
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

/// Ids are matched as the exact string handed out on creation, so only the
/// lowercase hyphenated form names a product. Any other spelling is NotFound.
fn parse_id(id: &str) -> ProductResult<Uuid> {
    Uuid::parse_str(id)
        .ok()
        .filter(|uuid| uuid.hyphenated().to_string() == id)
        .ok_or_else(|| ProductError::NotFound(id.to_string()))
}
