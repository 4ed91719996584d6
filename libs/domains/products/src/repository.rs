use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{CategoryStats, Product, ProductInput};

/// Repository trait for Product persistence
///
/// Records are kept in insertion order; every listing operation returns
/// them in that order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Store a new product under a fresh identifier
    async fn insert(&self, input: ProductInput) -> Product;

    /// Get a product by ID
    async fn get_by_id(&self, id: Uuid) -> Option<Product>;

    /// Overwrite the mutable fields of an existing product
    async fn update(&self, id: Uuid, input: ProductInput) -> Option<Product>;

    /// Delete a product by ID, returning whether it existed
    async fn remove(&self, id: Uuid) -> bool;

    /// All products
    async fn list_all(&self) -> Vec<Product>;

    /// Products whose category equals `category` exactly
    async fn list_by_category(&self, category: &str) -> Vec<Product>;

    /// Products whose name contains `term`, ignoring case
    async fn search(&self, term: &str) -> Vec<Product>;

    /// Number of products per category
    async fn stats(&self) -> CategoryStats;

    /// Number of stored products
    async fn len(&self) -> usize;
}

/// Process-memory product store. Cloning shares the same records.
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, input: ProductInput) -> Product {
        let product = Product::new(input);
        self.products.write().await.push(product.clone());
        tracing::info!(product_id = %product.id, "Product created");
        product
    }

    async fn get_by_id(&self, id: Uuid) -> Option<Product> {
        self.products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    async fn update(&self, id: Uuid, input: ProductInput) -> Option<Product> {
        let mut products = self.products.write().await;
        let product = products.iter_mut().find(|p| p.id == id)?;
        product.apply_update(input);
        tracing::info!(product_id = %id, "Product updated");
        Some(product.clone())
    }

    async fn remove(&self, id: Uuid) -> bool {
        let mut products = self.products.write().await;
        match products.iter().position(|p| p.id == id) {
            Some(index) => {
                products.remove(index);
                tracing::info!(product_id = %id, "Product deleted");
                true
            }
            None => false,
        }
    }

    async fn list_all(&self) -> Vec<Product> {
        self.products.read().await.clone()
    }

    async fn list_by_category(&self, category: &str) -> Vec<Product> {
        self.products
            .read()
            .await
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect()
    }

    async fn search(&self, term: &str) -> Vec<Product> {
        let needle = term.to_lowercase();
        self.products
            .read()
            .await
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    async fn stats(&self) -> CategoryStats {
        let mut stats = CategoryStats::new();
        for product in self.products.read().await.iter() {
            *stats.entry(product.category.clone()).or_default() += 1;
        }
        stats
    }

    async fn len(&self) -> usize {
        self.products.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, category: &str) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            description: format!("{} description", name),
            price: 10.0,
            category: category.to_string(),
            in_stock: true,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_distinct_ids() {
        let repo = InMemoryProductRepository::new();
        let a = repo.insert(input("A", "X")).await;
        let b = repo.insert(input("A", "X")).await;
        assert_ne!(a.id, b.id);
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_get_returns_stored_record() {
        let repo = InMemoryProductRepository::new();
        let created = repo.insert(input("Lamp", "Home")).await;
        assert_eq!(repo.get_by_id(created.id).await, Some(created));
        assert_eq!(repo.get_by_id(Uuid::new_v4()).await, None);
    }

    #[tokio::test]
    async fn test_update_in_place() {
        let repo = InMemoryProductRepository::new();
        let first = repo.insert(input("First", "X")).await;
        let second = repo.insert(input("Second", "X")).await;

        let updated = repo.update(first.id, input("Renamed", "Y")).await.unwrap();
        assert_eq!(updated.id, first.id);
        assert_eq!(updated.category, "Y");

        let names: Vec<_> = repo.list_all().await.into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Renamed", "Second"]);
        assert!(repo.update(Uuid::new_v4(), input("Z", "Z")).await.is_none());
        assert_eq!(repo.get_by_id(second.id).await.unwrap().name, "Second");
    }

    #[tokio::test]
    async fn test_remove_twice() {
        let repo = InMemoryProductRepository::new();
        let product = repo.insert(input("Gone", "X")).await;
        assert!(repo.remove(product.id).await);
        assert!(!repo.remove(product.id).await);
        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn test_category_filter_keeps_order() {
        let repo = InMemoryProductRepository::new();
        repo.insert(input("b1", "Books")).await;
        repo.insert(input("t1", "Tools")).await;
        repo.insert(input("b2", "Books")).await;

        let names: Vec<_> = repo
            .list_by_category("Books")
            .await
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["b1", "b2"]);
        assert!(repo.list_by_category("books").await.is_empty());
    }

    #[tokio::test]
    async fn test_search_ignores_case() {
        let repo = InMemoryProductRepository::new();
        repo.insert(input("Widget", "X")).await;
        repo.insert(input("Gadget", "X")).await;

        let found = repo.search("WID").await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Widget");
        assert_eq!(repo.search("dget").await.len(), 2);
    }

    #[tokio::test]
    async fn test_stats_counts_per_category() {
        let repo = InMemoryProductRepository::new();
        assert!(repo.stats().await.is_empty());

        repo.insert(input("1", "A")).await;
        repo.insert(input("2", "A")).await;
        repo.insert(input("3", "B")).await;

        let stats = repo.stats().await;
        assert_eq!(stats.get("A"), Some(&2));
        assert_eq!(stats.get("B"), Some(&1));
        assert_eq!(stats.len(), 2);
    }

    #[tokio::test]
    async fn test_clones_share_records() {
        let repo = InMemoryProductRepository::new();
        let handle = repo.clone();
        repo.insert(input("Shared", "X")).await;
        assert_eq!(handle.len().await, 1);
    }
}
