use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Default 1-based page for list requests
pub const DEFAULT_PAGE: usize = 1;
/// Default page size for list requests
pub const DEFAULT_LIMIT: usize = 10;

/// Product entity as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, assigned on creation
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Price; sign and range are not constrained
    pub price: f64,
    /// Grouping key used by the category filter and stats
    pub category: String,
    /// Whether the product is in stock
    pub in_stock: bool,
}

impl Product {
    /// Create a new product with a fresh identifier
    pub fn new(input: ProductInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            in_stock: input.in_stock,
        }
    }

    /// Replace every mutable field; the id never changes
    pub fn apply_update(&mut self, input: ProductInput) {
        self.name = input.name;
        self.description = input.description;
        self.price = input.price;
        self.category = input.category;
        self.in_stock = input.in_stock;
    }
}

/// A fully validated set of mutable product fields.
///
/// Built from a [`crate::validation::ProductDraft`]; creation and full
/// replacement both take this type, so neither can store a partial record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

/// Query parameters for listing products
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Only return products in this category (exact match)
    pub category: Option<String>,
    /// 1-based page number (default 1)
    pub page: Option<usize>,
    /// Page size (default 10)
    pub limit: Option<usize>,
}

impl ListQuery {
    pub fn page(&self) -> usize {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    /// Half-open index window `[(page - 1) * limit, page * limit)` clamped to `len`.
    ///
    /// Page 0 and limit 0 both give an empty window.
    pub fn window(&self, len: usize) -> std::ops::Range<usize> {
        let page = self.page();
        let limit = self.limit();
        if page == 0 || limit == 0 {
            return 0..0;
        }
        let start = (page - 1).saturating_mul(limit).min(len);
        let end = page.saturating_mul(limit).min(len);
        start..end
    }
}

/// Query parameters for name search
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive substring to look for in product names (required)
    pub query: Option<String>,
}

/// Count of products per category, keyed by category name
pub type CategoryStats = BTreeMap<String, usize>;
