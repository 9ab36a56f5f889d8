//! Catalog reads.

use std::fmt;

use serde::de::DeserializeOwned;
use storefront_commerce::catalog::Product;
use storefront_commerce::ProductId;

use crate::{FetchClient, FetchError, QueryCache, Transport};

/// Public product API used when no other base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Identity of one catalog read, used as its memoization key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// `GET /products`
    Products,
    /// `GET /products/categories`
    Categories,
    /// `GET /products/category/{name}`
    ProductsInCategory(String),
    /// `GET /products/{id}`
    Product(ProductId),
}

impl QueryKey {
    /// Path segments below the base URL.
    pub fn path_segments(&self) -> Vec<String> {
        match self {
            QueryKey::Products => vec!["products".to_string()],
            QueryKey::Categories => vec!["products".to_string(), "categories".to_string()],
            QueryKey::ProductsInCategory(name) => vec![
                "products".to_string(),
                "category".to_string(),
                name.clone(),
            ],
            QueryKey::Product(id) => vec!["products".to_string(), id.to_string()],
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKey::Products => write!(f, "products"),
            QueryKey::Categories => write!(f, "categories"),
            QueryKey::ProductsInCategory(name) => write!(f, "products/category/{}", name),
            QueryKey::Product(id) => write!(f, "product/{}", id),
        }
    }
}

/// Read-through client for the product catalog.
///
/// Successful reads are memoized by [`QueryKey`]; failures are not, so asking
/// again retries.
pub struct CatalogClient {
    fetch: FetchClient,
    cache: QueryCache,
}

impl CatalogClient {
    /// Create a client for `base_url` using the `reqwest` transport.
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        Ok(Self::from_fetch(FetchClient::new(base_url)?))
    }

    /// Create a client that sends through a custom transport.
    pub fn with_transport(
        base_url: &str,
        transport: impl Transport + 'static,
    ) -> Result<Self, FetchError> {
        Ok(Self::from_fetch(FetchClient::with_transport(base_url, transport)?))
    }

    pub fn from_fetch(fetch: FetchClient) -> Self {
        Self {
            fetch,
            cache: QueryCache::new(),
        }
    }

    /// All products.
    pub async fn list_products(&self) -> Result<Vec<Product>, FetchError> {
        self.read(QueryKey::Products).await
    }

    /// All category names.
    pub async fn list_categories(&self) -> Result<Vec<String>, FetchError> {
        self.read(QueryKey::Categories).await
    }

    /// Products in one category, filtered server-side.
    pub async fn list_products_in_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, FetchError> {
        self.read(QueryKey::ProductsInCategory(category.to_string()))
            .await
    }

    /// One product by id.
    pub async fn get_product(&self, id: ProductId) -> Result<Product, FetchError> {
        self.read(QueryKey::Product(id)).await
    }

    /// Forget one memoized read.
    pub fn invalidate(&self, key: &QueryKey) -> bool {
        self.cache.invalidate(&key.to_string())
    }

    /// Forget every memoized read.
    pub fn clear(&self) {
        self.cache.clear();
    }

    /// The memoization cache.
    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    async fn read<T: DeserializeOwned>(&self, key: QueryKey) -> Result<T, FetchError> {
        let cache_key = key.to_string();
        if let Some(value) = self.cache.get(&cache_key)? {
            tracing::debug!(key = %cache_key, "memoized");
            return Ok(value);
        }

        let result = self.fetch.get(key.path_segments()).await.and_then(|response| {
            let value = response.json::<T>()?;
            Ok((value, response.body))
        });

        match result {
            Ok((value, body)) => {
                self.cache.set(cache_key, body);
                Ok(value)
            }
            Err(e) => {
                tracing::warn!(key = %cache_key, error = %e, "catalog read failed");
                Err(e)
            }
        }
    }
}
