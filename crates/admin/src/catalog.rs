//! In-memory caches of customers and products.
//!
//! The backend owns the data; these caches exist so the order form can be
//! rendered without a round trip and are replaced wholesale on each refresh.
//! A cache entry lives until the next refresh of its entity.
//!
//! Concurrent refreshes are not serialized: two overlapping refreshes write
//! in completion order and the last write wins, matching the unsynchronized
//! behavior of the page this panel replaces (see DESIGN.md).

use tokio::sync::RwLock;

use crate::backend::{Customer, Product};

/// Component-owned caches with an explicit refresh lifecycle.
#[derive(Debug, Default)]
pub struct Catalog {
    customers: RwLock<Vec<Customer>>,
    products: RwLock<Vec<Product>>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the cached customers, in server order.
    pub async fn customers(&self) -> Vec<Customer> {
        self.customers.read().await.clone()
    }

    /// Replace the customer cache.
    pub async fn set_customers(&self, customers: Vec<Customer>) {
        *self.customers.write().await = customers;
    }

    /// Snapshot of the cached products, in server order.
    pub async fn products(&self) -> Vec<Product> {
        self.products.read().await.clone()
    }

    /// Replace the product cache.
    pub async fn set_products(&self, products: Vec<Product>) {
        *self.products.write().await = products;
    }
}
