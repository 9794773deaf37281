//! HTTP route handlers for the admin panel.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Dashboard (tables + forms, full page)
//! GET  /health                 - Health check
//!
//! # Customers (HTMX fragments)
//! GET  /customers              - Refresh customers panel
//! POST /customers              - Create customer
//!
//! # Products (HTMX fragments)
//! GET  /products               - Refresh products panel (rebuilds order rows)
//! POST /products               - Create product
//!
//! # Orders (HTMX fragments)
//! GET  /orders                 - Refresh orders panel
//! POST /orders                 - Submit order (guard: at least one item row)
//! GET  /orders/form            - Order form fragment
//! GET  /orders/items           - Order item rows fragment
//! POST /orders/items           - Add item row
//! POST /orders/items/{id}      - Sync item row (product/quantity change)
//! DELETE /orders/items/{id}    - Remove item row
//! ```

pub mod customers;
pub mod dashboard;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Transient status banner contents.
///
/// Every fragment response carries one; the page script dismisses the
/// banner after a few seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub message: String,
    pub is_error: bool,
}

impl StatusView {
    /// A success banner.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    /// An error banner.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}

/// Create all routes for the admin panel.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Dashboard
        .route("/", get(dashboard::index))
        // Customers
        .route(
            "/customers",
            get(customers::refresh_panel).post(customers::create),
        )
        // Products
        .route(
            "/products",
            get(products::refresh_panel).post(products::create),
        )
        // Orders
        .route("/orders", get(orders::refresh_panel).post(orders::submit))
        .route("/orders/form", get(orders::form_fragment))
        .route(
            "/orders/items",
            get(orders::items_fragment).post(orders::add_item),
        )
        .route(
            "/orders/items/{id}",
            post(orders::update_item).delete(orders::remove_item),
        )
}
