//! Product panel handlers.

use std::str::FromStr;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Form, State},
    response::{AppendHeaders, IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::backend::{NewProduct, Product};
use crate::filters;
use crate::state::AppState;

use super::StatusView;

/// One product row for the table; the template's `euro` filter formats
/// the price.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i64,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            stock: product.stock,
        }
    }
}

pub(crate) fn views(products: &[Product]) -> Vec<ProductView> {
    products.iter().map(ProductView::from).collect()
}

/// Products panel plus status banner.
#[derive(Template, WebTemplate)]
#[template(path = "fragments/products.html")]
pub struct ProductsFragment {
    pub products: Vec<ProductView>,
    pub status: StatusView,
    pub oob: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreateProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
}

/// Fetch the product list, replace the cache, and re-bind order rows.
///
/// Every pending order-item row is rebuilt against the new list so stale
/// products disappear from the selects. A failed fetch clears the cache.
pub(crate) async fn refresh(state: &AppState) -> (Vec<Product>, StatusView) {
    match state.backend().products().await {
        Ok(products) => {
            state.catalog().set_products(products.clone()).await;
            state.builder().await.rebuild(&products);
            (products, StatusView::ok("Products list updated."))
        }
        Err(e) => {
            tracing::error!("Failed to fetch products: {e}");
            state.catalog().set_products(Vec::new()).await;
            state.builder().await.rebuild(&[]);
            (
                Vec::new(),
                StatusView::error(format!("Error fetching products: {e}")),
            )
        }
    }
}

/// GET /products - re-fetch and re-render the products panel.
///
/// Fires `products-updated` so the order form refreshes its item rows
/// against the new product list.
pub async fn refresh_panel(State(state): State<AppState>) -> Response {
    let (products, status) = refresh(&state).await;

    (
        AppendHeaders([("HX-Trigger", "products-updated")]),
        ProductsFragment {
            products: views(&products),
            status,
            oob: false,
        },
    )
        .into_response()
}

/// POST /products - create a product, then re-fetch the list.
pub async fn create(State(state): State<AppState>, Form(form): Form<CreateProductForm>) -> Response {
    let Ok(price) = Decimal::from_str(form.price.trim()) else {
        return error_fragment(&state, format!("Error creating product: invalid price '{}'", form.price))
            .await;
    };
    let Ok(stock) = form.stock.trim().parse::<i64>() else {
        return error_fragment(&state, format!("Error creating product: invalid stock '{}'", form.stock))
            .await;
    };

    let new_product = NewProduct {
        name: form.name,
        description: form.description,
        price,
        stock,
    };

    match state.backend().create_product(&new_product).await {
        Ok(()) => {
            let (products, refresh_status) = refresh(&state).await;
            let status = if refresh_status.is_error {
                refresh_status
            } else {
                StatusView::ok("Product created successfully!")
            };
            (
                AppendHeaders([("HX-Trigger", "products-updated")]),
                ProductsFragment {
                    products: views(&products),
                    status,
                    oob: false,
                },
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to create product: {e}");
            error_fragment(&state, format!("Error creating product: {e}")).await
        }
    }
}

/// Render the panel from the current cache with an error banner.
async fn error_fragment(state: &AppState, message: String) -> Response {
    let products = state.catalog().products().await;
    ProductsFragment {
        products: views(&products),
        status: StatusView::error(message),
        oob: false,
    }
    .into_response()
}
