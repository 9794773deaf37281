//! Orders panel and order form handlers.
//!
//! The order form is server-driven: its pending item rows live in the
//! shared [`OrderBuilder`](crate::order_builder::OrderBuilder) and every
//! structural change (add row, remove row, product refresh) re-renders
//! the `#order-items` fragment from it.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::backend::{BackendError, Customer, NewOrder, Order, Product};
use crate::error::AppError;
use crate::filters;
use crate::order_builder::OrderBuilder;
use crate::state::AppState;

use super::products::{self, ProductView};
use super::StatusView;

/// One order row, pre-formatted for the table.
#[derive(Debug, Clone)]
pub struct OrderView {
    pub id: i64,
    pub customer_id: i64,
    pub order_date: String,
    pub status: String,
    pub items: Vec<OrderItemView>,
}

#[derive(Debug, Clone)]
pub struct OrderItemView {
    pub product_id: i64,
    pub quantity: i64,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            customer_id: order.customer_id,
            order_date: order.order_date.to_string(),
            status: order.status.clone().unwrap_or_default(),
            items: order
                .order_items
                .iter()
                .map(|item| OrderItemView {
                    product_id: item.product_id,
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}

pub(crate) fn views(orders: &[Order]) -> Vec<OrderView> {
    orders.iter().map(OrderView::from).collect()
}

/// A `<option>` entry of the customer select.
#[derive(Debug, Clone)]
pub struct CustomerOption {
    pub id: i64,
    pub label: String,
}

/// A `<option>` entry of a product select.
#[derive(Debug, Clone)]
pub struct ProductOption {
    pub id: i64,
    pub label: String,
    pub selected: bool,
}

/// One rendered item row of the order form.
#[derive(Debug, Clone)]
pub struct ItemRowView {
    pub id: u64,
    pub quantity: i64,
    pub options: Vec<ProductOption>,
}

/// The order form, bound to the current caches and pending rows.
#[derive(Debug, Clone)]
pub struct OrderFormView {
    pub customers: Vec<CustomerOption>,
    pub rows: Vec<ItemRowView>,
}

impl OrderFormView {
    /// Bind the form to a customer list, product list, and pending rows.
    ///
    /// Rendering is a pure function of its inputs, so re-rendering the
    /// same state yields identical markup.
    #[must_use]
    pub fn build(customers: &[Customer], products: &[Product], builder: &OrderBuilder) -> Self {
        let customers = customers
            .iter()
            .map(|c| CustomerOption {
                id: c.id,
                label: format!("{} {} (ID: {})", c.first_name, c.last_name, c.id),
            })
            .collect();

        let rows = builder
            .rows()
            .iter()
            .map(|row| ItemRowView {
                id: row.id,
                quantity: row.quantity,
                options: products
                    .iter()
                    .map(|p| ProductOption {
                        id: p.id,
                        label: format!("{} (Stock: {})", p.name, p.stock),
                        selected: row.product_id == Some(p.id),
                    })
                    .collect(),
            })
            .collect();

        Self { customers, rows }
    }
}

/// Orders panel plus status banner.
#[derive(Template, WebTemplate)]
#[template(path = "fragments/orders.html")]
pub struct OrdersFragment {
    pub orders: Vec<OrderView>,
    pub status: StatusView,
    pub oob: bool,
}

/// The whole order form.
#[derive(Template, WebTemplate)]
#[template(path = "fragments/order_form.html")]
pub struct OrderFormFragment {
    pub form: OrderFormView,
}

/// Just the item rows of the order form.
#[derive(Template, WebTemplate)]
#[template(path = "fragments/order_items.html")]
pub struct OrderItemsFragment {
    pub form: OrderFormView,
}

/// Item rows plus an out-of-band status banner (submit failures).
#[derive(Template, WebTemplate)]
#[template(path = "fragments/order_status.html")]
pub struct OrderStatusFragment {
    pub form: OrderFormView,
    pub status: StatusView,
}

/// Full post-submit update: reset item rows as the swap target, with the
/// orders panel, products panel, and status banner swapped out-of-band.
#[derive(Template, WebTemplate)]
#[template(path = "fragments/order_submitted.html")]
pub struct OrderSubmittedFragment {
    pub form: OrderFormView,
    pub orders: Vec<OrderView>,
    pub products: Vec<ProductView>,
    pub status: StatusView,
    pub oob: bool,
}

#[derive(Debug, Deserialize)]
pub struct SubmitOrderForm {
    #[serde(default)]
    pub customer_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateItemForm {
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub quantity: Option<String>,
}

/// Fetch the order list. Orders are not cached; every render re-fetches.
pub(crate) async fn fetch(state: &AppState) -> (Vec<Order>, StatusView) {
    match state.backend().orders().await {
        Ok(orders) => (orders, StatusView::ok("Orders list updated.")),
        Err(e) => {
            tracing::error!("Failed to fetch orders: {e}");
            (
                Vec::new(),
                StatusView::error(format!("Error fetching orders: {e}")),
            )
        }
    }
}

/// Bind the form view to the current caches and pending rows.
pub(crate) async fn form_view(state: &AppState) -> OrderFormView {
    let customers = state.catalog().customers().await;
    let products = state.catalog().products().await;
    let builder = state.builder().await;
    OrderFormView::build(&customers, &products, &builder)
}

/// GET /orders - re-fetch and re-render the orders panel.
pub async fn refresh_panel(State(state): State<AppState>) -> OrdersFragment {
    let (orders, status) = fetch(&state).await;
    OrdersFragment {
        orders: views(&orders),
        status,
        oob: false,
    }
}

/// GET /orders/form - re-render the order form (customer list changed).
pub async fn form_fragment(State(state): State<AppState>) -> OrderFormFragment {
    OrderFormFragment {
        form: form_view(&state).await,
    }
}

/// GET /orders/items - re-render the item rows (product list changed).
pub async fn items_fragment(State(state): State<AppState>) -> OrderItemsFragment {
    OrderItemsFragment {
        form: form_view(&state).await,
    }
}

/// POST /orders/items - append a fresh item row.
pub async fn add_item(State(state): State<AppState>) -> OrderItemsFragment {
    let products = state.catalog().products().await;
    state.builder().await.add_row(&products);
    OrderItemsFragment {
        form: form_view(&state).await,
    }
}

/// POST /orders/items/{id} - sync one row's select and quantity inputs.
///
/// Swapless on the client (`hx-swap="none"`); the row markup already
/// reflects what the user picked.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Form(form): Form<UpdateItemForm>,
) -> Result<StatusCode, AppError> {
    let product_id = match form.product_id.as_deref() {
        Some(raw) => Some(
            raw.parse::<i64>()
                .map_err(|_| AppError::BadRequest(format!("invalid product id '{raw}'")))?,
        ),
        // A select with no options submits nothing
        None => None,
    };
    let quantity = match form.quantity.as_deref() {
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|_| AppError::BadRequest(format!("invalid quantity '{raw}'")))?,
        None => 1,
    };

    if state.builder().await.update_row(id, product_id, quantity) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("order item row {id}")))
    }
}

/// DELETE /orders/items/{id} - remove one row and re-render the rest.
///
/// Lenient about already-removed ids: a double click races the swap.
pub async fn remove_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> OrderItemsFragment {
    state.builder().await.remove_row(id);
    OrderItemsFragment {
        form: form_view(&state).await,
    }
}

/// POST /orders - place the order from the pending rows.
///
/// On success the orders list and product list (stock changed) are
/// re-fetched, the rows reset to a single fresh one, and the affected
/// panels swapped out-of-band.
pub async fn submit(State(state): State<AppState>, Form(form): Form<SubmitOrderForm>) -> Response {
    // Guard before any network call.
    let items = state.builder().await.items();
    if items.is_empty() {
        return status_fragment(
            &state,
            StatusView::error("Please add at least one product to the order."),
        )
        .await;
    }

    let Some(customer_id) = form
        .customer_id
        .as_deref()
        .and_then(|s| s.parse::<i64>().ok())
    else {
        return status_fragment(
            &state,
            StatusView::error("Error placing order: no customer selected."),
        )
        .await;
    };

    let new_order = NewOrder {
        customer_id,
        order_items: items,
    };

    match state.backend().create_order(&new_order).await {
        Ok(()) => {
            let (orders, orders_status) = fetch(&state).await;
            let (products, products_status) = products::refresh(&state).await;
            state.builder().await.reset(&products);

            let status = if orders_status.is_error {
                orders_status
            } else if products_status.is_error {
                products_status
            } else {
                StatusView::ok("Order placed successfully!")
            };

            OrderSubmittedFragment {
                form: form_view(&state).await,
                orders: views(&orders),
                products: products::views(&products),
                status,
                oob: true,
            }
            .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to place order: {e}");
            let message = submit_error_message(&e);
            status_fragment(
                &state,
                StatusView::error(format!("Error placing order: {message}")),
            )
            .await
        }
    }
}

/// The order service's structured rejection reads better in the banner
/// without the status-code wrapper.
fn submit_error_message(e: &BackendError) -> String {
    match e {
        BackendError::Api { message, .. } => message.clone(),
        other => other.to_string(),
    }
}

/// Item rows plus an out-of-band error banner.
async fn status_fragment(state: &AppState, status: StatusView) -> Response {
    OrderStatusFragment {
        form: form_view(state).await,
        status,
    }
    .into_response()
}
