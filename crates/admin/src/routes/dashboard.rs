//! Full-page dashboard.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::filters;
use crate::state::AppState;

use super::customers::{self, CustomerView};
use super::orders::{self, OrderFormView, OrderView};
use super::products::{self, ProductView};

/// The dashboard page: all three tables plus the order form.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub customers: Vec<CustomerView>,
    pub products: Vec<ProductView>,
    pub orders: Vec<OrderView>,
    pub form: OrderFormView,
    pub oob: bool,
}

/// GET / - render the dashboard.
///
/// Loads customers, then products, then orders, in that order, and seeds
/// the order form with one item row. Failed fetches render empty tables;
/// the page itself always loads.
pub async fn index(State(state): State<AppState>) -> DashboardTemplate {
    let (customers, _) = customers::refresh(&state).await;
    let (products, _) = products::refresh(&state).await;
    let (orders, _) = orders::fetch(&state).await;

    let form = {
        let mut builder = state.builder().await;
        builder.reset(&products);
        OrderFormView::build(&customers, &products, &builder)
    };

    DashboardTemplate {
        customers: customers::views(&customers),
        products: products::views(&products),
        orders: orders::views(&orders),
        form,
        oob: false,
    }
}
