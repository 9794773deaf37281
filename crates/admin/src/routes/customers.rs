//! Customer panel handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Form, State},
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;

use crate::backend::{Customer, NewCustomer};
use crate::state::AppState;

use super::StatusView;

/// One customer row, pre-formatted for the table.
#[derive(Debug, Clone)]
pub struct CustomerView {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<&Customer> for CustomerView {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id,
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
            email: customer.email.clone(),
        }
    }
}

pub(crate) fn views(customers: &[Customer]) -> Vec<CustomerView> {
    customers.iter().map(CustomerView::from).collect()
}

/// Customers panel plus status banner.
#[derive(Template, WebTemplate)]
#[template(path = "fragments/customers.html")]
pub struct CustomersFragment {
    pub customers: Vec<CustomerView>,
    pub status: StatusView,
    pub oob: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreateCustomerForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Fetch the customer list and replace the cache with the result.
///
/// A failed fetch clears the cache so the table renders empty rather than
/// stale, and the returned status carries the error banner.
pub(crate) async fn refresh(state: &AppState) -> (Vec<Customer>, StatusView) {
    match state.backend().customers().await {
        Ok(customers) => {
            state.catalog().set_customers(customers.clone()).await;
            (customers, StatusView::ok("Customers list updated."))
        }
        Err(e) => {
            tracing::error!("Failed to fetch customers: {e}");
            state.catalog().set_customers(Vec::new()).await;
            (
                Vec::new(),
                StatusView::error(format!("Error fetching customers: {e}")),
            )
        }
    }
}

/// GET /customers - re-fetch and re-render the customers panel.
///
/// Fires `customers-updated` so the order form refreshes its customer
/// select from the new cache.
pub async fn refresh_panel(State(state): State<AppState>) -> Response {
    let (customers, status) = refresh(&state).await;

    (
        AppendHeaders([("HX-Trigger", "customers-updated")]),
        CustomersFragment {
            customers: views(&customers),
            status,
            oob: false,
        },
    )
        .into_response()
}

/// POST /customers - create a customer, then re-fetch the list.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<CreateCustomerForm>,
) -> Response {
    let new_customer = NewCustomer {
        first_name: form.first_name,
        last_name: form.last_name,
        email: form.email,
    };

    match state.backend().create_customer(&new_customer).await {
        Ok(()) => {
            let (customers, refresh_status) = refresh(&state).await;
            // A refresh failure right after a successful create still
            // surfaces as an error.
            let status = if refresh_status.is_error {
                refresh_status
            } else {
                StatusView::ok("Customer created successfully!")
            };
            (
                AppendHeaders([("HX-Trigger", "customers-updated")]),
                CustomersFragment {
                    customers: views(&customers),
                    status,
                    oob: false,
                },
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to create customer: {e}");
            let customers = state.catalog().customers().await;
            CustomersFragment {
                customers: views(&customers),
                status: StatusView::error(format!("Error creating customer: {e}")),
                oob: false,
            }
            .into_response()
        }
    }
}
