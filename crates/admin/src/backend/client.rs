//! Authenticated HTTP client for the backend REST API.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::instrument;

use super::BackendError;
use super::types::{Customer, NewCustomer, NewOrder, NewProduct, Order, Product};
use crate::config::BackendConfig;

/// Structured error body returned by the order service on rejected creates.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

/// Client for the backend REST API.
///
/// Every request carries `Authorization: Basic <base64(user:password)>` with
/// the credential pair fixed at construction. No retries, no pagination.
#[derive(Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a new backend API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the credential pair cannot be encoded into a
    /// header value or the HTTP client fails to build.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let mut headers = HeaderMap::new();

        let credentials = format!("{}:{}", config.username, config.password.expose_secret());
        let auth_value = format!("Basic {}", BASE64.encode(credentials));
        let mut auth_header = HeaderValue::from_str(&auth_value)
            .map_err(|e| BackendError::Parse(format!("Invalid credential format: {e}")))?;
        auth_header.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_header);

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Fetch all customers.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    #[instrument(skip(self))]
    pub async fn customers(&self) -> Result<Vec<Customer>, BackendError> {
        self.get_list("customers").await
    }

    /// Fetch all products.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, BackendError> {
        self.get_list("products").await
    }

    /// Fetch all orders.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    #[instrument(skip(self))]
    pub async fn orders(&self) -> Result<Vec<Order>, BackendError> {
        self.get_list("orders").await
    }

    /// Create a customer.
    ///
    /// # Errors
    ///
    /// Non-success statuses surface the HTTP status text.
    #[instrument(skip(self, customer))]
    pub async fn create_customer(&self, customer: &NewCustomer) -> Result<(), BackendError> {
        let url = format!("{}/customers", self.base_url);
        let response = self.client.post(&url).json(customer).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Api {
                status: status.as_u16(),
                message: status_text(status),
            });
        }
        Ok(())
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Non-success statuses surface the HTTP status text.
    #[instrument(skip(self, product))]
    pub async fn create_product(&self, product: &NewProduct) -> Result<(), BackendError> {
        let url = format!("{}/products", self.base_url);
        let response = self.client.post(&url).json(product).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Api {
                status: status.as_u16(),
                message: status_text(status),
            });
        }
        Ok(())
    }

    /// Create an order.
    ///
    /// The order service rejects orders with unknown customers or products
    /// and explains why in a JSON `{message}` body; that message is surfaced
    /// when present, falling back to the HTTP status text.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status. Not
    /// retried, to avoid duplicate orders.
    #[instrument(skip(self, order))]
    pub async fn create_order(&self, order: &NewOrder) -> Result<(), BackendError> {
        let url = format!("{}/orders", self.base_url);
        let response = self.client.post(&url).json(order).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| status_text(status));
            return Err(BackendError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }

    /// Issue an authenticated GET and decode the response as a list.
    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, BackendError> {
        let url = format!("{}/{path}", self.base_url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Api {
                status: status.as_u16(),
                message: status_text(status),
            });
        }

        Ok(response.json().await?)
    }
}

/// Human-readable status text for a response status.
fn status_text(status: reqwest::StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Unknown Error")
        .to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn test_config() -> BackendConfig {
        BackendConfig {
            base_url: "http://localhost:8080".to_string(),
            username: "admin".to_string(),
            password: SecretString::from("password"),
        }
    }

    #[test]
    fn test_client_builds_from_config() {
        assert!(BackendClient::new(&test_config()).is_ok());
    }

    #[test]
    fn test_basic_auth_encoding_matches_fixture() {
        // The demo backend expects base64("admin:password")
        let encoded = BASE64.encode("admin:password");
        assert_eq!(encoded, "YWRtaW46cGFzc3dvcmQ=");
    }

    #[test]
    fn test_status_text() {
        assert_eq!(status_text(reqwest::StatusCode::NOT_FOUND), "Not Found");
        assert_eq!(
            status_text(reqwest::StatusCode::INTERNAL_SERVER_ERROR),
            "Internal Server Error"
        );
    }

    #[tokio::test]
    async fn test_get_list_surfaces_transport_failure() {
        // Port 9 (discard) is not listening; the request fails at transport
        let config = BackendConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            username: "admin".to_string(),
            password: SecretString::from("password"),
        };
        let client = BackendClient::new(&config).unwrap();

        let result = client.customers().await;
        assert!(matches!(result, Err(BackendError::Http(_))));
    }
}
