//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::backend::{BackendClient, BackendError};
use crate::catalog::Catalog;
use crate::config::AdminConfig;
use crate::order_builder::OrderBuilder;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// backend client, the catalog caches, and the pending order form rows.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    backend: BackendClient,
    catalog: Catalog,
    builder: Mutex<OrderBuilder>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend client cannot be constructed from
    /// the configured credentials.
    pub fn new(config: AdminConfig) -> Result<Self, BackendError> {
        let backend = BackendClient::new(&config.backend)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                backend,
                catalog: Catalog::new(),
                builder: Mutex::new(OrderBuilder::new()),
            }),
        })
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the backend API client.
    #[must_use]
    pub fn backend(&self) -> &BackendClient {
        &self.inner.backend
    }

    /// Get a reference to the catalog caches.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Lock the order builder.
    ///
    /// Callers must not hold the guard across backend awaits.
    pub async fn builder(&self) -> MutexGuard<'_, OrderBuilder> {
        self.inner.builder.lock().await
    }
}

/// Build a state whose backend points at the given base URL (tests only).
#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) fn test_state(base_url: &str) -> AppState {
    use crate::config::BackendConfig;
    use secrecy::SecretString;

    let config = AdminConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 3001,
        backend: BackendConfig {
            base_url: base_url.to_string(),
            username: "admin".to_string(),
            password: SecretString::from("password"),
        },
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 1.0,
        tls: None,
    };
    AppState::new(config).unwrap()
}
