//! REST client for the micro-commerce backend services.
//!
//! The backend exposes `/customers`, `/products`, and `/orders` behind HTTP
//! Basic auth. This module owns the wire types and the authenticated client;
//! it performs no caching and no retries (see [`crate::catalog`] for the
//! refresh lifecycle).
//!
//! # Example
//!
//! ```rust,ignore
//! use micro_commerce_admin::backend::BackendClient;
//!
//! let client = BackendClient::new(&config.backend)?;
//!
//! let products = client.products().await?;
//! client.create_customer(&new_customer).await?;
//! ```

mod client;
pub mod types;

pub use client::BackendClient;
pub use types::*;

use thiserror::Error;

/// Errors that can occur when interacting with the backend API.
#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP request failed (transport-level).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to build or parse a request component.
    #[error("Parse error: {0}")]
    Parse(String),
}
