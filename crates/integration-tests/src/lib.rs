//! Integration tests for the Micro-Commerce admin panel.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the backend services (customer, product, order APIs)
//! # then the admin panel:
//! cargo run -p micro-commerce-admin
//!
//! # Run the ignored integration tests against it:
//! cargo test -p micro-commerce-integration-tests -- --ignored
//! ```
//!
//! The tests talk plain HTTP to a running panel; `ADMIN_BASE_URL`
//! overrides the default `http://localhost:3001`.
