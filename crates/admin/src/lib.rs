//! Micro-Commerce Admin library.
//!
//! This crate provides the admin panel functionality as a library,
//! allowing it to be tested and reused.
//!
//! # Architecture
//!
//! - Axum web framework
//! - Askama templates for server-side rendering, HTMX for fragment swaps
//! - REST client for the micro-commerce backend services (Basic auth)
//! - No local database: all data lives in the backend, with in-memory
//!   caches of customers and products refreshed on demand

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod backend;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod order_builder;
pub mod routes;
pub mod state;
