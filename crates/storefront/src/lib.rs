//! Suit Yourself storefront library.
//!
//! This crate provides the storefront functionality as a library, allowing
//! the HTTP surface to be tested against the real router.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod payabli;
pub mod routes;
pub mod security;
pub mod state;
pub mod store;
