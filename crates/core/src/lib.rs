//! Suit Yourself Core - Shared types library.
//!
//! This crate provides common types used by the Suit Yourself storefront
//! service: type-safe entity IDs, money arithmetic helpers, and lifecycle
//! status enums.
//!
//! # Architecture
//!
//! The core crate contains only types and small pure functions - no I/O, no
//! HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money helpers, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;
