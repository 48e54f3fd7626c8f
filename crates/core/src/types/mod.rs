//! Core types for Suit Yourself.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod money;
pub mod status;

pub use id::*;
pub use money::{amounts_match, line_total, subtotal};
pub use status::OrderStatus;
