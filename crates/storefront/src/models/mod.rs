//! Wire and domain models for the storefront API.
//!
//! All request/response structs are explicit typed structures with
//! `camelCase` field naming on the wire. Amounts are `rust_decimal::Decimal`
//! serialized as strings, which keeps their rendered scale stable across
//! mint -> echo -> verify round trips.

pub mod cart;
pub mod checkout;
pub mod order;
pub mod payabli;
pub mod product;

pub use cart::{AddItemRequest, Cart, CartItem, RemoveItemRequest, UpdateItemRequest};
pub use checkout::{
    CheckoutConfigResponse, CheckoutVerification, ConfirmRequest, ConfirmResponse, OrderSummary,
    SessionInfo,
};
pub use order::{CreateOrderRequest, CreateOrderResponse, CustomerInfo, Order};
pub use payabli::PayabliWidgetConfig;
pub use product::{Product, ProductSummary};
