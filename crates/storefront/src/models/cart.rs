//! Cart models and the cart arithmetic invariants.
//!
//! The subtotal is derived state: it is recomputed inside every mutation and
//! never stored independently of the items, so it always equals the sum of
//! `price * quantity` over the current lines.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use suit_yourself_core::types::{CartId, CartItemId, ProductId, subtotal};

use crate::models::product::Product;

/// A single cart line.
///
/// `name`, `price`, and `image` are denormalized snapshots taken at add-time;
/// a later catalog change would not affect lines already in a cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: CartItemId,
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub size: String,
    pub quantity: u32,
    pub image: String,
}

/// A client's cart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: CartId,
    pub items: Vec<CartItem>,
    pub subtotal: Decimal,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            items: Vec::new(),
            subtotal: Decimal::ZERO,
        }
    }

    /// Add a product to the cart.
    ///
    /// At most one line exists per `(product, size)` pair: adding a duplicate
    /// increments the existing line's quantity instead of creating a new one.
    pub fn add_item(&mut self, product: &Product, size: &str, quantity: u32) {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product.id && i.size == size)
        {
            existing.quantity += quantity;
        } else {
            self.items.push(CartItem {
                id: CartItemId::generate(),
                product_id: product.id.clone(),
                name: product.name.clone(),
                price: product.price,
                size: size.to_string(),
                quantity,
                image: product.image.clone(),
            });
        }
        self.recompute_subtotal();
    }

    /// Remove a line from the cart. Unknown item IDs are a silent no-op.
    pub fn remove_item(&mut self, item_id: &CartItemId) {
        self.items.retain(|i| &i.id != item_id);
        self.recompute_subtotal();
    }

    /// Set a line's quantity. A quantity of zero or less removes the line.
    pub fn update_item(&mut self, item_id: &CartItemId, quantity: i64) {
        if quantity <= 0 {
            self.items.retain(|i| &i.id != item_id);
        } else if let Some(item) = self.items.iter_mut().find(|i| &i.id == item_id) {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            {
                item.quantity = quantity as u32;
            }
        }
        self.recompute_subtotal();
    }

    fn recompute_subtotal(&mut self) {
        self.subtotal = subtotal(self.items.iter().map(|i| (i.price, i.quantity)));
    }
}

/// `POST /api/cart/{cartId}/add` request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub product_id: ProductId,
    pub size: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

const fn default_quantity() -> u32 {
    1
}

/// `POST /api/cart/{cartId}/remove` request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveItemRequest {
    pub item_id: CartItemId,
}

/// `POST /api/cart/{cartId}/update` request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    pub item_id: CartItemId,
    pub quantity: i64,
}
