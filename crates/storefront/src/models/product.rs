//! Product catalog models.

use rust_decimal::Decimal;
use serde::Serialize;
use suit_yourself_core::types::ProductId;

/// A catalog product. Immutable fixture data; never mutated at runtime.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub description: String,
    /// Fabric/construction bullet points shown on the detail page.
    pub details: Vec<String>,
    /// Available sizes, in display order.
    pub sizes: Vec<String>,
    /// Primary image URL.
    pub image: String,
    /// All image URLs, primary first.
    pub images: Vec<String>,
}

/// Listing projection of a product.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub image: String,
}

impl Product {
    /// Project this product into its listing summary.
    #[must_use]
    pub fn summary(&self) -> ProductSummary {
        ProductSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            category: self.category.clone(),
            price: self.price,
            image: self.image.clone(),
        }
    }
}
