//! Static product catalog.
//!
//! Eight menswear products seeded at startup. Read-only fixture data; price
//! and name lookups for the cart come from here at add-time.

use rust_decimal::Decimal;

use crate::models::product::{Product, ProductSummary};
use suit_yourself_core::types::ProductId;

/// The in-memory product catalog.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build the fixture catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            products: fixture_products(),
        }
    }

    /// List product summaries, optionally filtered by category.
    #[must_use]
    pub fn list(&self, category: Option<&str>) -> Vec<ProductSummary> {
        self.products
            .iter()
            .filter(|p| category.is_none_or(|c| p.category == c))
            .map(Product::summary)
            .collect()
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Distinct categories in first-appearance order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        categories
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    category: &str,
    price_cents: i64,
    description: &str,
    details: &[&str],
    sizes: &[&str],
    images: &[&str],
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        category: category.to_string(),
        price: Decimal::new(price_cents, 2),
        description: description.to_string(),
        details: details.iter().map(ToString::to_string).collect(),
        sizes: sizes.iter().map(ToString::to_string).collect(),
        image: images.first().map(ToString::to_string).unwrap_or_default(),
        images: images.iter().map(ToString::to_string).collect(),
    }
}

const SUIT_SIZES: &[&str] = &["36R", "38R", "40R", "42R", "44R", "46R"];
const SHIRT_SIZES: &[&str] = &["14.5", "15", "15.5", "16", "16.5", "17"];

fn fixture_products() -> Vec<Product> {
    vec![
        product(
            "suit-001",
            "Navy Blue Wool Suit",
            "suits",
            59900,
            "Impeccably tailored from pure Italian wool, this navy suit features a modern slim fit with natural shoulders and a two-button closure.",
            &["100% Italian Wool", "Half Canvas Construction", "Slim Fit", "Two-Button Closure"],
            SUIT_SIZES,
            &[
                "https://images.unsplash.com/photo-1594938298603-c8148c4dae35?w=800",
                "https://images.unsplash.com/photo-1593030761757-71fae45fa0e7?w=800",
            ],
        ),
        product(
            "suit-002",
            "Charcoal Grey Suit",
            "suits",
            64900,
            "A versatile charcoal grey suit crafted from Super 120s wool. Perfect for both business and formal occasions.",
            &["Super 120s Wool", "Full Canvas Construction", "Classic Fit", "Notch Lapel"],
            SUIT_SIZES,
            &["https://images.unsplash.com/photo-1507679799987-c73779587ccf?w=800"],
        ),
        product(
            "suit-003",
            "Black Tuxedo",
            "suits",
            79900,
            "A classic black tuxedo with satin peak lapels. The epitome of formal elegance for black-tie events.",
            &["Wool & Mohair Blend", "Satin Peak Lapels", "Single Button Closure", "Satin Stripe Trousers"],
            SUIT_SIZES,
            &["https://images.unsplash.com/photo-1555069519-127aadedf1ee?w=800"],
        ),
        product(
            "jacket-001",
            "Navy Blazer",
            "jackets",
            39900,
            "A timeless navy blazer with gold buttons. The essential piece for smart-casual occasions.",
            &["100% Wool", "Half Lined", "Patch Pockets", "Gold Buttons"],
            SUIT_SIZES,
            &["https://images.unsplash.com/photo-1592878904946-b3cd8ae243d0?w=800"],
        ),
        product(
            "shirt-001",
            "White Dress Shirt",
            "shirts",
            12900,
            "A crisp white dress shirt in Egyptian cotton. The foundation of every gentleman's wardrobe.",
            &["Egyptian Cotton", "Mother of Pearl Buttons", "Spread Collar", "French Cuffs"],
            SHIRT_SIZES,
            &["https://images.unsplash.com/photo-1620012253295-c15cc3e65df4?w=800"],
        ),
        product(
            "shirt-002",
            "Light Blue Shirt",
            "shirts",
            13900,
            "A refined light blue shirt perfect for business or casual wear. Crafted from premium cotton.",
            &["100% Cotton", "Semi-Spread Collar", "Single Cuff", "Slim Fit"],
            SHIRT_SIZES,
            &["https://images.unsplash.com/photo-1596755094514-f87e34085b2c?w=800"],
        ),
        product(
            "pants-001",
            "Grey Wool Trousers",
            "pants",
            19900,
            "Elegant grey wool trousers with a flat front and tailored fit.",
            &["100% Wool", "Flat Front", "Tailored Fit", "Unfinished Hem"],
            &["30", "32", "34", "36", "38", "40"],
            &["https://images.unsplash.com/photo-1624378439575-d8705ad7ae80?w=800"],
        ),
        product(
            "coat-001",
            "Camel Overcoat",
            "coats",
            54900,
            "A luxurious camel overcoat in wool-cashmere blend. Timeless elegance for the colder months.",
            &["Wool-Cashmere Blend", "Single Breasted", "Notch Lapel", "Two Interior Pockets"],
            &["S", "M", "L", "XL"],
            &["https://images.unsplash.com/photo-1544923246-77307dd628b5?w=800"],
        ),
    ]
}
