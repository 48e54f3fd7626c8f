//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. IDs are opaque
//! strings; generated IDs are 8 random bytes hex-encoded, optionally behind
//! a fixed prefix (orders use `ORD-`).

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - `new()` from any string, `generate()` for a fresh random ID, `as_str()`
/// - `From<String>`, `From<&str>`, and `Display` implementations
///
/// An optional second argument sets a prefix that `generate()` prepends to
/// the random hex token.
///
/// # Example
///
/// ```rust
/// # use suit_yourself_core::define_id;
/// define_id!(CartId);
/// define_id!(OrderId, "ORD-");
///
/// let order_id = OrderId::generate();
/// assert!(order_id.as_str().starts_with("ORD-"));
///
/// // CartId and OrderId are different types, so this won't compile:
/// // let _: CartId = order_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        $crate::define_id!($name, "");
    };
    ($name:ident, $prefix:expr) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from an existing string value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a fresh random ID (8 random bytes, hex-encoded).
            #[must_use]
            pub fn generate() -> Self {
                let bytes: [u8; 8] = ::rand::random();
                Self(format!("{}{}", $prefix, ::hex::encode(bytes)))
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

// Define standard entity IDs
define_id!(ProductId);
define_id!(CartId);
define_id!(CartItemId);
define_id!(OrderId, "ORD-");

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_prefixed_hex() {
        let id = OrderId::generate();
        let hex_part = id.as_str().strip_prefix("ORD-").unwrap();
        assert_eq!(hex_part.len(), 16);
        assert!(hex_part.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generate_unprefixed() {
        let id = CartItemId::generate();
        assert_eq!(id.as_str().len(), 16);
    }

    #[test]
    fn test_generate_is_unique() {
        let a = OrderId::generate();
        let b = OrderId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_serde_transparent() {
        let id = ProductId::new("suit-001");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"suit-001\"");

        let back: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
