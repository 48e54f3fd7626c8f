//! Money arithmetic helpers built on decimal arithmetic.
//!
//! All amounts in the system are `rust_decimal::Decimal` in the currency's
//! standard unit (dollars, not cents). Decimal `Display` preserves scale,
//! which keeps string renderings of an amount stable across serialization
//! round trips.

use rust_decimal::Decimal;

/// Extended price of a single line: unit price times quantity.
#[must_use]
pub fn line_total(price: Decimal, quantity: u32) -> Decimal {
    price * Decimal::from(quantity)
}

/// Sum of `price * quantity` over a sequence of lines.
pub fn subtotal(lines: impl IntoIterator<Item = (Decimal, u32)>) -> Decimal {
    lines
        .into_iter()
        .map(|(price, quantity)| line_total(price, quantity))
        .sum()
}

/// Whether two amounts agree within an absolute tolerance.
///
/// Used when reconciling amounts reported by the payment processor against
/// our own records, where sub-cent representation differences can occur.
#[must_use]
pub fn amounts_match(a: Decimal, b: Decimal, tolerance: Decimal) -> bool {
    (a - b).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let price = Decimal::new(59900, 2); // 599.00
        assert_eq!(line_total(price, 2), Decimal::new(119_800, 2));
    }

    #[test]
    fn test_subtotal_empty() {
        assert_eq!(subtotal([]), Decimal::ZERO);
    }

    #[test]
    fn test_subtotal_mixed_lines() {
        let lines = [
            (Decimal::new(59900, 2), 1),
            (Decimal::new(12900, 2), 3),
        ];
        assert_eq!(subtotal(lines), Decimal::new(98_600, 2));
    }

    #[test]
    fn test_amounts_match_within_tolerance() {
        let tolerance = Decimal::new(1, 2); // 0.01
        let a = Decimal::new(59900, 2);
        let b = Decimal::new(59901, 2);
        assert!(amounts_match(a, b, tolerance));
        assert!(amounts_match(b, a, tolerance));
    }

    #[test]
    fn test_amounts_match_outside_tolerance() {
        let tolerance = Decimal::new(1, 2);
        let a = Decimal::new(59900, 2);
        let b = Decimal::new(59902, 2);
        assert!(!amounts_match(a, b, tolerance));
    }
}
