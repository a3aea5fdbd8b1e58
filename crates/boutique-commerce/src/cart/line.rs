//! Cart line items.

use crate::error::PosError;
use crate::ids::ItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One item in the cart.
///
/// Holds a weak reference to the catalog item: the relation only. The
/// name, category, and unit price are captured at add time; a later
/// catalog price change does not alter a pending line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// The catalog item this line refers to.
    pub item_id: ItemId,
    /// Item name at add time.
    pub name: String,
    /// Item category at add time.
    pub category: String,
    /// Selling price at add time, frozen for the life of the line.
    pub unit_price: Money,
    /// Units in the cart, always at least 1.
    pub quantity: i64,
}

impl CartLine {
    /// Price of the whole line (unit price times quantity).
    pub fn line_total(&self) -> Result<Money, PosError> {
        self.unit_price
            .try_multiply(self.quantity)
            .ok_or(PosError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_line_total() {
        let line = CartLine {
            item_id: ItemId::new("1"),
            name: "Women's Handbag".into(),
            category: "Accessories".into(),
            unit_price: Money::new(25000, Currency::XAF),
            quantity: 2,
        };
        assert_eq!(line.line_total().unwrap().amount_minor, 50000);
    }

    #[test]
    fn test_line_total_overflow() {
        let line = CartLine {
            item_id: ItemId::new("1"),
            name: "Overpriced".into(),
            category: "Misc".into(),
            unit_price: Money::new(i64::MAX, Currency::XAF),
            quantity: 2,
        };
        assert!(matches!(line.line_total(), Err(PosError::Overflow)));
    }
}
