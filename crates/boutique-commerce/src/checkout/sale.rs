//! Sale records.

use crate::cart::{Cart, CartTotals};
use crate::ids::{ItemId, SaleId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A line of a completed sale.
///
/// A by-value copy of the cart line at commit time: later catalog or
/// cart changes cannot alter it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaleLine {
    /// The catalog item that was sold (relation only).
    pub item_id: ItemId,
    /// Item name at sale time.
    pub name: String,
    /// Item category at sale time.
    pub category: String,
    /// Unit price charged.
    pub unit_price: Money,
    /// Units sold.
    pub quantity: i64,
}

/// A completed sale. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sale {
    /// Unique sale identifier.
    pub id: SaleId,
    /// Customer label, if the cashier entered one.
    pub customer_label: Option<String>,
    /// Line items in cart order.
    pub lines: Vec<SaleLine>,
    /// Sum of line totals before the discount.
    pub subtotal: Money,
    /// Amount taken off.
    pub discount_amount: Money,
    /// What the customer paid.
    pub total: Money,
    /// Unix timestamp of the sale.
    pub created_at: i64,
}

impl Sale {
    /// Snapshot a cart into a sale record.
    ///
    /// A blank customer label is treated as absent.
    pub fn from_cart(cart: &Cart, totals: &CartTotals) -> Self {
        let customer_label = cart
            .customer_label()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string);
        let lines = cart
            .lines()
            .iter()
            .map(|l| SaleLine {
                item_id: l.item_id.clone(),
                name: l.name.clone(),
                category: l.category.clone(),
                unit_price: l.unit_price,
                quantity: l.quantity,
            })
            .collect();
        Self {
            id: SaleId::generate(),
            customer_label,
            lines,
            subtotal: totals.subtotal,
            discount_amount: totals.discount_amount,
            total: totals.total,
            created_at: current_timestamp(),
        }
    }

    /// Total unit count across all lines.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemDraft;
    use crate::money::Currency;

    fn cart_with_one_handbag() -> Cart {
        let item = ItemDraft::new(
            "Women's Handbag",
            "Accessories",
            Money::new(15000, Currency::XAF),
            Money::new(25000, Currency::XAF),
        )
        .with_stock(2)
        .into_item(0);
        let mut cart = Cart::new(Currency::XAF);
        cart.add_item(&item).unwrap();
        cart
    }

    #[test]
    fn test_snapshot_copies_lines_by_value() {
        let mut cart = cart_with_one_handbag();
        let totals = cart.totals().unwrap();
        let sale = Sale::from_cart(&cart, &totals);

        // clearing the cart afterwards does not touch the sale
        cart.clear();
        assert_eq!(sale.lines.len(), 1);
        assert_eq!(sale.lines[0].name, "Women's Handbag");
        assert_eq!(sale.lines[0].unit_price.amount_minor, 25000);
        assert_eq!(sale.subtotal.amount_minor, 25000);
    }

    #[test]
    fn test_blank_customer_label_is_dropped() {
        let mut cart = cart_with_one_handbag();
        cart.set_customer_label("   ");
        let totals = cart.totals().unwrap();
        assert_eq!(Sale::from_cart(&cart, &totals).customer_label, None);

        cart.set_customer_label("Amina");
        assert_eq!(
            Sale::from_cart(&cart, &totals).customer_label.as_deref(),
            Some("Amina")
        );
    }

    #[test]
    fn test_item_count() {
        let cart = cart_with_one_handbag();
        let totals = cart.totals().unwrap();
        assert_eq!(Sale::from_cart(&cart, &totals).item_count(), 1);
    }
}
