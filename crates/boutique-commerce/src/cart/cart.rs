//! The cart and its stock-aware mutations.

use crate::cart::{CartLine, CartTotals};
use crate::catalog::CatalogItem;
use crate::error::PosError;
use crate::ids::ItemId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// The in-progress sale for one checkout session.
///
/// Lines keep their insertion order for display; order has no pricing
/// significance. At most one line exists per catalog item: re-adding
/// merges into the existing line. Every mutation validates against the
/// catalog quantity the caller passes in, so a line's quantity never
/// exceeds what was on hand at mutation time and never drops below 1
/// while the line exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
    discount_percent: f64,
    customer_label: Option<String>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart priced in the given currency.
    pub fn new(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            discount_percent: 0.0,
            customer_label: None,
            currency,
        }
    }

    /// Add one unit of an item.
    ///
    /// Fails with [`PosError::OutOfStock`] when the item has no stock and
    /// with [`PosError::StockLimitExceeded`] when one more unit would
    /// exceed what is on hand. Neither failure mutates the cart.
    pub fn add_item(&mut self, item: &CatalogItem) -> Result<(), PosError> {
        if item.selling_price.currency != self.currency {
            return Err(PosError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: item.selling_price.currency.code().to_string(),
            });
        }
        if item.is_out_of_stock() {
            return Err(PosError::OutOfStock {
                name: item.name.clone(),
            });
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item.id) {
            if line.quantity + 1 > item.quantity_on_hand {
                return Err(PosError::StockLimitExceeded {
                    name: item.name.clone(),
                    available: item.quantity_on_hand,
                });
            }
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                item_id: item.id.clone(),
                name: item.name.clone(),
                category: item.category.clone(),
                unit_price: item.selling_price,
                quantity: 1,
            });
        }
        Ok(())
    }

    /// Set a line's quantity exactly (not incrementally).
    ///
    /// A quantity of 0 removes the line. Returns whether a line was
    /// touched; setting a quantity for an item with no line is a no-op,
    /// not an error.
    pub fn set_quantity(&mut self, item: &CatalogItem, quantity: i64) -> Result<bool, PosError> {
        if quantity < 0 {
            return Err(PosError::InvalidQuantity(quantity));
        }
        if quantity == 0 {
            return Ok(self.remove_item(&item.id));
        }
        if quantity > item.quantity_on_hand {
            return Err(PosError::StockLimitExceeded {
                name: item.name.clone(),
                available: item.quantity_on_hand,
            });
        }

        match self.lines.iter_mut().find(|l| l.item_id == item.id) {
            Some(line) => {
                line.quantity = quantity;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove a line. A second removal of the same item is a no-op.
    pub fn remove_item(&mut self, item_id: &ItemId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.item_id != item_id);
        self.lines.len() < len_before
    }

    /// Set the cart-wide discount percent, in `[0, 100]`.
    pub fn set_discount_percent(&mut self, percent: f64) -> Result<(), PosError> {
        if !(0.0..=100.0).contains(&percent) {
            return Err(PosError::InvalidDiscount(percent));
        }
        self.discount_percent = percent;
        Ok(())
    }

    /// The current discount percent.
    pub fn discount_percent(&self) -> f64 {
        self.discount_percent
    }

    /// Attach a customer label to the sale. Free text, not validated.
    pub fn set_customer_label(&mut self, label: impl Into<String>) {
        self.customer_label = Some(label.into());
    }

    /// Drop the customer label.
    pub fn clear_customer_label(&mut self) {
        self.customer_label = None;
    }

    /// The customer label, if one was set.
    pub fn customer_label(&self) -> Option<&str> {
        self.customer_label.as_deref()
    }

    /// The cart's currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// The lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for an item, if present.
    pub fn line(&self, item_id: &ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.item_id == item_id)
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total unit count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Compute subtotal, discount amount, and total.
    ///
    /// Pure: calling this twice without mutation yields identical
    /// results, and it never touches the catalog.
    pub fn totals(&self) -> Result<CartTotals, PosError> {
        let mut subtotal = Money::zero(self.currency);
        for line in &self.lines {
            let line_total = line.line_total()?;
            subtotal = subtotal.try_add(&line_total).ok_or(PosError::Overflow)?;
        }
        let discount_amount = subtotal.percentage(self.discount_percent);
        let total = subtotal
            .try_subtract(&discount_amount)
            .ok_or(PosError::Overflow)?;
        Ok(CartTotals {
            subtotal,
            discount_amount,
            total,
        })
    }

    /// Empty the cart: all lines removed, discount reset to zero, customer
    /// label cleared. Used after a successful commit and for an explicit
    /// cart reset.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.discount_percent = 0.0;
        self.customer_label = None;
    }
}
