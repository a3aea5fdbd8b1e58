//! Catalog summary figures for the dashboard.

use crate::catalog::CatalogItem;
use crate::error::PosError;
use crate::money::{Currency, Money};

/// Aggregate stock figures over the whole catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSummary {
    /// Number of distinct items.
    pub item_count: usize,
    /// Total units on hand across all items.
    pub unit_count: i64,
    /// Cost value of all stock on hand.
    pub stock_value: Money,
    /// Items at or below their reorder threshold.
    pub low_stock: usize,
    /// Items with nothing on hand.
    pub out_of_stock: usize,
}

impl CatalogSummary {
    /// Compute summary figures over a catalog listing.
    pub fn from_items(items: &[CatalogItem], currency: Currency) -> Result<Self, PosError> {
        let mut stock_value = Money::zero(currency);
        let mut unit_count = 0_i64;
        for item in items {
            let value = item.stock_value().ok_or(PosError::Overflow)?;
            stock_value = stock_value.try_add(&value).ok_or(PosError::Overflow)?;
            unit_count = unit_count
                .checked_add(item.quantity_on_hand)
                .ok_or(PosError::Overflow)?;
        }
        Ok(Self {
            item_count: items.len(),
            unit_count,
            stock_value,
            low_stock: items.iter().filter(|i| i.is_low_stock()).count(),
            out_of_stock: items.iter().filter(|i| i.is_out_of_stock()).count(),
        })
    }
}
