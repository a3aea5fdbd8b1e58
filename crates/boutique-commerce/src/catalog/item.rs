//! Catalog item types.

use crate::error::PosError;
use crate::ids::ItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A sellable item in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    /// Unique item identifier, stable for the item's lifetime.
    pub id: ItemId,
    /// Display name, non-empty.
    pub name: String,
    /// Free-text grouping label.
    pub category: String,
    /// What the shop paid per unit.
    pub cost_price: Money,
    /// What the shop charges per unit.
    pub selling_price: Money,
    /// Units currently in stock, never negative.
    pub quantity_on_hand: i64,
    /// At or below this level the item is flagged as low stock.
    pub low_stock_threshold: i64,
    /// Scannable barcode, unique by convention but not enforced.
    pub barcode: Option<String>,
    /// Optional long description.
    pub description: Option<String>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl CatalogItem {
    /// Check if the item has no stock left.
    pub fn is_out_of_stock(&self) -> bool {
        self.quantity_on_hand <= 0
    }

    /// Check if stock is at or below the reorder threshold (but not out).
    pub fn is_low_stock(&self) -> bool {
        self.quantity_on_hand > 0 && self.quantity_on_hand <= self.low_stock_threshold
    }

    /// Cost value of the stock on hand.
    pub fn stock_value(&self) -> Option<Money> {
        self.cost_price.try_multiply(self.quantity_on_hand)
    }
}

/// Input for creating a catalog item. The store assigns the ID and
/// timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub category: String,
    pub cost_price: Money,
    pub selling_price: Money,
    pub quantity_on_hand: i64,
    pub low_stock_threshold: i64,
    pub barcode: Option<String>,
    pub description: Option<String>,
}

impl ItemDraft {
    /// Default reorder threshold for new items.
    pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

    /// Create a draft with no stock and the default threshold.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        cost_price: Money,
        selling_price: Money,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            cost_price,
            selling_price,
            quantity_on_hand: 0,
            low_stock_threshold: Self::DEFAULT_LOW_STOCK_THRESHOLD,
            barcode: None,
            description: None,
        }
    }

    /// Set the initial stock level.
    pub fn with_stock(mut self, quantity: i64) -> Self {
        self.quantity_on_hand = quantity;
        self
    }

    /// Set the reorder threshold.
    pub fn with_threshold(mut self, threshold: i64) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    /// Set the barcode.
    pub fn with_barcode(mut self, barcode: impl Into<String>) -> Self {
        self.barcode = Some(barcode.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Validate the draft before it is written.
    pub fn validate(&self) -> Result<(), PosError> {
        if self.name.trim().is_empty() {
            return Err(PosError::Validation("item name must not be empty".into()));
        }
        if self.cost_price.is_negative() || self.selling_price.is_negative() {
            return Err(PosError::Validation("prices must not be negative".into()));
        }
        if self.cost_price.currency != self.selling_price.currency {
            return Err(PosError::CurrencyMismatch {
                expected: self.cost_price.currency.code().to_string(),
                got: self.selling_price.currency.code().to_string(),
            });
        }
        if self.quantity_on_hand < 0 {
            return Err(PosError::InvalidQuantity(self.quantity_on_hand));
        }
        if self.low_stock_threshold < 0 {
            return Err(PosError::Validation(
                "low stock threshold must not be negative".into(),
            ));
        }
        Ok(())
    }

    /// Turn the draft into a catalog item with a fresh ID.
    pub fn into_item(self, now: i64) -> CatalogItem {
        CatalogItem {
            id: ItemId::generate(),
            name: self.name,
            category: self.category,
            cost_price: self.cost_price,
            selling_price: self.selling_price,
            quantity_on_hand: self.quantity_on_hand,
            low_stock_threshold: self.low_stock_threshold,
            barcode: self.barcode,
            description: self.description,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a catalog item; only the set fields change.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub cost_price: Option<Money>,
    pub selling_price: Option<Money>,
    pub quantity_on_hand: Option<i64>,
    pub low_stock_threshold: Option<i64>,
    pub barcode: Option<String>,
    pub description: Option<String>,
}

impl ItemUpdate {
    /// Apply the update to an item, bumping its update timestamp.
    pub fn apply(self, item: &mut CatalogItem, now: i64) -> Result<(), PosError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(PosError::Validation("item name must not be empty".into()));
            }
        }
        if let Some(quantity) = self.quantity_on_hand {
            if quantity < 0 {
                return Err(PosError::InvalidQuantity(quantity));
            }
        }
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(cost_price) = self.cost_price {
            item.cost_price = cost_price;
        }
        if let Some(selling_price) = self.selling_price {
            item.selling_price = selling_price;
        }
        if let Some(quantity) = self.quantity_on_hand {
            item.quantity_on_hand = quantity;
        }
        if let Some(threshold) = self.low_stock_threshold {
            item.low_stock_threshold = threshold;
        }
        if let Some(barcode) = self.barcode {
            item.barcode = Some(barcode);
        }
        if let Some(description) = self.description {
            item.description = Some(description);
        }
        item.updated_at = now;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn draft() -> ItemDraft {
        ItemDraft::new(
            "Women's Handbag",
            "Accessories",
            Money::new(15000, Currency::XAF),
            Money::new(25000, Currency::XAF),
        )
        .with_stock(2)
        .with_threshold(10)
        .with_barcode("BAG001")
    }

    #[test]
    fn test_draft_builds_item() {
        let item = draft().into_item(1_700_000_000);
        assert_eq!(item.name, "Women's Handbag");
        assert_eq!(item.quantity_on_hand, 2);
        assert_eq!(item.barcode.as_deref(), Some("BAG001"));
        assert_eq!(item.created_at, item.updated_at);
    }

    #[test]
    fn test_draft_rejects_empty_name() {
        let mut d = draft();
        d.name = "  ".into();
        assert!(matches!(d.validate(), Err(PosError::Validation(_))));
    }

    #[test]
    fn test_draft_rejects_negative_stock() {
        let d = draft().with_stock(-1);
        assert!(matches!(d.validate(), Err(PosError::InvalidQuantity(-1))));
    }

    #[test]
    fn test_low_stock_flags() {
        let mut item = draft().into_item(0);
        assert!(item.is_low_stock()); // 2 on hand, threshold 10
        assert!(!item.is_out_of_stock());

        item.quantity_on_hand = 0;
        assert!(item.is_out_of_stock());
        assert!(!item.is_low_stock());

        item.quantity_on_hand = 11;
        assert!(!item.is_low_stock());
    }

    #[test]
    fn test_update_applies_only_set_fields() {
        let mut item = draft().into_item(0);
        let update = ItemUpdate {
            quantity_on_hand: Some(7),
            description: Some("Elegant leather handbag".into()),
            ..ItemUpdate::default()
        };
        update.apply(&mut item, 42).unwrap();

        assert_eq!(item.quantity_on_hand, 7);
        assert_eq!(item.description.as_deref(), Some("Elegant leather handbag"));
        assert_eq!(item.name, "Women's Handbag");
        assert_eq!(item.updated_at, 42);
    }

    #[test]
    fn test_update_rejects_negative_quantity() {
        let mut item = draft().into_item(0);
        let update = ItemUpdate {
            quantity_on_hand: Some(-3),
            ..ItemUpdate::default()
        };
        assert!(update.apply(&mut item, 1).is_err());
        assert_eq!(item.quantity_on_hand, 2);
    }

    #[test]
    fn test_stock_value() {
        let item = draft().into_item(0);
        assert_eq!(item.stock_value().unwrap().amount_minor, 30000);
    }
}
