//! The catalog store port and the stock adjustment audit record.

use crate::catalog::{CatalogItem, ItemDraft, ItemUpdate};
use crate::error::PosError;
use crate::ids::ItemId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Persistence port for the catalog.
///
/// Implementations may be backed by a remote record store or by memory;
/// any call may reject with [`PosError::Persistence`]. A failing call must
/// not leave partial side effects of its own.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Return the current catalog in stable insertion order.
    async fn list(&self) -> Result<Vec<CatalogItem>, PosError>;

    /// Look up a single item.
    async fn get(&self, id: &ItemId) -> Result<CatalogItem, PosError>;

    /// Validate and persist a new item.
    async fn create(&self, draft: ItemDraft) -> Result<CatalogItem, PosError>;

    /// Apply a partial update to an existing item.
    async fn update(&self, id: &ItemId, update: ItemUpdate) -> Result<CatalogItem, PosError>;

    /// Add `delta` (which may be negative) to the item's stock, flooring
    /// at zero. Draining past zero clamps silently; it is never an error.
    async fn adjust_stock(
        &self,
        id: &ItemId,
        delta: i64,
        reason: AdjustmentReason,
    ) -> Result<CatalogItem, PosError>;
}

/// Reason for a stock adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdjustmentReason {
    /// Sold to a customer.
    Sale,
    /// Returned by a customer.
    Return,
    /// Restocked from a supplier.
    Restock,
    /// Manual correction.
    Correction,
}

impl AdjustmentReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdjustmentReason::Sale => "sale",
            AdjustmentReason::Return => "return",
            AdjustmentReason::Restock => "restock",
            AdjustmentReason::Correction => "correction",
        }
    }
}

/// A stock adjustment record, kept for the audit trail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockAdjustment {
    /// Item that was adjusted.
    pub item_id: ItemId,
    /// Requested change, positive or negative, before any clamping.
    pub delta: i64,
    /// Why the stock moved.
    pub reason: AdjustmentReason,
    /// Unix timestamp of the adjustment.
    pub timestamp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_labels() {
        assert_eq!(AdjustmentReason::Sale.as_str(), "sale");
        assert_eq!(AdjustmentReason::Correction.as_str(), "correction");
    }
}
