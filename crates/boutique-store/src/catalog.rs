//! In-memory catalog store.

use async_trait::async_trait;
use boutique_commerce::catalog::{
    AdjustmentReason, CatalogItem, CatalogStore, ItemDraft, ItemUpdate, StockAdjustment,
};
use boutique_commerce::error::PosError;
use boutique_commerce::ids::ItemId;
use boutique_commerce::money::{Currency, Money};
use tokio::sync::RwLock;
use tracing::debug;

/// An in-memory [`CatalogStore`].
///
/// Backs the demo mode (no authenticated session) and the test suites.
/// Items keep their insertion order, which makes scan-resolution
/// tie-breaks deterministic. Every stock adjustment is kept in an audit
/// trail.
pub struct MemoryCatalog {
    items: RwLock<Vec<CatalogItem>>,
    adjustments: RwLock<Vec<StockAdjustment>>,
}

impl MemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            adjustments: RwLock::new(Vec::new()),
        }
    }

    /// Create a catalog holding the given items.
    pub fn with_items(items: Vec<CatalogItem>) -> Self {
        Self {
            items: RwLock::new(items),
            adjustments: RwLock::new(Vec::new()),
        }
    }

    /// The demo catalog shown when nobody is signed in.
    pub fn sample() -> Self {
        let now = current_timestamp();
        let item = |id: &str, draft: ItemDraft| {
            let mut item = draft.into_item(now);
            item.id = ItemId::new(id);
            item
        };
        let xaf = |amount: i64| Money::new(amount, Currency::XAF);

        Self::with_items(vec![
            item(
                "1",
                ItemDraft::new("Women's Handbag", "Accessories", xaf(15000), xaf(25000))
                    .with_stock(2)
                    .with_threshold(10)
                    .with_barcode("BAG001")
                    .with_description("Elegant leather handbag"),
            ),
            item(
                "2",
                ItemDraft::new("Men's Sneakers", "Footwear", xaf(20000), xaf(35000))
                    .with_stock(1)
                    .with_threshold(5)
                    .with_barcode("SHOE001")
                    .with_description("Comfortable running sneakers"),
            ),
            item(
                "3",
                ItemDraft::new("Summer Dress", "Clothing", xaf(8000), xaf(12700))
                    .with_stock(3)
                    .with_threshold(8)
                    .with_barcode("DRESS001")
                    .with_description("Light summer dress"),
            ),
            item(
                "4",
                ItemDraft::new("Evening Dress", "Clothing", xaf(50000), xaf(78200))
                    .with_stock(15)
                    .with_threshold(5)
                    .with_barcode("DRESS002")
                    .with_description("Elegant evening dress"),
            ),
            item(
                "5",
                ItemDraft::new("Men's Shirt", "Clothing", xaf(25000), xaf(45600))
                    .with_stock(8)
                    .with_threshold(6)
                    .with_barcode("SHIRT001")
                    .with_description("Formal business shirt"),
            ),
        ])
    }

    /// Delete an item. The checkout core never deletes; this exists for
    /// the catalog-management screens.
    pub async fn remove(&self, id: &ItemId) -> Result<CatalogItem, PosError> {
        let mut items = self.items.write().await;
        let position = items
            .iter()
            .position(|i| &i.id == id)
            .ok_or_else(|| PosError::NotFound(id.clone()))?;
        let item = items.remove(position);
        debug!(item = %item.id, "item removed from catalog");
        Ok(item)
    }

    /// The stock adjustment audit trail, oldest first.
    pub async fn adjustments(&self) -> Vec<StockAdjustment> {
        self.adjustments.read().await.clone()
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalog {
    async fn list(&self) -> Result<Vec<CatalogItem>, PosError> {
        Ok(self.items.read().await.clone())
    }

    async fn get(&self, id: &ItemId) -> Result<CatalogItem, PosError> {
        self.items
            .read()
            .await
            .iter()
            .find(|i| &i.id == id)
            .cloned()
            .ok_or_else(|| PosError::NotFound(id.clone()))
    }

    async fn create(&self, draft: ItemDraft) -> Result<CatalogItem, PosError> {
        draft.validate()?;
        let item = draft.into_item(current_timestamp());
        self.items.write().await.push(item.clone());
        debug!(item = %item.id, name = %item.name, "item created");
        Ok(item)
    }

    async fn update(&self, id: &ItemId, update: ItemUpdate) -> Result<CatalogItem, PosError> {
        let mut items = self.items.write().await;
        let item = items
            .iter_mut()
            .find(|i| &i.id == id)
            .ok_or_else(|| PosError::NotFound(id.clone()))?;
        update.apply(item, current_timestamp())?;
        debug!(item = %item.id, "item updated");
        Ok(item.clone())
    }

    async fn adjust_stock(
        &self,
        id: &ItemId,
        delta: i64,
        reason: AdjustmentReason,
    ) -> Result<CatalogItem, PosError> {
        let now = current_timestamp();
        let mut items = self.items.write().await;
        let item = items
            .iter_mut()
            .find(|i| &i.id == id)
            .ok_or_else(|| PosError::NotFound(id.clone()))?;
        // floor at zero: draining past empty clamps, it never fails
        item.quantity_on_hand = (item.quantity_on_hand + delta).max(0);
        item.updated_at = now;
        let item = item.clone();
        drop(items);

        self.adjustments.write().await.push(StockAdjustment {
            item_id: id.clone(),
            delta,
            reason,
            timestamp: now,
        });
        debug!(
            item = %item.id,
            delta,
            reason = reason.as_str(),
            on_hand = item.quantity_on_hand,
            "stock adjusted"
        );
        Ok(item)
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
