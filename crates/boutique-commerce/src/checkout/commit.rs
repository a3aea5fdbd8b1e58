//! The commit flow: cart to persisted sale.

use crate::cart::Cart;
use crate::catalog::{AdjustmentReason, CatalogStore};
use crate::checkout::{Sale, SaleRecorder};
use crate::error::PosError;
use std::sync::Arc;
use tracing::{info, warn};

/// Commits carts against a catalog store and a sale recorder.
pub struct Checkout {
    catalog: Arc<dyn CatalogStore>,
    recorder: Arc<dyn SaleRecorder>,
}

impl Checkout {
    /// Create a checkout over the given stores.
    pub fn new(catalog: Arc<dyn CatalogStore>, recorder: Arc<dyn SaleRecorder>) -> Self {
        Self { catalog, recorder }
    }

    /// Finalize the cart into a [`Sale`].
    ///
    /// Validation failures and a recording failure abort cleanly with the
    /// cart and catalog untouched. Once the sale record is written, stock
    /// decrements run strictly in cart order, each awaited before the
    /// next; a failure there returns [`PosError::PartialCommit`] and the
    /// already-applied decrements stand. Only full success clears the
    /// cart.
    pub async fn commit(&self, cart: &mut Cart) -> Result<Sale, PosError> {
        if cart.is_empty() {
            return Err(PosError::EmptyCart);
        }

        // Re-resolve every line; the catalog may have changed since the
        // lines were added.
        for line in cart.lines() {
            match self.catalog.get(&line.item_id).await {
                Ok(_) => {}
                Err(PosError::NotFound(id)) => return Err(PosError::StockConflict(id)),
                Err(e) => return Err(e),
            }
        }

        let totals = cart.totals()?;
        let sale = Sale::from_cart(cart, &totals);

        self.recorder.record(&sale).await?;

        let total_lines = cart.line_count();
        for (applied, line) in cart.lines().iter().enumerate() {
            if let Err(e) = self
                .catalog
                .adjust_stock(&line.item_id, -line.quantity, AdjustmentReason::Sale)
                .await
            {
                warn!(
                    sale = %sale.id,
                    applied,
                    total = total_lines,
                    error = %e,
                    "stock update failed mid-commit; sale record stands"
                );
                return Err(PosError::PartialCommit {
                    sale_id: sale.id.clone(),
                    applied,
                    total: total_lines,
                    reason: e.to_string(),
                });
            }
        }

        cart.clear();
        info!(sale = %sale.id, total = %sale.total, "sale committed");
        Ok(sale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogItem, ItemDraft, ItemUpdate};
    use crate::ids::ItemId;
    use crate::money::{Currency, Money};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StubCatalog {
        items: Mutex<Vec<CatalogItem>>,
        fail_adjust_for: Option<ItemId>,
    }

    impl StubCatalog {
        fn new(items: Vec<CatalogItem>) -> Self {
            Self {
                items: Mutex::new(items),
                fail_adjust_for: None,
            }
        }

        fn failing_adjust_for(items: Vec<CatalogItem>, id: ItemId) -> Self {
            Self {
                items: Mutex::new(items),
                fail_adjust_for: Some(id),
            }
        }

        fn stock_of(&self, id: &ItemId) -> i64 {
            self.items
                .lock()
                .unwrap()
                .iter()
                .find(|i| &i.id == id)
                .unwrap()
                .quantity_on_hand
        }
    }

    #[async_trait]
    impl CatalogStore for StubCatalog {
        async fn list(&self) -> Result<Vec<CatalogItem>, PosError> {
            Ok(self.items.lock().unwrap().clone())
        }

        async fn get(&self, id: &ItemId) -> Result<CatalogItem, PosError> {
            self.items
                .lock()
                .unwrap()
                .iter()
                .find(|i| &i.id == id)
                .cloned()
                .ok_or_else(|| PosError::NotFound(id.clone()))
        }

        async fn create(&self, draft: ItemDraft) -> Result<CatalogItem, PosError> {
            draft.validate()?;
            let item = draft.into_item(0);
            self.items.lock().unwrap().push(item.clone());
            Ok(item)
        }

        async fn update(&self, id: &ItemId, update: ItemUpdate) -> Result<CatalogItem, PosError> {
            let mut items = self.items.lock().unwrap();
            let item = items
                .iter_mut()
                .find(|i| &i.id == id)
                .ok_or_else(|| PosError::NotFound(id.clone()))?;
            update.apply(item, 0)?;
            Ok(item.clone())
        }

        async fn adjust_stock(
            &self,
            id: &ItemId,
            delta: i64,
            _reason: AdjustmentReason,
        ) -> Result<CatalogItem, PosError> {
            if self.fail_adjust_for.as_ref() == Some(id) {
                return Err(PosError::Persistence("update rejected".into()));
            }
            let mut items = self.items.lock().unwrap();
            let item = items
                .iter_mut()
                .find(|i| &i.id == id)
                .ok_or_else(|| PosError::NotFound(id.clone()))?;
            item.quantity_on_hand = (item.quantity_on_hand + delta).max(0);
            Ok(item.clone())
        }
    }

    struct StubRecorder {
        sales: Mutex<Vec<Sale>>,
        fail: bool,
    }

    impl StubRecorder {
        fn new() -> Self {
            Self {
                sales: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                sales: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn recorded(&self) -> usize {
            self.sales.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl SaleRecorder for StubRecorder {
        async fn record(&self, sale: &Sale) -> Result<(), PosError> {
            if self.fail {
                return Err(PosError::Persistence("insert rejected".into()));
            }
            self.sales.lock().unwrap().push(sale.clone());
            Ok(())
        }
    }

    fn item(id: &str, name: &str, price: i64, stock: i64) -> CatalogItem {
        let mut item = ItemDraft::new(
            name,
            "Clothing",
            Money::new(price / 2, Currency::XAF),
            Money::new(price, Currency::XAF),
        )
        .with_stock(stock)
        .into_item(0);
        item.id = ItemId::new(id);
        item
    }

    fn two_item_catalog() -> Vec<CatalogItem> {
        vec![
            item("1", "Women's Handbag", 25000, 2),
            item("2", "Men's Sneakers", 35000, 1),
        ]
    }

    fn full_cart(items: &[CatalogItem]) -> Cart {
        let mut cart = Cart::new(Currency::XAF);
        cart.add_item(&items[0]).unwrap();
        cart.add_item(&items[0]).unwrap();
        cart.add_item(&items[1]).unwrap();
        cart
    }

    #[tokio::test]
    async fn test_commit_empty_cart_fails_without_side_effects() {
        let catalog = Arc::new(StubCatalog::new(two_item_catalog()));
        let recorder = Arc::new(StubRecorder::new());
        let checkout = Checkout::new(catalog.clone(), recorder.clone());

        let mut cart = Cart::new(Currency::XAF);
        let err = checkout.commit(&mut cart).await.unwrap_err();
        assert!(matches!(err, PosError::EmptyCart));
        assert_eq!(recorder.recorded(), 0);
        assert_eq!(catalog.stock_of(&ItemId::new("1")), 2);
    }

    #[tokio::test]
    async fn test_commit_success_decrements_stock_and_clears_cart() {
        let items = two_item_catalog();
        let catalog = Arc::new(StubCatalog::new(items.clone()));
        let recorder = Arc::new(StubRecorder::new());
        let checkout = Checkout::new(catalog.clone(), recorder.clone());

        let mut cart = full_cart(&items);
        cart.set_discount_percent(10.0).unwrap();

        let sale = checkout.commit(&mut cart).await.unwrap();
        assert_eq!(sale.subtotal.amount_minor, 85000);
        assert_eq!(sale.discount_amount.amount_minor, 8500);
        assert_eq!(sale.total.amount_minor, 76500);

        assert_eq!(catalog.stock_of(&ItemId::new("1")), 0);
        assert_eq!(catalog.stock_of(&ItemId::new("2")), 0);
        assert!(cart.is_empty());
        assert_eq!(cart.discount_percent(), 0.0);
        assert_eq!(recorder.recorded(), 1);
    }

    #[tokio::test]
    async fn test_commit_detects_vanished_item() {
        let items = two_item_catalog();
        // the catalog only knows the first item; the cart references both
        let catalog = Arc::new(StubCatalog::new(items[..1].to_vec()));
        let recorder = Arc::new(StubRecorder::new());
        let checkout = Checkout::new(catalog.clone(), recorder.clone());

        let mut cart = full_cart(&items);
        let err = checkout.commit(&mut cart).await.unwrap_err();
        assert!(matches!(err, PosError::StockConflict(id) if id.as_str() == "2"));
        assert_eq!(recorder.recorded(), 0);
        assert_eq!(catalog.stock_of(&ItemId::new("1")), 2);
        assert_eq!(cart.line_count(), 2);
    }

    #[tokio::test]
    async fn test_recording_failure_aborts_before_stock_mutation() {
        let items = two_item_catalog();
        let catalog = Arc::new(StubCatalog::new(items.clone()));
        let recorder = Arc::new(StubRecorder::failing());
        let checkout = Checkout::new(catalog.clone(), recorder.clone());

        let mut cart = full_cart(&items);
        let err = checkout.commit(&mut cart).await.unwrap_err();
        assert!(matches!(err, PosError::Persistence(_)));
        assert!(!err.is_partial_commit());

        // clean abort: nothing moved, cart intact
        assert_eq!(catalog.stock_of(&ItemId::new("1")), 2);
        assert_eq!(catalog.stock_of(&ItemId::new("2")), 1);
        assert_eq!(cart.line_count(), 2);
    }

    #[tokio::test]
    async fn test_adjust_failure_reports_partial_commit() {
        let items = two_item_catalog();
        let catalog = Arc::new(StubCatalog::failing_adjust_for(
            items.clone(),
            ItemId::new("2"),
        ));
        let recorder = Arc::new(StubRecorder::new());
        let checkout = Checkout::new(catalog.clone(), recorder.clone());

        let mut cart = full_cart(&items);
        let err = checkout.commit(&mut cart).await.unwrap_err();
        match err {
            PosError::PartialCommit { applied, total, .. } => {
                assert_eq!(applied, 1);
                assert_eq!(total, 2);
            }
            other => panic!("expected partial commit, got {other:?}"),
        }

        // the sale record stands, the first decrement is not rolled back,
        // and the cart is not cleared
        assert_eq!(recorder.recorded(), 1);
        assert_eq!(catalog.stock_of(&ItemId::new("1")), 0);
        assert_eq!(catalog.stock_of(&ItemId::new("2")), 1);
        assert_eq!(cart.line_count(), 2);
    }
}
