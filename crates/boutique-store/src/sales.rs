//! In-memory sale log.

use crate::session::SessionState;
use async_trait::async_trait;
use boutique_commerce::checkout::{Sale, SaleRecorder};
use boutique_commerce::error::PosError;
use boutique_commerce::ids::OwnerId;
use tokio::sync::RwLock;
use tracing::debug;

/// An in-memory [`SaleRecorder`] with per-owner scoping.
///
/// With a signed-in session, sales are kept against the session's owner.
/// Without one, recording is a deterministic success that writes
/// nothing: the documented degraded mode, matching how the rest of the
/// app behaves when only the demo data is live.
pub struct SaleLog {
    session: SessionState,
    sales: RwLock<Vec<(OwnerId, Sale)>>,
}

impl SaleLog {
    /// Create a sale log bound to a session handle.
    pub fn new(session: SessionState) -> Self {
        Self {
            session,
            sales: RwLock::new(Vec::new()),
        }
    }

    /// Sales for one owner, newest first.
    pub async fn sales_for(&self, owner: &OwnerId) -> Vec<Sale> {
        self.sales
            .read()
            .await
            .iter()
            .rev()
            .filter(|(o, _)| o == owner)
            .map(|(_, sale)| sale.clone())
            .collect()
    }

    /// Number of sales recorded across all owners.
    pub async fn recorded(&self) -> usize {
        self.sales.read().await.len()
    }
}

#[async_trait]
impl SaleRecorder for SaleLog {
    async fn record(&self, sale: &Sale) -> Result<(), PosError> {
        match self.session.owner().await {
            Some(owner) => {
                self.sales.write().await.push((owner, sale.clone()));
                debug!(sale = %sale.id, "sale recorded");
                Ok(())
            }
            None => {
                // degraded mode: no session, nothing durable to write to
                debug!(sale = %sale.id, "no session; sale not persisted");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boutique_commerce::cart::Cart;
    use boutique_commerce::catalog::ItemDraft;
    use boutique_commerce::money::{Currency, Money};

    fn sale() -> Sale {
        let item = ItemDraft::new(
            "Summer Dress",
            "Clothing",
            Money::new(8000, Currency::XAF),
            Money::new(12700, Currency::XAF),
        )
        .with_stock(3)
        .into_item(0);
        let mut cart = Cart::new(Currency::XAF);
        cart.add_item(&item).unwrap();
        let totals = cart.totals().unwrap();
        Sale::from_cart(&cart, &totals)
    }

    #[tokio::test]
    async fn test_record_with_session() {
        let owner = OwnerId::new("owner-1");
        let log = SaleLog::new(SessionState::signed_in(owner.clone()));
        log.record(&sale()).await.unwrap();

        assert_eq!(log.recorded().await, 1);
        assert_eq!(log.sales_for(&owner).await.len(), 1);
    }

    #[tokio::test]
    async fn test_record_without_session_is_a_silent_success() {
        let log = SaleLog::new(SessionState::anonymous());
        log.record(&sale()).await.unwrap();
        assert_eq!(log.recorded().await, 0);
    }

    #[tokio::test]
    async fn test_sales_are_scoped_to_their_owner() {
        let session = SessionState::signed_in(OwnerId::new("owner-1"));
        let log = SaleLog::new(session.clone());
        log.record(&sale()).await.unwrap();

        session.sign_in(OwnerId::new("owner-2")).await;
        log.record(&sale()).await.unwrap();

        assert_eq!(log.sales_for(&OwnerId::new("owner-1")).await.len(), 1);
        assert_eq!(log.sales_for(&OwnerId::new("owner-2")).await.len(), 1);
        assert_eq!(log.sales_for(&OwnerId::new("owner-3")).await.len(), 0);
    }

    #[tokio::test]
    async fn test_sales_come_back_newest_first() {
        let owner = OwnerId::new("owner-1");
        let log = SaleLog::new(SessionState::signed_in(owner.clone()));
        let first = sale();
        let second = sale();
        log.record(&first).await.unwrap();
        log.record(&second).await.unwrap();

        let sales = log.sales_for(&owner).await;
        assert_eq!(sales[0].id, second.id);
        assert_eq!(sales[1].id, first.id);
    }
}
