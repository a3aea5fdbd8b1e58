//! Point-of-sale error types.

use crate::ids::{ItemId, SaleId};
use thiserror::Error;

/// Errors that can occur in point-of-sale operations.
#[derive(Error, Debug)]
pub enum PosError {
    /// Catalog lookup miss.
    #[error("Item not found: {0}")]
    NotFound(ItemId),

    /// The item has no stock at all.
    #[error("{name} is out of stock")]
    OutOfStock { name: String },

    /// The requested quantity exceeds what the catalog has on hand.
    #[error("Only {available} of {name} in stock")]
    StockLimitExceeded { name: String, available: i64 },

    /// Quantity outside the valid range.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Discount percent outside [0, 100].
    #[error("Invalid discount percent: {0}")]
    InvalidDiscount(f64),

    /// Price arithmetic across different currencies.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow in a price calculation.
    #[error("Arithmetic overflow in price calculation")]
    Overflow,

    /// Commit attempted on a cart with no lines.
    #[error("Cart is empty")]
    EmptyCart,

    /// A cart line references an item that vanished from the catalog
    /// between add and commit.
    #[error("Item {0} no longer exists in the catalog")]
    StockConflict(ItemId),

    /// The underlying store rejected a read or write.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// A stock adjustment failed after the sale record was already
    /// written. The sale stands; `applied` of `total` lines were
    /// decremented and are not rolled back.
    #[error(
        "Sale {sale_id} recorded but stock update failed after {applied} of {total} lines: {reason}"
    )]
    PartialCommit {
        sale_id: SaleId,
        applied: usize,
        total: usize,
        reason: String,
    },

    /// A record failed validation before being written.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl PosError {
    /// True when the failure happened before any mutation: the caller can
    /// fix the input and retry immediately.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PosError::OutOfStock { .. }
                | PosError::StockLimitExceeded { .. }
                | PosError::InvalidQuantity(_)
                | PosError::InvalidDiscount(_)
                | PosError::CurrencyMismatch { .. }
                | PosError::EmptyCart
                | PosError::Validation(_)
        )
    }

    /// True when a commit failed after some of its effects were already
    /// applied. Callers must surface this differently from a clean
    /// failure: the sale is recorded but stock is only partially updated.
    pub fn is_partial_commit(&self) -> bool {
        matches!(self, PosError::PartialCommit { .. })
    }
}
