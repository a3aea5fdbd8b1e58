//! Point-of-sale domain types and checkout logic for Boutique POS.
//!
//! This crate is the core of a small retail point-of-sale system:
//!
//! - **Catalog**: sellable items, stock levels, the store port
//! - **Cart**: stock-aware line items, discounts, totals
//! - **Scan**: decoded-payload classification and catalog resolution
//! - **Checkout**: sale snapshots and the commit flow
//!
//! Persistence lives behind the [`CatalogStore`](catalog::CatalogStore) and
//! [`SaleRecorder`](checkout::SaleRecorder) ports; `boutique-store` provides
//! the in-memory implementations used in demo mode and in tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use boutique_commerce::prelude::*;
//!
//! let mut cart = Cart::new(Currency::XAF);
//! cart.add_item(&item)?;
//! cart.set_discount_percent(10.0)?;
//!
//! let totals = cart.totals()?;
//! println!("Total: {}", totals.total.display());
//!
//! let checkout = Checkout::new(catalog, recorder);
//! let sale = checkout.commit(&mut cart).await?;
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod scan;

pub use error::PosError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::PosError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        AdjustmentReason, CatalogItem, CatalogStore, CatalogSummary, ItemDraft, ItemUpdate,
        StockAdjustment,
    };

    // Cart
    pub use crate::cart::{Cart, CartLine, CartTotals};

    // Scan
    pub use crate::scan::{resolve, MatchTier, ScanMatch, ScannedPayload, ScannedProduct};

    // Checkout
    pub use crate::checkout::{Checkout, Sale, SaleLine, SaleRecorder};
}
