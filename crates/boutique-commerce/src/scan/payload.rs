//! Decoded scan payload classification.

use crate::catalog::ItemDraft;
use crate::money::{Currency, Money};
use serde::Deserialize;

/// Structured product info carried in a QR code.
///
/// Labels printed by the shop encode the whole product as JSON; foreign
/// labels carry only a bare barcode string.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScannedProduct {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub cost_price: Option<f64>,
    #[serde(default)]
    pub selling_price: Option<f64>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub low_stock_threshold: Option<i64>,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ScannedProduct {
    /// Pre-fill an item draft from the scanned fields. Prices are decimal
    /// amounts in the shop's currency; a missing quantity defaults to 1.
    pub fn into_draft(self, currency: Currency) -> ItemDraft {
        let mut draft = ItemDraft::new(
            self.name,
            self.category.unwrap_or_default(),
            Money::from_decimal(self.cost_price.unwrap_or(0.0), currency),
            Money::from_decimal(self.selling_price.unwrap_or(0.0), currency),
        )
        .with_stock(self.quantity.unwrap_or(1))
        .with_threshold(
            self.low_stock_threshold
                .unwrap_or(ItemDraft::DEFAULT_LOW_STOCK_THRESHOLD),
        );
        if let Some(barcode) = self.barcode {
            draft = draft.with_barcode(barcode);
        }
        if let Some(description) = self.description {
            draft = draft.with_description(description);
        }
        draft
    }
}

/// A decoded scan, classified once at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ScannedPayload {
    /// The payload was a product-info JSON object.
    Product(ScannedProduct),
    /// Anything else: treat the raw text as a barcode.
    Barcode(String),
}

impl ScannedPayload {
    /// Classify a decoded string.
    ///
    /// JSON objects with a non-empty `name` become [`Product`]; a
    /// structured payload without its own barcode inherits the raw text.
    /// Everything else is a [`Barcode`].
    ///
    /// [`Product`]: ScannedPayload::Product
    /// [`Barcode`]: ScannedPayload::Barcode
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<ScannedProduct>(raw) {
            Ok(mut info) if !info.name.trim().is_empty() => {
                if info.barcode.is_none() {
                    info.barcode = Some(raw.to_string());
                }
                ScannedPayload::Product(info)
            }
            _ => ScannedPayload::Barcode(raw.to_string()),
        }
    }
}
