//! Resolution of decoded scan text to a catalog item.

use crate::catalog::CatalogItem;
use tracing::debug;

/// Which strategy matched a scanned string.
///
/// Scanned payloads are heterogeneous (raw barcode, item id, or free
/// text) with no reliable tag distinguishing them, so matching cascades
/// through strategies in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    /// Exact barcode equality.
    Barcode,
    /// Exact item-id equality.
    ItemId,
    /// Case-insensitive name substring, either direction.
    Name,
    /// Case-insensitive barcode substring, either direction. Only tried
    /// for decoded text longer than 5 characters.
    BarcodeFragment,
}

impl MatchTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchTier::Barcode => "barcode",
            MatchTier::ItemId => "item id",
            MatchTier::Name => "name",
            MatchTier::BarcodeFragment => "barcode fragment",
        }
    }
}

/// A resolved scan: the item plus the tier that matched it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanMatch<'a> {
    pub item: &'a CatalogItem,
    pub tier: MatchTier,
}

/// Map decoded scan text to a catalog item.
///
/// Tiers are tried strictly in order; the first match wins. Within a
/// tier, ties break by slice position, so passing the catalog in its
/// stable insertion order makes resolution deterministic. Returns `None`
/// for no match; never mutates anything.
pub fn resolve<'a>(decoded: &str, items: &'a [CatalogItem]) -> Option<ScanMatch<'a>> {
    // An empty scan would substring-match every name; treat it as no match.
    if decoded.trim().is_empty() {
        return None;
    }

    if let Some(item) = items.iter().find(|i| i.barcode.as_deref() == Some(decoded)) {
        debug!(item = %item.id, tier = "barcode", "scan resolved");
        return Some(ScanMatch {
            item,
            tier: MatchTier::Barcode,
        });
    }

    if let Some(item) = items.iter().find(|i| i.id.as_str() == decoded) {
        debug!(item = %item.id, tier = "item id", "scan resolved");
        return Some(ScanMatch {
            item,
            tier: MatchTier::ItemId,
        });
    }

    let needle = decoded.to_lowercase();

    if let Some(item) = items.iter().find(|i| {
        let name = i.name.to_lowercase();
        name.contains(&needle) || needle.contains(&name)
    }) {
        debug!(item = %item.id, tier = "name", "scan resolved");
        return Some(ScanMatch {
            item,
            tier: MatchTier::Name,
        });
    }

    if decoded.chars().count() > 5 {
        if let Some(item) = items.iter().find(|i| {
            i.barcode.as_deref().is_some_and(|b| {
                let barcode = b.to_lowercase();
                barcode.contains(&needle) || needle.contains(&barcode)
            })
        }) {
            debug!(item = %item.id, tier = "barcode fragment", "scan resolved");
            return Some(ScanMatch {
                item,
                tier: MatchTier::BarcodeFragment,
            });
        }
    }

    debug!(decoded, "scan did not resolve");
    None
}
