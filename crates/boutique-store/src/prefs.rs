//! Shop preferences.

use crate::error::StoreError;
use boutique_commerce::money::Currency;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// UI preferences persisted across sessions as a TOML file.
///
/// The currency preference is read here once and passed into the domain
/// as a [`Currency`] value; nothing else looks preferences up ambiently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Preferences {
    /// Shop display name.
    pub shop_name: String,
    /// Currency code, e.g. "XAF".
    pub currency: String,
    /// UI theme ("light" or "dark").
    pub theme: String,
    /// UI language code, e.g. "en".
    pub language: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            shop_name: "My Boutique".into(),
            currency: Currency::XAF.code().into(),
            theme: "light".into(),
            language: "en".into(),
        }
    }
}

impl Preferences {
    /// Load preferences from `path`. A missing file yields the defaults;
    /// a malformed file is an error rather than a silent reset.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            debug!(path = %path.display(), "no preference file; using defaults");
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Write preferences to `path`, creating parent directories as
    /// needed.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        debug!(path = %path.display(), "preferences saved");
        Ok(())
    }

    /// The configured currency, falling back to XAF for unknown codes.
    pub fn currency(&self) -> Currency {
        Currency::from_code(&self.currency).unwrap_or(Currency::XAF)
    }
}
