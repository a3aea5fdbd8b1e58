//! Store error types.

use thiserror::Error;

/// Errors from the preference file and other local store plumbing.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read or write a store file.
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A preference file did not parse.
    #[error("malformed preference file: {0}")]
    Malformed(#[from] toml::de::Error),

    /// Preferences could not be encoded.
    #[error("failed to encode preferences: {0}")]
    Encode(#[from] toml::ser::Error),
}
