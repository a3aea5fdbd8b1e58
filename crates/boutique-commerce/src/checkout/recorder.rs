//! The sale recorder port.

use crate::checkout::Sale;
use crate::error::PosError;
use async_trait::async_trait;

/// Persistence port for completed sales.
///
/// Implementations running without an authenticated session succeed
/// deterministically without writing anywhere durable. That is degraded
/// mode, not an error. With a session, any rejection from the underlying
/// store surfaces as [`PosError::Persistence`].
#[async_trait]
pub trait SaleRecorder: Send + Sync {
    /// Persist a completed sale.
    async fn record(&self, sale: &Sale) -> Result<(), PosError>;
}
