//! Session state.

use boutique_commerce::ids::OwnerId;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Handle to the current session.
///
/// Cloneable; all clones share the same state. The stores consult it to
/// decide between durable writes (owner-scoped) and degraded demo mode.
/// Credential handling lives entirely outside this crate.
#[derive(Clone, Default)]
pub struct SessionState {
    owner: Arc<RwLock<Option<OwnerId>>>,
}

impl SessionState {
    /// Create a session with nobody signed in.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Create a session already signed in as `owner`.
    pub fn signed_in(owner: OwnerId) -> Self {
        Self {
            owner: Arc::new(RwLock::new(Some(owner))),
        }
    }

    /// Sign an owner in.
    pub async fn sign_in(&self, owner: OwnerId) {
        *self.owner.write().await = Some(owner);
    }

    /// Sign the current owner out.
    pub async fn sign_out(&self) {
        *self.owner.write().await = None;
    }

    /// The current owner, if one is signed in.
    pub async fn owner(&self) -> Option<OwnerId> {
        self.owner.read().await.clone()
    }

    /// Check whether a session exists.
    pub async fn is_authenticated(&self) -> bool {
        self.owner.read().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sign_in_and_out() {
        let session = SessionState::anonymous();
        assert!(!session.is_authenticated().await);

        session.sign_in(OwnerId::new("owner-1")).await;
        assert!(session.is_authenticated().await);
        assert_eq!(session.owner().await, Some(OwnerId::new("owner-1")));

        session.sign_out().await;
        assert_eq!(session.owner().await, None);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let session = SessionState::anonymous();
        let clone = session.clone();
        session.sign_in(OwnerId::new("owner-1")).await;
        assert!(clone.is_authenticated().await);
    }
}
