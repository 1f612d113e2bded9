//! Keyed provider with public restore fallback.

use std::sync::Arc;

use tracing::debug;

use bitkit_store::ApiSyncStateStore;

use crate::error::HistoryError;
use crate::item::TransactionItem;
use crate::keyed::KeyedHistoryApi;
use crate::public::PublicHistoryApi;

/// Which half of the pair serves the next fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FallbackRole {
    /// Initial restore not yet completed: use the public provider, which
    /// covers history from before the keyed index's coverage window.
    Restore,
    /// Restore completed: use the keyed provider for ongoing sync.
    Sync,
}

/// The keyed/public provider pair used by keyed sync mode on mainnet.
///
/// The persisted API-sync state decides which provider is active; the
/// engine flips the state once the initial restore completes.
pub struct FallbackPair {
    sync: KeyedHistoryApi,
    restore: PublicHistoryApi,
    sync_state: Arc<dyn ApiSyncStateStore + Send + Sync>,
}

impl FallbackPair {
    pub fn new(
        sync: KeyedHistoryApi,
        restore: PublicHistoryApi,
        sync_state: Arc<dyn ApiSyncStateStore + Send + Sync>,
    ) -> Self {
        Self {
            sync,
            restore,
            sync_state,
        }
    }

    /// The provider the next fetch will use.
    pub fn active_role(&self) -> Result<FallbackRole, HistoryError> {
        if self.sync_state.restore_completed()? {
            Ok(FallbackRole::Sync)
        } else {
            Ok(FallbackRole::Restore)
        }
    }

    /// Fetch through whichever provider the sync state selects.
    pub async fn transactions(
        &self,
        addresses: &[String],
        since_height: u32,
    ) -> Result<Vec<TransactionItem>, HistoryError> {
        let role = self.active_role()?;
        debug!(?role, "selecting history provider");
        match role {
            FallbackRole::Restore => self.restore.transactions(addresses, since_height).await,
            FallbackRole::Sync => self.sync.transactions(addresses, since_height).await,
        }
    }
}
