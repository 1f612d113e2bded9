//! Live history sources built from plans.

use std::sync::Arc;

use bitkit_store::ApiSyncStateStore;

use crate::error::HistoryError;
use crate::fallback::FallbackPair;
use crate::item::TransactionItem;
use crate::keyed::KeyedHistoryApi;
use crate::plan::{HistoryPlan, SourceKind};
use crate::public::PublicHistoryApi;
use crate::testnet::TestNetHistoryApi;

/// A live provider composition, built from a [`HistoryPlan`] at wallet-open
/// time.
pub enum HistorySource {
    PublicMainnet(PublicHistoryApi),
    KeyedWithFallback(FallbackPair),
    TestNet(TestNetHistoryApi),
}

impl HistorySource {
    /// Build the clients a plan describes. `sync_state` is consulted only
    /// by the keyed composition.
    pub fn build(
        plan: &HistoryPlan,
        sync_state: Arc<dyn ApiSyncStateStore + Send + Sync>,
    ) -> Result<Self, HistoryError> {
        match plan {
            HistoryPlan::PublicMainnet { base_url } => {
                Ok(Self::PublicMainnet(PublicHistoryApi::new(base_url)?))
            }
            HistoryPlan::KeyedWithFallback {
                sync_base_url,
                restore_base_url,
                key,
            } => Ok(Self::KeyedWithFallback(FallbackPair::new(
                KeyedHistoryApi::new(sync_base_url, key.clone())?,
                PublicHistoryApi::new(restore_base_url)?,
                sync_state,
            ))),
            HistoryPlan::TestNet { base_url } => {
                Ok(Self::TestNet(TestNetHistoryApi::new(base_url)?))
            }
        }
    }

    /// The source's identity, matching its plan's kind.
    pub fn kind(&self) -> SourceKind {
        match self {
            Self::PublicMainnet(_) => SourceKind::PublicMainnet,
            Self::KeyedWithFallback(_) => SourceKind::KeyedWithFallback,
            Self::TestNet(_) => SourceKind::TestNet,
        }
    }

    /// Fetch confirmed transactions touching any of `addresses` above
    /// `since_height`.
    pub async fn transactions(
        &self,
        addresses: &[String],
        since_height: u32,
    ) -> Result<Vec<TransactionItem>, HistoryError> {
        match self {
            Self::PublicMainnet(api) => api.transactions(addresses, since_height).await,
            Self::KeyedWithFallback(pair) => pair.transactions(addresses, since_height).await,
            Self::TestNet(api) => api.transactions(addresses, since_height).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitkit_nullables::NullApiSyncState;
    use bitkit_types::ApiKey;

    #[test]
    fn built_source_matches_plan_kind() {
        let state = || Arc::new(NullApiSyncState::new());
        let plans = [
            HistoryPlan::public_mainnet(),
            HistoryPlan::keyed_mainnet(ApiKey::new("k")),
            HistoryPlan::testnet(),
        ];
        for plan in plans {
            let source = HistorySource::build(&plan, state()).unwrap();
            assert_eq!(source.kind(), plan.kind());
        }
    }
}
