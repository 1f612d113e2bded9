//! Checkpoint and API-sync-state seams.

use bitkit_types::{Checkpoint, NetworkKind, NetworkProfile, SyncMode};

use crate::StoreError;

/// Checkpoint persistence, implemented by the external storage engine.
pub trait CheckpointStore {
    /// Most recent locally persisted checkpoint for a network, if any.
    fn checkpoint(&self, network: NetworkKind) -> Result<Option<Checkpoint>, StoreError>;

    /// Persist a new checkpoint for a network.
    fn set_checkpoint(&self, network: NetworkKind, checkpoint: Checkpoint)
        -> Result<(), StoreError>;
}

/// Persisted state of the initial remote-index restore.
pub trait ApiSyncStateStore {
    /// Whether the initial restore from the remote index has completed.
    fn restore_completed(&self) -> Result<bool, StoreError>;

    /// Record completion (or reset) of the initial restore.
    fn set_restore_completed(&self, completed: bool) -> Result<(), StoreError>;
}

/// Resolve the checkpoint initial sync starts from: the newest stored
/// checkpoint, falling back to the profile's genesis block.
pub fn resolve_checkpoint(
    store: &dyn CheckpointStore,
    profile: &NetworkProfile,
) -> Result<Checkpoint, StoreError> {
    Ok(store.checkpoint(profile.network)?.unwrap_or(profile.genesis))
}

/// Whether transaction history is restored from a remote index at all:
/// the network must have one, and the wallet must not have asked for a
/// full peer-to-peer sync.
pub fn restore_from_api(profile: &NetworkProfile, sync_mode: SyncMode) -> bool {
    profile.syncable_from_api && sync_mode != SyncMode::Full
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptyStore;

    impl CheckpointStore for EmptyStore {
        fn checkpoint(&self, _network: NetworkKind) -> Result<Option<Checkpoint>, StoreError> {
            Ok(None)
        }

        fn set_checkpoint(
            &self,
            _network: NetworkKind,
            _checkpoint: Checkpoint,
        ) -> Result<(), StoreError> {
            Ok(())
        }
    }

    #[test]
    fn empty_store_falls_back_to_genesis() {
        for network in NetworkKind::ALL {
            let profile = NetworkProfile::for_network(network);
            let resolved = resolve_checkpoint(&EmptyStore, profile).unwrap();
            assert_eq!(resolved, profile.genesis);
        }
    }

    #[test]
    fn full_sync_never_restores_from_api() {
        for network in NetworkKind::ALL {
            let profile = NetworkProfile::for_network(network);
            assert!(!restore_from_api(profile, SyncMode::Full));
        }
    }

    #[test]
    fn api_restore_requires_a_remote_index() {
        let mainnet = NetworkProfile::for_network(NetworkKind::MainNet);
        let regtest = NetworkProfile::for_network(NetworkKind::RegTest);
        assert!(restore_from_api(mainnet, SyncMode::Api));
        assert!(restore_from_api(mainnet, SyncMode::ApiWithKey));
        assert!(!restore_from_api(regtest, SyncMode::Api));
    }
}
