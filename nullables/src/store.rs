//! Nullable stores — thread-safe in-memory storage seams for testing.

use std::collections::HashMap;
use std::sync::Mutex;

use bitkit_store::{ApiSyncStateStore, CheckpointStore, StoreError};
use bitkit_types::{Checkpoint, NetworkKind};

/// An in-memory checkpoint store.
#[derive(Default)]
pub struct NullCheckpointStore {
    checkpoints: Mutex<HashMap<NetworkKind, Checkpoint>>,
}

impl NullCheckpointStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a checkpoint, as if a previous session had synced past it.
    pub fn with_checkpoint(network: NetworkKind, checkpoint: Checkpoint) -> Self {
        let store = Self::new();
        store
            .checkpoints
            .lock()
            .unwrap()
            .insert(network, checkpoint);
        store
    }
}

impl CheckpointStore for NullCheckpointStore {
    fn checkpoint(&self, network: NetworkKind) -> Result<Option<Checkpoint>, StoreError> {
        Ok(self.checkpoints.lock().unwrap().get(&network).copied())
    }

    fn set_checkpoint(
        &self,
        network: NetworkKind,
        checkpoint: Checkpoint,
    ) -> Result<(), StoreError> {
        self.checkpoints
            .lock()
            .unwrap()
            .insert(network, checkpoint);
        Ok(())
    }
}

/// An in-memory API-sync-state flag.
#[derive(Default)]
pub struct NullApiSyncState {
    restored: Mutex<bool>,
}

impl NullApiSyncState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn restored() -> Self {
        Self {
            restored: Mutex::new(true),
        }
    }
}

impl ApiSyncStateStore for NullApiSyncState {
    fn restore_completed(&self) -> Result<bool, StoreError> {
        Ok(*self.restored.lock().unwrap())
    }

    fn set_restore_completed(&self, completed: bool) -> Result<(), StoreError> {
        *self.restored.lock().unwrap() = completed;
        Ok(())
    }
}
