//! Wallet-open and maintenance entry points.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use bitkit_history::HistorySource;
use bitkit_store::{
    clear_partitions, database_file_name, resolve_checkpoint, ApiSyncStateStore, CheckpointStore,
};

use crate::config::{WalletDescriptor, DEFAULT_PEER_SIZE};
use crate::engine::{EngineContext, EngineFactory};
use crate::error::KitError;
use crate::resolver::{ResolvedConfig, WalletResolver};

/// An opened wallet: the external engine handle plus the configuration it
/// was built from.
#[derive(Debug)]
pub struct Wallet<E> {
    pub engine: E,
    pub config: ResolvedConfig,
    pub database_path: PathBuf,
}

/// Construction entry points.
pub struct Kit;

impl Kit {
    /// Open a wallet: resolve the configuration, derive the storage
    /// partition, resolve the sync checkpoint, build the history source,
    /// and build the external engine.
    ///
    /// All failures surface synchronously; there is no partial
    /// construction. The engine is never built from a half-populated
    /// configuration.
    pub fn open<S, F>(
        descriptor: &WalletDescriptor,
        data_dir: &Path,
        storage: &S,
        sync_state: Arc<dyn ApiSyncStateStore + Send + Sync>,
        engine_factory: &F,
    ) -> Result<Wallet<F::Engine>, KitError>
    where
        S: CheckpointStore,
        F: EngineFactory,
    {
        let resolver = WalletResolver::new();
        let config = resolver.resolve(
            descriptor.purpose,
            descriptor.network,
            descriptor.sync_mode,
            descriptor.api_key.as_ref(),
        )?;

        let file_name = database_file_name(
            &descriptor.wallet_id,
            descriptor.network,
            descriptor.purpose,
            descriptor.sync_mode,
        );
        let database_path = data_dir.join(&file_name);
        let checkpoint = resolve_checkpoint(storage, config.profile)?;
        let history = config
            .history
            .as_ref()
            .map(|plan| HistorySource::build(plan, sync_state.clone()))
            .transpose()?;

        info!(
            wallet = %descriptor.wallet_id,
            network = descriptor.network.as_str(),
            purpose = descriptor.purpose.as_str(),
            sync_mode = descriptor.sync_mode.as_str(),
            checkpoint_height = checkpoint.height,
            "opening wallet"
        );

        let engine = engine_factory
            .build(EngineContext {
                config: &config,
                history,
                checkpoint,
                database_path: database_path.clone(),
                key_material: &descriptor.key_material,
                confirmations_threshold: descriptor.confirmations_threshold,
                peer_size: DEFAULT_PEER_SIZE,
            })
            .map_err(|e| KitError::Construction(e.to_string()))?;

        Ok(Wallet {
            engine,
            config,
            database_path,
        })
    }

    /// Delete every persisted wallet partition in `data_dir` except those
    /// belonging to the allow-listed wallet identifiers. Returns the number
    /// of partitions removed.
    pub fn clear(data_dir: &Path, except_wallet_ids: &[&str]) -> Result<usize, KitError> {
        Ok(clear_partitions(data_dir, except_wallet_ids)?)
    }
}
