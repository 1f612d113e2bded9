//! The engine capability interface.
//!
//! The external engine (block sync, validation, peer networking, storage
//! backend) is injected through this seam so the composition layer can be
//! exercised without a real engine present. The kit builds an engine once
//! per wallet-open call and never calls back into it.

use std::path::PathBuf;

use thiserror::Error;

use bitkit_history::HistorySource;
use bitkit_types::Checkpoint;

use crate::config::KeyMaterial;
use crate::resolver::ResolvedConfig;

/// Everything the external engine constructor consumes.
pub struct EngineContext<'a> {
    /// The fully resolved wallet configuration.
    pub config: &'a ResolvedConfig,
    /// Live history source built from the configuration's plan, or `None`
    /// on networks without a remote index.
    pub history: Option<HistorySource>,
    /// Where initial sync starts.
    pub checkpoint: Checkpoint,
    /// The wallet's storage partition.
    pub database_path: PathBuf,
    /// Seed or extended key the engine derives addresses from.
    pub key_material: &'a KeyMaterial,
    /// Confirmations before a transaction counts as settled.
    pub confirmations_threshold: u32,
    /// Number of peers the engine connects to.
    pub peer_size: u32,
}

/// The engine failed to initialize. Propagated, not retried: it indicates
/// unrecoverable local state.
#[derive(Debug, Error)]
#[error("engine construction failed: {0}")]
pub struct EngineBuildError(pub String);

/// Constructor capability for the external engine.
pub trait EngineFactory {
    type Engine;

    /// Build an engine from a fully resolved configuration. Never called
    /// with a partially populated context.
    fn build(&self, ctx: EngineContext<'_>) -> Result<Self::Engine, EngineBuildError>;
}
