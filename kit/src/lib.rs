//! bitkit — wallet construction over an external Bitcoin engine.
//!
//! The engine (block sync, validation, peer networking, storage) is an
//! external collaborator consumed through capability interfaces. This crate
//! holds the one piece of original decision logic: the wallet-construction
//! resolver, which turns (purpose, network, sync mode) into a fully
//! assembled, immutable [`ResolvedConfig`] — network profile, validator
//! chain, address codec set, recovery strategy set, and history plan — and
//! the [`Kit`] entry points that hand it to the engine.

pub mod config;
pub mod engine;
pub mod error;
pub mod kit;
pub mod logging;
pub mod plugin;
pub mod resolver;

pub use config::{
    KeyMaterial, WalletDescriptor, DEFAULT_CONFIRMATIONS_THRESHOLD, DEFAULT_PEER_SIZE,
};
pub use engine::{EngineBuildError, EngineContext, EngineFactory};
pub use error::{ConfigError, KitError};
pub use kit::{Kit, Wallet};
pub use logging::{init_logging, LogFormat};
pub use plugin::{TimeLockPlugin, WalletPlugin};
pub use resolver::{ResolvedConfig, WalletResolver};
